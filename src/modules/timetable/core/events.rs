pub mod v1 {
    pub mod profile_updated;
    pub mod slot_assigned;
    pub mod status_updated;
    pub mod teacher_registered;
    pub mod timetable_replaced;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TeacherEvent {
    TeacherRegisteredV1(v1::teacher_registered::TeacherRegisteredV1),
    StatusUpdatedV1(v1::status_updated::StatusUpdatedV1),
    TimetableReplacedV1(v1::timetable_replaced::TimetableReplacedV1),
    SlotAssignedV1(v1::slot_assigned::SlotAssignedV1),
    ProfileUpdatedV1(v1::profile_updated::ProfileUpdatedV1),
}

impl TeacherEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            TeacherEvent::TeacherRegisteredV1(_) => "TeacherRegistered",
            TeacherEvent::StatusUpdatedV1(_) => "StatusUpdated",
            TeacherEvent::TimetableReplacedV1(_) => "TimetableReplaced",
            TeacherEvent::SlotAssignedV1(_) => "SlotAssigned",
            TeacherEvent::ProfileUpdatedV1(_) => "ProfileUpdated",
        }
    }
}
