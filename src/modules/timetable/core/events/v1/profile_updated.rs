use serde::{Deserialize, Serialize};

/// Every editable profile field after the edit. Status and timetable are not part of a profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdatedV1 {
    pub teacher_id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub department: String,
    pub designation: String,
    pub subjects: Vec<String>,
    pub staff_room: String,
    pub updated_at: i64,
}
