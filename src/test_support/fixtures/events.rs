use crate::modules::timetable::core::events::v1::teacher_registered::TeacherRegisteredV1;
use crate::test_support::fixtures::teachers::load_teacher_dto;

/// Registration event for the canonical fixture teacher.
pub fn make_teacher_registered_v1_event() -> TeacherRegisteredV1 {
    let dto = load_teacher_dto();
    TeacherRegisteredV1 {
        teacher_id: dto.teacher_id,
        full_name: dto.full_name,
        email: dto.email,
        department: dto.department,
        designation: dto.designation,
        subjects: dto.subjects,
        staff_room: dto.staff_room,
        registered_at: 1_700_000_000_000,
    }
}
