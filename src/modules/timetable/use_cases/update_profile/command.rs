/// Profile edit as submitted by the teacher. Every editable field is sent; the id is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProfile {
    pub teacher_id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub department: String,
    pub designation: String,
    pub subjects: Vec<String>,
    pub staff_room: String,
    pub updated_at: i64,
}
