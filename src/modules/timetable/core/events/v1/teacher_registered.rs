use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeacherRegisteredV1 {
    pub teacher_id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub department: String,
    pub designation: String,
    pub subjects: Vec<String>,
    pub staff_room: String,
    pub registered_at: i64,
}
