// Signup of a teacher. Transport independent; the handler stamps `registered_at`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTeacher {
    pub teacher_id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub department: String,
    pub designation: String,
    pub subjects: Vec<String>,
    pub staff_room: String,
    pub registered_at: i64,
}
