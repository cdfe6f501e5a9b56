/// Manual status change as requested by a client. `status` is validated by the decider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatus {
    pub teacher_id: String,
    pub status: String,
    pub updated_at: i64,
}
