use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Enrollment {
    pub user_id: u64,

    pub user_name: String,

    pub user_email: String,

    pub enrolled_at: String,

    /// Null until the student finishes the course.
    #[serde(default)]
    pub completed_at: Option<String>,

    /// 0 to 100.
    pub percent_complete: u32,

    /// Null for enrollments without an expiry.
    #[serde(default)]
    pub expires_at: Option<String>,
}
