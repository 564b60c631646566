use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Course {
    pub id: u64,

    pub name: String,

    /// Missing on some deployments of the search service.
    #[serde(default)]
    pub description: Option<String>,

    pub heading: String,

    pub is_published: bool,

    pub image_url: String,
}
