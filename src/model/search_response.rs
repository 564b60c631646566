use serde::{Deserialize, Serialize};

use crate::model::course::Course;
use crate::model::enrollment::Enrollment;

/// One course together with its enrollments. Rendering keeps the pair
/// together: the course table is immediately followed by its students table.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchEntry {
    pub course: Course,

    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
}

/// Wire shape of a `/search` reply. The service answers either with an
/// ordered list of entries, or with a single object whose null `course`
/// means no match.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum SearchResponse {
    Entries(Vec<SearchEntry>),

    Single {
        course: Option<Course>,

        #[serde(default)]
        enrollments: Vec<Enrollment>,
    },
}

impl SearchResponse {
    /// Normalizes both wire shapes into an ordered entry list.
    /// An empty list means the server had no matching course.
    pub fn into_entries(self) -> Vec<SearchEntry> {
        match self {
            SearchResponse::Entries(entries) => entries,
            SearchResponse::Single {
                course: Some(course),
                enrollments,
            } => vec![SearchEntry { course, enrollments }],
            SearchResponse::Single { course: None, .. } => Vec::new(),
        }
    }
}
