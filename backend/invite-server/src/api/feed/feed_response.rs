use invite_core::{Course, StudyTest};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedResponse {
    pub school: String,
    /// None when the course is unknown or no courses exist
    pub course: Option<Course>,
    pub tests: Vec<StudyTest>,
}
