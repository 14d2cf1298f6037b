use invite_core::Course;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CourseListResponse {
    pub courses: Vec<Course>,
}
