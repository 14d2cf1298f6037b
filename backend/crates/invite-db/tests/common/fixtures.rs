use invite_core::{Code, Course, Identity, StudyTest};

use chrono::NaiveDate;

/// An unclaimed code with a fixed id
pub fn create_test_code(id: &str, creator: &Identity) -> Code {
    Code {
        id: id.to_string(),
        creator: creator.clone(),
        user: None,
    }
}

pub fn create_test_course(id: &str, name: &str) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn create_test_study_test(id: i64, course: &str, date: (i32, u32, u32)) -> StudyTest {
    StudyTest {
        id,
        name: format!("Test {}", id),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        difficulty: "medium".to_string(),
        content: vec!["Multiple choice".to_string(), "Short answer".to_string()],
        course: course.to_string(),
    }
}
