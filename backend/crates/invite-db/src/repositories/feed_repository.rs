use crate::{ContentSeed, Result as DbErrorResult};

use invite_core::{Course, StudyTest};

use chrono::NaiveDate;
use log::info;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct CourseRow {
    id: String,
    name: String,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(FromRow)]
struct StudyTestRow {
    id: i64,
    name: String,
    date: NaiveDate,
    difficulty: String,
    content: String,
    course: String,
}

impl TryFrom<StudyTestRow> for StudyTest {
    type Error = crate::DbError;

    fn try_from(row: StudyTestRow) -> DbErrorResult<Self> {
        Ok(StudyTest {
            id: row.id,
            name: row.name,
            date: row.date,
            difficulty: row.difficulty,
            content: serde_json::from_str(&row.content)?,
            course: row.course,
        })
    }
}

/// Courses and the test summaries shown in the feed
pub struct FeedRepository {
    pool: SqlitePool,
}

impl FeedRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// `position` fixes where the course appears in [`FeedRepository::list_courses`]
    pub async fn upsert_course(&self, course: &Course, position: i64) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO courses (id, name, position) VALUES (?, ?, ?)
              ON CONFLICT(id) DO UPDATE SET
                  name = excluded.name,
                  position = excluded.position
              "#,
        )
        .bind(&course.id)
        .bind(&course.name)
        .bind(position)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn upsert_test(&self, test: &StudyTest) -> DbErrorResult<()> {
        let content = serde_json::to_string(&test.content)?;

        sqlx::query(
            r#"
              INSERT INTO tests (id, name, date, difficulty, content, course)
              VALUES (?, ?, ?, ?, ?, ?)
              ON CONFLICT(id) DO UPDATE SET
                  name = excluded.name,
                  date = excluded.date,
                  difficulty = excluded.difficulty,
                  content = excluded.content,
                  course = excluded.course
              "#,
        )
        .bind(test.id)
        .bind(&test.name)
        .bind(test.date)
        .bind(&test.difficulty)
        .bind(content)
        .bind(&test.course)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Load a seed file's content. Courses first so tests can reference them.
    pub async fn seed(&self, seed: &ContentSeed) -> DbErrorResult<()> {
        for (position, course) in (0_i64..).zip(&seed.courses) {
            self.upsert_course(course, position).await?;
        }
        for test in &seed.tests {
            self.upsert_test(test).await?;
        }

        info!(
            "Seeded {} courses and {} tests",
            seed.courses.len(),
            seed.tests.len()
        );

        Ok(())
    }

    /// Courses in seed order; the first one is the feed's default
    pub async fn list_courses(&self) -> DbErrorResult<Vec<Course>> {
        let rows = sqlx::query_as::<_, CourseRow>(
            "SELECT id, name FROM courses ORDER BY position ASC, name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    pub async fn find_course(&self, id: &str) -> DbErrorResult<Option<Course>> {
        let row = sqlx::query_as::<_, CourseRow>("SELECT id, name FROM courses WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Course::from))
    }

    /// Tests for a course, newest first
    pub async fn list_tests_by_course(&self, course: &str) -> DbErrorResult<Vec<StudyTest>> {
        let rows = sqlx::query_as::<_, StudyTestRow>(
            r#"
              SELECT id, name, date, difficulty, content, course
              FROM tests
              WHERE course = ?
              ORDER BY date DESC, id DESC
              "#,
        )
        .bind(course)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(StudyTest::try_from).collect()
    }
}
