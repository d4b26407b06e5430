//! MySQL implementation of the CourseRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use otp_core::domain::entities::course::Course;
use otp_core::errors::DomainError;
use otp_core::repositories::CourseRepository;

/// MySQL implementation of CourseRepository
pub struct MySqlCourseRepository {
    pool: MySqlPool,
}

impl MySqlCourseRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn column<'r, T>(row: &'r sqlx::mysql::MySqlRow, name: &str) -> Result<T, DomainError>
    where
        T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
    {
        row.try_get(name).map_err(|e| DomainError::Internal {
            message: format!("Failed to get {}: {}", name, e),
        })
    }

    fn row_to_course(row: &sqlx::mysql::MySqlRow) -> Result<Course, DomainError> {
        let id: String = Self::column(row, "id")?;

        Ok(Course {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid course UUID: {}", e) })?,
            name: Self::column(row, "name")?,
            details: Self::column(row, "details")?,
            duration: Self::column(row, "duration")?,
            course_image_url: Self::column(row, "course_image_url")?,
            course_image_public_id: Self::column(row, "course_image_public_id")?,
            brochure_url: Self::column(row, "brochure_url")?,
            brochure_public_id: Self::column(row, "brochure_public_id")?,
            category: Self::column(row, "category")?,
            trainer: Self::column(row, "trainer")?,
            is_published: Self::column(row, "is_published")?,
            created_at: Self::column::<DateTime<Utc>>(row, "created_at")?,
        })
    }
}

#[async_trait]
impl CourseRepository for MySqlCourseRepository {
    async fn create(&self, course: Course) -> Result<Course, DomainError> {
        let query = r#"
            INSERT INTO courses (
                id, name, details, duration,
                course_image_url, course_image_public_id,
                brochure_url, brochure_public_id,
                category, trainer, is_published, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(course.id.to_string())
            .bind(&course.name)
            .bind(&course.details)
            .bind(&course.duration)
            .bind(&course.course_image_url)
            .bind(&course.course_image_public_id)
            .bind(&course.brochure_url)
            .bind(&course.brochure_public_id)
            .bind(&course.category)
            .bind(&course.trainer)
            .bind(course.is_published)
            .bind(course.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to create course: {}", e) })?;

        Ok(course)
    }

    async fn list(&self) -> Result<Vec<Course>, DomainError> {
        let query = r#"
            SELECT id, name, details, duration,
                   course_image_url, course_image_public_id,
                   brochure_url, brochure_public_id,
                   category, trainer, is_published, created_at
            FROM courses
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to list courses: {}", e) })?;

        rows.iter().map(Self::row_to_course).collect()
    }
}
