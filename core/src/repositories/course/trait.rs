//! Course repository trait used by the catalog seeder.

use async_trait::async_trait;

use crate::domain::entities::course::Course;
use crate::errors::DomainError;

/// Repository trait for `Course` persistence operations
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert a course
    async fn create(&self, course: Course) -> Result<Course, DomainError>;

    /// List all courses, oldest first
    async fn list(&self) -> Result<Vec<Course>, DomainError>;
}
