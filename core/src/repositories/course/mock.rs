//! In-memory implementation of CourseRepository

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::course::Course;
use crate::errors::DomainError;

use super::trait_::CourseRepository;

/// In-memory course repository
#[derive(Default)]
pub struct MockCourseRepository {
    courses: Arc<RwLock<Vec<Course>>>,
    /// Course names whose insert fails
    rejected_names: HashSet<String>,
}

impl MockCourseRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make inserts for the given course names fail
    pub fn rejecting<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rejected_names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl CourseRepository for MockCourseRepository {
    async fn create(&self, course: Course) -> Result<Course, DomainError> {
        if self.rejected_names.contains(&course.name) {
            return Err(DomainError::internal(format!(
                "insert rejected for course '{}'",
                course.name
            )));
        }
        self.courses.write().await.push(course.clone());
        Ok(course)
    }

    async fn list(&self) -> Result<Vec<Course>, DomainError> {
        Ok(self.courses.read().await.clone())
    }
}
