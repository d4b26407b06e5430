//! Seed step of the seeding batch

use std::sync::Arc;

use tracing;

use crate::domain::entities::course::CourseDraft;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CourseRepository;

use super::types::{MediaKind, SeedReport, UploadReport};

/// Fill media URLs of drafts from an upload report
///
/// A draft referencing `image_file` or `brochure_file` takes the URL and public
/// id of the uploaded file with that name. Drafts referencing a file that was
/// not uploaded are left as they are.
pub fn apply_uploads(drafts: Vec<CourseDraft>, report: &UploadReport) -> Vec<CourseDraft> {
    drafts
        .into_iter()
        .map(|mut draft| {
            if let Some(file) = draft
                .image_file
                .as_deref()
                .and_then(|name| report.find_file(name))
                .filter(|file| file.kind == MediaKind::Image)
            {
                draft.course_image_url = Some(file.url.clone());
                draft.course_image_public_id = Some(file.public_id.clone());
            }
            if let Some(file) = draft
                .brochure_file
                .as_deref()
                .and_then(|name| report.find_file(name))
                .filter(|file| file.kind == MediaKind::Brochure)
            {
                draft.brochure_url = Some(file.url.clone());
                draft.brochure_public_id = Some(file.public_id.clone());
            }
            draft
        })
        .collect()
}

/// Inserts courses one at a time
pub struct CourseSeeder<C>
where
    C: CourseRepository + ?Sized,
{
    repository: Arc<C>,
}

impl<C> CourseSeeder<C>
where
    C: CourseRepository + ?Sized,
{
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// Seed a batch of drafts
    ///
    /// # Returns
    ///
    /// * `Ok(SeedReport)` - Created courses and the number of failed inserts
    /// * `Err(DomainError::Validation)` - A draft still holds a placeholder URL;
    ///   nothing was inserted
    pub async fn seed(&self, drafts: Vec<CourseDraft>) -> DomainResult<SeedReport> {
        let pending: Vec<&str> = drafts
            .iter()
            .filter(|draft| draft.has_placeholder())
            .map(|draft| draft.name.as_str())
            .collect();
        if !pending.is_empty() {
            tracing::error!(
                courses = ?pending,
                event = "seed_placeholder_found",
                "Replace placeholder URLs before seeding"
            );
            return Err(DomainError::validation(format!(
                "Placeholder media URLs left for: {}",
                pending.join(", ")
            )));
        }

        let mut report = SeedReport::default();
        let total = drafts.len();

        for (index, draft) in drafts.into_iter().enumerate() {
            let name = draft.name.clone();
            let result = match draft.into_course() {
                Ok(course) => self.repository.create(course).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(course) => {
                    tracing::info!(
                        position = index + 1,
                        total = total,
                        course_id = %course.id,
                        name = %course.name,
                        event = "course_created",
                        "Course created"
                    );
                    report.created.push(course);
                }
                Err(e) => {
                    tracing::error!(
                        position = index + 1,
                        total = total,
                        name = %name,
                        error = %e,
                        event = "course_create_failed",
                        "Failed to create course"
                    );
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            created = report.created.len(),
            total = total,
            event = "seed_completed",
            "Seeding completed"
        );

        Ok(report)
    }
}
