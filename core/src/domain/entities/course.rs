//! Course catalog entity populated by the seeding tool.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// Marker left in hand-edited manifests where a media URL still has to be pasted
pub const PLACEHOLDER_MARKER: &str = "PASTE";

/// A published course with hosted image and brochure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub details: String,
    pub duration: String,
    pub course_image_url: String,
    pub course_image_public_id: Option<String>,
    pub brochure_url: String,
    pub brochure_public_id: Option<String>,
    /// Opaque reference to a category record
    pub category: Option<String>,
    /// Opaque reference to a trainer record
    pub trainer: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// Course as written in a seeding manifest
///
/// Media can be given directly as URLs, or by referencing an uploaded file
/// through `image_file` / `brochure_file`, in which case the URLs are filled
/// in from the upload report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub name: String,
    pub details: String,
    pub duration: String,
    #[serde(default)]
    pub course_image_url: Option<String>,
    #[serde(default)]
    pub course_image_public_id: Option<String>,
    #[serde(default)]
    pub brochure_url: Option<String>,
    #[serde(default)]
    pub brochure_public_id: Option<String>,
    #[serde(default)]
    pub image_file: Option<String>,
    #[serde(default)]
    pub brochure_file: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub trainer: Option<String>,
    #[serde(default = "default_published")]
    pub is_published: bool,
}

fn default_published() -> bool {
    true
}

impl CourseDraft {
    /// Whether a media URL is missing or still holds the paste placeholder
    pub fn has_placeholder(&self) -> bool {
        [&self.course_image_url, &self.brochure_url]
            .iter()
            .any(|url| match url {
                Some(url) => url.trim().is_empty() || url.contains(PLACEHOLDER_MARKER),
                None => true,
            })
    }

    /// Turns the draft into a course ready to be stored
    pub fn into_course(self) -> DomainResult<Course> {
        if self.has_placeholder() {
            return Err(DomainError::validation(format!(
                "Course '{}' is missing its image or brochure URL",
                self.name
            )));
        }

        Ok(Course {
            id: Uuid::new_v4(),
            name: self.name,
            details: self.details,
            duration: self.duration,
            course_image_url: self.course_image_url.unwrap_or_default(),
            course_image_public_id: self.course_image_public_id,
            brochure_url: self.brochure_url.unwrap_or_default(),
            brochure_public_id: self.brochure_public_id,
            category: self.category.filter(|c| !c.trim().is_empty()),
            trainer: self.trainer.filter(|t| !t.trim().is_empty()),
            is_published: self.is_published,
            created_at: Utc::now(),
        })
    }
}
