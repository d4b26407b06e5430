//! Types for catalog seeding

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::course::{Course, CourseDraft};

/// What a manifest file is used for on the course page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Brochure,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Brochure => write!(f, "brochure"),
        }
    }
}

/// Resource type understood by the media host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Image,
    /// Non-media files such as PDF brochures
    Raw,
    #[default]
    Auto,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Raw => "raw",
            ResourceType::Auto => "auto",
        }
    }
}

/// One file listed in the seeding manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub kind: MediaKind,
    /// Course the file belongs to
    pub name: String,
    /// File name relative to the manifest's media directory
    pub file_name: String,
    /// Remote folder on the media host
    pub folder: String,
    #[serde(default)]
    pub resource_type: ResourceType,
}

/// Seeding manifest as read from TOML
///
/// ```toml
/// media_dir = "public"
///
/// [[files]]
/// kind = "brochure"
/// name = "Clinical research"
/// file_name = "Clinical_Research.pdf"
/// folder = "Course-brochures"
/// resource_type = "raw"
///
/// [[courses]]
/// name = "Clinical Research"
/// details = "..."
/// duration = "6 months"
/// brochure_file = "Clinical_Research.pdf"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Directory holding the files, relative to the manifest
    #[serde(default)]
    pub media_dir: Option<String>,
    #[serde(default)]
    pub files: Vec<ManifestEntry>,
    #[serde(default)]
    pub courses: Vec<CourseDraft>,
}

/// A single upload handed to the media host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub path: PathBuf,
    pub folder: String,
    pub resource_type: ResourceType,
    pub public_id: Option<String>,
    pub format: Option<String>,
}

/// Media host response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedMedia {
    /// Durable secure URL
    pub url: String,
    pub public_id: String,
}

/// A manifest entry that was uploaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub kind: MediaKind,
    pub file_name: String,
    pub url: String,
    pub public_id: String,
}

/// Outcome of an upload batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReport {
    pub uploaded: Vec<UploadedFile>,
    pub skipped: usize,
    pub failed: usize,
}

impl UploadReport {
    /// Number of entries the batch looked at
    pub fn total(&self) -> usize {
        self.uploaded.len() + self.skipped + self.failed
    }

    /// Uploaded files grouped by course name, in first-seen order
    pub fn by_course(&self) -> Vec<(&str, Vec<&UploadedFile>)> {
        let mut groups: Vec<(&str, Vec<&UploadedFile>)> = Vec::new();
        for file in &self.uploaded {
            match groups.iter_mut().find(|(name, _)| *name == file.name) {
                Some((_, files)) => files.push(file),
                None => groups.push((file.name.as_str(), vec![file])),
            }
        }
        groups
    }

    /// Uploaded file with the given local file name
    pub fn find_file(&self, file_name: &str) -> Option<&UploadedFile> {
        self.uploaded.iter().find(|file| file.file_name == file_name)
    }
}

/// Outcome of a seeding batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: Vec<Course>,
    pub failed: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.created.len() + self.failed
    }
}
