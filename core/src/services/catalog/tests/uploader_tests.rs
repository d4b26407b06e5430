//! Tests for the upload step

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use crate::services::catalog::mock::MockMediaUploader;
use crate::services::catalog::{
    raw_public_id, ManifestEntry, MediaKind, MediaUploadService, ResourceType,
};

fn entry(kind: MediaKind, name: &str, file_name: &str, resource_type: ResourceType) -> ManifestEntry {
    ManifestEntry {
        kind,
        name: name.to_string(),
        file_name: file_name.to_string(),
        folder: match kind {
            MediaKind::Image => "course-images".to_string(),
            MediaKind::Brochure => "Course-brochures".to_string(),
        },
        resource_type,
    }
}

fn media_dir(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for file in files {
        fs::write(dir.path().join(file), b"content").unwrap();
    }
    dir
}

#[test]
fn test_raw_public_id_replaces_whitespace_runs() {
    assert_eq!(raw_public_id("Clinical research"), "Clinical_research");
    assert_eq!(raw_public_id("Data  Science\tBasics"), "Data_Science_Basics");
    assert_eq!(raw_public_id("Launchpad"), "Launchpad");
}

#[test]
fn test_request_for_raw_entry() {
    let entry = entry(MediaKind::Brochure, "Clinical research", "Clinical_Research.pdf", ResourceType::Raw);
    let request = MediaUploadService::<MockMediaUploader>::request_for(&entry, Path::new("public"));

    assert_eq!(request.path, Path::new("public").join("Clinical_Research.pdf"));
    assert_eq!(request.folder, "Course-brochures");
    assert_eq!(request.public_id.as_deref(), Some("Clinical_research"));
    assert_eq!(request.format.as_deref(), Some("pdf"));
}

#[test]
fn test_request_for_image_entry_keeps_host_naming() {
    let entry = entry(MediaKind::Image, "course", "course.png", ResourceType::Image);
    let request = MediaUploadService::<MockMediaUploader>::request_for(&entry, Path::new("public"));

    assert_eq!(request.resource_type, ResourceType::Image);
    assert!(request.public_id.is_none());
    assert!(request.format.is_none());
}

#[tokio::test]
async fn test_upload_all_skips_missing_files() {
    let dir = media_dir(&["course.png", "Excelerate.pdf"]);
    let uploader = Arc::new(MockMediaUploader::new());
    let service = MediaUploadService::new(uploader.clone());

    let entries = vec![
        entry(MediaKind::Image, "course", "course.png", ResourceType::Image),
        entry(MediaKind::Brochure, "Clinical research", "Clinical_Research.pdf", ResourceType::Raw),
        entry(MediaKind::Brochure, "Excelerate", "Excelerate.pdf", ResourceType::Raw),
    ];

    let report = service.upload_all(&entries, dir.path()).await;

    assert_eq!(report.uploaded.len(), 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 0);
    assert_eq!(report.total(), 3);
    // Missing files never reach the host
    assert_eq!(uploader.recorded().len(), 2);

    let brochure = report.find_file("Excelerate.pdf").unwrap();
    assert_eq!(brochure.kind, MediaKind::Brochure);
    assert_eq!(brochure.public_id, "Course-brochures/Excelerate");
}

#[tokio::test]
async fn test_upload_failure_does_not_stop_batch() {
    let dir = media_dir(&["Clinical_Research.pdf", "Excelerate.pdf", "Launchpad.pdf"]);
    let uploader = Arc::new(MockMediaUploader::failing_on(["Excelerate.pdf"]));
    let service = MediaUploadService::new(uploader.clone());

    let entries = vec![
        entry(MediaKind::Brochure, "Clinical research", "Clinical_Research.pdf", ResourceType::Raw),
        entry(MediaKind::Brochure, "Excelerate", "Excelerate.pdf", ResourceType::Raw),
        entry(MediaKind::Brochure, "Launchpad", "Launchpad.pdf", ResourceType::Raw),
    ];

    let report = service.upload_all(&entries, dir.path()).await;

    assert_eq!(report.failed, 1);
    assert_eq!(report.uploaded.len(), 2);
    assert_eq!(uploader.recorded().len(), 3);
    assert!(report.find_file("Launchpad.pdf").is_some());
}

#[tokio::test]
async fn test_report_groups_by_course_in_order() {
    let dir = media_dir(&["a.png", "a.pdf", "b.pdf"]);
    let service = MediaUploadService::new(Arc::new(MockMediaUploader::new()));

    let entries = vec![
        entry(MediaKind::Image, "Alpha", "a.png", ResourceType::Image),
        entry(MediaKind::Brochure, "Beta", "b.pdf", ResourceType::Raw),
        entry(MediaKind::Brochure, "Alpha", "a.pdf", ResourceType::Raw),
    ];

    let report = service.upload_all(&entries, dir.path()).await;
    let groups = report.by_course();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "Alpha");
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[1].0, "Beta");
}
