//! Course catalog seeding tool
//!
//! ```text
//! seed_courses [upload|seed|all] [manifest.toml]
//! ```
//!
//! `upload` pushes the manifest files to the media host and prints the hosted
//! URLs grouped by course. `seed` inserts the manifest courses. `all` does
//! both, filling course media from the uploads.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};

use otp_api::telemetry::init_tracing;
use otp_core::domain::entities::course::CourseDraft;
use otp_core::errors::DomainError;
use otp_core::services::catalog::{
    apply_uploads, CatalogManifest, CourseSeeder, MediaUploadService, UploadReport,
};
use otp_infra::database::{DatabasePool, MySqlCourseRepository};
use otp_infra::media::CloudinaryUploader;
use otp_shared::config::{DatabaseConfig, Environment, LoggingConfig, MediaConfig};

const DEFAULT_MANIFEST: &str = "seed/courses.toml";
const DEFAULT_MEDIA_DIR: &str = "public";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Upload,
    Seed,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    command: Command,
    manifest: PathBuf,
}

fn parse_args<I>(args: I) -> anyhow::Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut command = None;
    let mut manifest = None;

    for arg in args {
        match arg.as_str() {
            "upload" if command.is_none() => command = Some(Command::Upload),
            "seed" if command.is_none() => command = Some(Command::Seed),
            "all" if command.is_none() => command = Some(Command::All),
            other if manifest.is_none() && !other.starts_with('-') => {
                manifest = Some(PathBuf::from(other))
            }
            other => bail!("Unexpected argument: {}", other),
        }
    }

    Ok(Args {
        command: command.unwrap_or(Command::All),
        manifest: manifest.unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST)),
    })
}

async fn load_manifest(path: &Path) -> anyhow::Result<CatalogManifest> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Invalid manifest {}", path.display()))
}

/// Directory the manifest's file names are relative to
fn media_base_dir(manifest_path: &Path, manifest: &CatalogManifest) -> PathBuf {
    let parent = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    parent.join(manifest.media_dir.as_deref().unwrap_or(DEFAULT_MEDIA_DIR))
}

async fn upload(manifest_path: &Path, manifest: &CatalogManifest) -> anyhow::Result<UploadReport> {
    let media = MediaConfig::from_env();
    media.validate().map_err(anyhow::Error::msg)?;

    let uploader = Arc::new(CloudinaryUploader::from_config(&media)?);
    let service = MediaUploadService::new(uploader);
    let base_dir = media_base_dir(manifest_path, manifest);

    let report = service.upload_all(&manifest.files, &base_dir).await;

    for (course, files) in report.by_course() {
        println!("{}", course);
        for file in files {
            println!("  {:<9} {}", file.kind.to_string(), file.url);
        }
    }
    println!(
        "Uploaded {}/{} files ({} skipped, {} failed)",
        report.uploaded.len(),
        report.total(),
        report.skipped,
        report.failed
    );

    Ok(report)
}

async fn seed(drafts: Vec<CourseDraft>) -> anyhow::Result<()> {
    let pool = DatabasePool::new(DatabaseConfig::from_env())
        .await
        .context("Failed to connect to the database")?;
    pool.ensure_schema().await?;

    let repository = Arc::new(MySqlCourseRepository::new(pool.get_pool().clone()));
    let seeder = CourseSeeder::new(repository);

    let result = seeder.seed(drafts).await;
    pool.close().await;

    match result {
        Ok(report) => {
            for course in &report.created {
                println!("Created {} ({})", course.name, course.id);
            }
            println!(
                "Seeded {}/{} courses ({} failed)",
                report.created.len(),
                report.total(),
                report.failed
            );
            if report.failed > 0 {
                bail!("{} course(s) could not be inserted", report.failed);
            }
            Ok(())
        }
        Err(DomainError::Validation { message }) => bail!("{}", message),
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(&LoggingConfig::from_env(Environment::from_env()));

    let args = parse_args(std::env::args().skip(1))?;
    let manifest = load_manifest(&args.manifest).await?;

    tracing::info!(
        manifest = %args.manifest.display(),
        files = manifest.files.len(),
        courses = manifest.courses.len(),
        command = ?args.command,
        "Loaded catalog manifest"
    );

    match args.command {
        Command::Upload => {
            upload(&args.manifest, &manifest).await?;
        }
        Command::Seed => seed(manifest.courses).await?,
        Command::All => {
            let report = upload(&args.manifest, &manifest).await?;
            seed(apply_uploads(manifest.courses, &report)).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> anyhow::Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.command, Command::All);
        assert_eq!(parsed.manifest, PathBuf::from(DEFAULT_MANIFEST));
    }

    #[test]
    fn test_command_and_manifest() {
        let parsed = args(&["upload", "catalog/spring.toml"]).unwrap();
        assert_eq!(parsed.command, Command::Upload);
        assert_eq!(parsed.manifest, PathBuf::from("catalog/spring.toml"));

        let parsed = args(&["other.toml", "seed"]).unwrap();
        assert_eq!(parsed.command, Command::Seed);
        assert_eq!(parsed.manifest, PathBuf::from("other.toml"));
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(args(&["seed", "a.toml", "b.toml"]).is_err());
        assert!(args(&["--force"]).is_err());
    }

    #[test]
    fn test_media_base_dir() {
        let manifest = CatalogManifest::default();
        assert_eq!(
            media_base_dir(Path::new("seed/courses.toml"), &manifest),
            PathBuf::from("seed/public")
        );

        let manifest = CatalogManifest {
            media_dir: Some("assets".to_string()),
            ..Default::default()
        };
        assert_eq!(
            media_base_dir(Path::new("courses.toml"), &manifest),
            PathBuf::from("assets")
        );
    }

    #[test]
    fn test_sample_manifest_parses() {
        let raw = include_str!("../../../seed/courses.toml");
        let manifest: CatalogManifest = toml::from_str(raw).unwrap();
        assert_eq!(manifest.courses.len(), 3);
        assert!(!manifest.files.is_empty());
    }
}
