//! Configuration flowing from repository files into the run context.

use playgen::cli::RunContext;
use playgen::section::{Section, TemplateKind};
use playgen::variant::Variant;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_repository_config_shapes_driver_settings() {
    let repo = TempDir::new().unwrap();
    fs::create_dir_all(repo.path().join("config")).unwrap();
    fs::write(
        repo.path().join("config").join("playgen.toml"),
        r#"
[repository]
pages_dir = "content/lessons"
extension = "md"

[generation]
variant = "verbose"

[batch]
size = 4
batch_delay_ms = 500

[[sections]]
name = "jquery"
template = "static"
"#,
    )
    .unwrap();

    let context = RunContext::new(repo.path().to_path_buf(), None).unwrap();
    let settings = context.driver_settings();

    assert_eq!(settings.pages_root, repo.path().join("content/lessons"));
    assert_eq!(settings.extension, "md");
    assert_eq!(settings.variant, Variant::Verbose);
    assert_eq!(settings.batch_size, 4);
    assert_eq!(settings.batch_delay, Duration::from_millis(500));
    assert_eq!(settings.request_delay, Duration::from_millis(1500));
    assert_eq!(
        settings.sections,
        vec![Section::new("jquery", TemplateKind::Static)]
    );
}

#[test]
fn test_explicit_config_file_replaces_repository_files() {
    let repo = TempDir::new().unwrap();
    fs::create_dir_all(repo.path().join("config")).unwrap();
    fs::write(
        repo.path().join("config").join("playgen.toml"),
        "[batch]\nsize = 4\n",
    )
    .unwrap();
    let explicit = repo.path().join("other.toml");
    fs::write(&explicit, "[batch]\nsize = 7\n").unwrap();

    let context = RunContext::new(repo.path().to_path_buf(), Some(explicit)).unwrap();

    assert_eq!(context.config().batch.size, 7);
    assert_eq!(context.config().repository.pages_dir, PathBuf::from("pages"));
}
