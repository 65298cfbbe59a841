//! End-to-end runs of the `authorthumb` binary against scratch folders.

use image::DynamicImage;
use std::path::Path;
use std::process::{Command, Output};

fn authorthumb(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_authorthumb"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run authorthumb")
}

fn write_image(path: &Path, width: u32, height: u32) {
    DynamicImage::new_rgb8(width, height).save(path).unwrap();
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn example_folder_produces_four_variants() {
    let dir = tempfile::tempdir().unwrap();
    write_image(&dir.path().join("jane.jpg"), 400, 300);
    write_image(&dir.path().join("author-portrait.png"), 200, 200);

    let folder = dir.path().to_str().unwrap();
    let output = authorthumb(&[folder, "--sizes", "36,80", "--quality", "85"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    for (name, size) in [
        ("jane-36.webp", 36),
        ("jane-80.webp", 80),
        ("author-portrait-36.webp", 36),
        ("author-portrait-80.webp", 80),
    ] {
        assert_eq!(
            image::image_dimensions(dir.path().join(name)).unwrap(),
            (size, size),
            "{name}"
        );
    }
    let log = stderr(&output);
    assert!(log.contains("Created: jane-36.webp"));
    assert!(log.contains("Created: author-portrait-80.webp"));
}

#[test]
fn missing_folder_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let output = authorthumb(&[missing.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Folder not found"));
}

#[test]
fn empty_size_list_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();

    let output = authorthumb(&[dir.path().to_str().unwrap(), "--sizes", " , "]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("At least one output size is required."));
}

#[test]
fn malformed_size_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    write_image(&dir.path().join("jane.jpg"), 40, 40);

    let output = authorthumb(&[dir.path().to_str().unwrap(), "--sizes", "36,abc"]);

    assert!(!output.status.success());
    assert!(!dir.path().join("jane-36.webp").exists());
}

#[test]
fn oversized_size_exits_non_zero_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    write_image(&dir.path().join("jane.jpg"), 40, 40);

    let output = authorthumb(&[dir.path().to_str().unwrap(), "--sizes", "36,4294967295"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("exceeds limits.max_image_pixels"));
    assert!(!dir.path().join("jane-36.webp").exists());
}

#[test]
fn empty_folder_succeeds_with_message() {
    let dir = tempfile::tempdir().unwrap();

    let output = authorthumb(&[dir.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("No source images found."));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn corrupt_file_is_skipped_and_run_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.png"), b"garbage").unwrap();
    write_image(&dir.path().join("jane.jpg"), 90, 120);

    let output = authorthumb(&[dir.path().to_str().unwrap(), "--sizes", "36"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("Skipped broken.png"));
    assert_eq!(
        image::image_dimensions(dir.path().join("jane-36.webp")).unwrap(),
        (36, 36)
    );
}

#[test]
fn rerun_does_not_reprocess_outputs() {
    let dir = tempfile::tempdir().unwrap();
    write_image(&dir.path().join("jane.png"), 64, 32);
    let folder = dir.path().to_str().unwrap();

    assert!(authorthumb(&[folder]).status.success());
    let output = authorthumb(&[folder]);

    assert!(output.status.success());
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["jane-36.webp", "jane-80.webp", "jane.png"]);
}

#[test]
fn json_report_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write_image(&dir.path().join("jane.jpg"), 400, 300);

    let output = authorthumb(&[dir.path().to_str().unwrap(), "--sizes", "36", "--json"]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["sizes"], serde_json::json!([36]));
    assert_eq!(report["quality"], 85);
    let source = &report["sources"][0];
    assert_eq!(source["status"], "created");
    assert_eq!(source["crop"]["left"], 50);
    assert_eq!(source["crop"]["top"], 0);
    assert_eq!(source["crop"]["side"], 300);
}

#[test]
fn config_file_supplies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let photos = dir.path().join("photos");
    std::fs::create_dir(&photos).unwrap();
    write_image(&photos.join("jane.jpg"), 50, 50);

    let config_path = dir.path().join("authorthumb.toml");
    std::fs::write(
        &config_path,
        format!(
            "[generation]\nfolder = {:?}\nsizes = [24]\n",
            photos.to_str().unwrap()
        ),
    )
    .unwrap();

    let output = authorthumb(&["--config", config_path.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        image::image_dimensions(photos.join("jane-24.webp")).unwrap(),
        (24, 24)
    );
    assert!(!photos.join("jane-36.webp").exists());
}
