use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pose_display"))
        .args(args)
        .env("RUST_LOG", "off")
        .env("RUST_BACKTRACE", "0")
        .output()
        .expect("failed to run pose_display")
}

fn write_images_txt(dir: &Path, contents: &str) {
    fs::write(dir.join("images.txt"), contents).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_missing_images_txt_fails_with_path() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(&[dir.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let message = stderr(&output);
    assert!(message.contains("images.txt not found"), "stderr: {}", message);
    assert!(message.contains(dir.path().join("images.txt").to_str().unwrap()), "stderr: {}", message);
}

#[test]
fn test_no_poses_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    write_images_txt(dir.path(), "# Image list with two lines of data per image:\n\n");
    let svg = dir.path().join("poses.svg");

    let output = run(&[dir.path().to_str().unwrap(), "--output", svg.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("No camera poses found."));
    assert!(!svg.exists());
}

#[test]
fn test_malformed_line_fails_with_line_number() {
    let dir = tempfile::tempdir().unwrap();
    write_images_txt(dir.path(), "# header\n1 1 0 0 0 0 0 0 1 a.png\n2 1 0 0 zero 0 0 0 1 b.png\n");
    let svg = dir.path().join("poses.svg");

    let output = run(&[dir.path().to_str().unwrap(), "--output", svg.to_str().unwrap()]);

    assert!(!output.status.success());
    let message = stderr(&output);
    assert!(message.contains("line 3"), "stderr: {}", message);
    assert!(!svg.exists());
}

#[test]
fn test_input_dir_flag_renders_svg() {
    let dir = tempfile::tempdir().unwrap();
    write_images_txt(dir.path(), "img1.png 1 0 0 0 0 0 0 1 cam1\n");
    let svg = dir.path().join("poses.svg");

    let output = run(&["--input_dir", dir.path().to_str().unwrap(), "--output", svg.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(fs::read_to_string(&svg).unwrap().contains("<svg"));
}

#[test]
fn test_png_output() {
    let dir = tempfile::tempdir().unwrap();
    write_images_txt(dir.path(), "img1.png 1 0 0 0 0 0 0 1 cam1\nimg2.png 1 0 0 0 1 0 0 1 cam1\n");
    let png = dir.path().join("poses.png");

    let output = run(&[dir.path().to_str().unwrap(), "--output", png.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(fs::metadata(&png).unwrap().len() > 0);
}

#[test]
fn test_both_input_forms_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_str().unwrap();

    let output = run(&[path, "--input_dir", path]);

    assert!(!output.status.success());
}
