use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

const FIXTURE: &str = include_str!("fixtures/outlines.svg");

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path = std::env::temp_dir().join(format!(
            "outline_extract_cli_{tag}_{}_{}",
            std::process::id(),
            ts
        ));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }

    /// `<dir>/art` holding `outlines.svg`, the layout the default paths expect
    fn art_dir(&self, svg: &str) -> PathBuf {
        let art = self.path.join("art");
        fs::create_dir_all(&art).expect("create art dir");
        fs::write(art.join("outlines.svg"), svg).expect("write svg");
        art
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_extract(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_outline-extract"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("run outline-extract")
}

#[test]
fn bare_run_writes_default_outputs() {
    let dir = TestDir::new("bare");
    let art = dir.art_dir(FIXTURE);

    let output = run_extract(&[], &art);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let header = fs::read_to_string(dir.path.join("src/Outlines.h")).expect("header written");
    let source = fs::read_to_string(dir.path.join("src/Outlines.cpp")).expect("source written");
    assert!(header.contains("constexpr std::size_t COUNT = 3;"));
    assert!(source.contains("#include \"Outlines.h\""));
}

#[test]
fn unknown_command_fails_and_names_it() {
    let dir = TestDir::new("unknown");
    let art = dir.art_dir(&FIXTURE.replace("m 10,5 v 20", "Q10,10 20,20"));

    let output = run_extract(&[], &art);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized path command 'Q'"), "stderr: {stderr}");
    assert!(!dir.path.join("src/Outlines.h").exists());
    assert!(!dir.path.join("src/Outlines.cpp").exists());
}

#[test]
fn explicit_paths_override_defaults() {
    let dir = TestDir::new("explicit");
    fs::write(dir.path.join("drawing.svg"), FIXTURE).unwrap();

    let output = run_extract(
        &[
            "--input",
            "drawing.svg",
            "--header",
            "gen/Shapes.h",
            "--source",
            "gen/Shapes.cpp",
        ],
        &dir.path,
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let header = fs::read_to_string(dir.path.join("gen/Shapes.h")).unwrap();
    let source = fs::read_to_string(dir.path.join("gen/Shapes.cpp")).unwrap();
    assert!(header.contains("#ifndef SHAPES_H_"));
    assert!(source.contains("#include \"Shapes.h\""));
}

#[test]
fn config_file_sets_paths_and_namespace() {
    let dir = TestDir::new("config");
    fs::write(dir.path.join("glyphs.svg"), FIXTURE).unwrap();
    fs::write(
        dir.path.join("outlines.toml"),
        r#"
input = "glyphs.svg"
header = "out/Glyphs.h"
source = "out/Glyphs.cpp"

[document]
nested_paths = true

[codegen]
namespace = "Glyphs"
"#,
    )
    .unwrap();

    let output = run_extract(&["--config", "outlines.toml"], &dir.path);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let header = fs::read_to_string(dir.path.join("out/Glyphs.h")).unwrap();
    assert!(header.contains("namespace Glyphs {"));
    assert!(header.contains("constexpr std::size_t HIDDEN = 3;"));
}

#[test]
fn check_mode_reports_stale_outputs() {
    let dir = TestDir::new("check");
    let art = dir.art_dir(FIXTURE);

    assert_eq!(run_extract(&["--check"], &art).status.code(), Some(1));

    assert!(run_extract(&[], &art).status.success());
    let header_before = fs::read(dir.path.join("src/Outlines.h")).unwrap();
    assert!(run_extract(&["--check"], &art).status.success());

    fs::write(art.join("outlines.svg"), FIXTURE.replace("\"box\"", "\"crate\"")).unwrap();
    let output = run_extract(&["--check"], &art);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of date"));
    assert_eq!(fs::read(dir.path.join("src/Outlines.h")).unwrap(), header_before);
}

#[test]
fn bad_config_fails() {
    let dir = TestDir::new("badconfig");
    fs::write(dir.path.join("bad.toml"), "input = [").unwrap();

    let output = run_extract(&["-c", "bad.toml"], &dir.path);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load config 'bad.toml'"), "stderr: {stderr}");
}
