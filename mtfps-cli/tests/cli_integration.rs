// mtfps-cli/tests/cli_integration.rs
//
// Drives the compiled binary. On unix a stub ffprobe script stands in for the
// real one: it prints the probed file's contents, so each fixture file holds
// the JSON document ffprobe would have produced.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn mtfps_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mtfps").expect("Failed to find mtfps binary");
    cmd.env_remove("MTFPS_FFPROBE").env_remove("RUST_LOG");
    cmd
}

#[cfg(unix)]
fn stub_ffprobe(dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("ffprobe-stub");
    std::fs::write(
        &script,
        "#!/bin/sh\n\
         if [ \"$1\" = \"-version\" ]; then exit 0; fi\n\
         for last; do :; done\n\
         cat \"$last\"\n",
    )?;
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))?;
    Ok(script)
}

#[cfg(unix)]
fn movie_json(language: &str, hdr: bool) -> String {
    let (space, transfer, primaries) = if hdr {
        ("bt2020nc", "smpte2084", "bt2020")
    } else {
        ("bt709", "bt709", "bt709")
    };
    format!(
        r#"{{"streams": [
            {{"codec_type": "video", "codec_long_name": "H.265 / HEVC (High Efficiency Video Coding)",
              "width": 3840, "height": 2160, "color_space": "{space}",
              "color_transfer": "{transfer}", "color_primaries": "{primaries}"}},
            {{"codec_type": "audio", "tags": {{"language": "{language}"}}}}
        ]}}"#
    )
}

#[test]
fn test_no_arguments_prints_usage() {
    mtfps_cmd()
        .assert()
        .code(1)
        .stderr(contains("Usage"));
}

#[test]
fn test_too_many_arguments_prints_usage() {
    mtfps_cmd()
        .args(["a.mkv", "b.mkv"])
        .assert()
        .code(1)
        .stderr(contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    mtfps_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--max-mode"));
}

#[test]
fn test_missing_ffprobe_binary() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("movie.mkv");
    std::fs::write(&file, "{}")?;

    mtfps_cmd()
        .arg("--ffprobe")
        .arg("surely_not_ffprobe_mtfps_42")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(contains("Required dependency not found"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_single_file_summary() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let ffprobe = stub_ffprobe(dir.path())?;
    let file = dir.path().join("movie.mkv");
    std::fs::write(&file, movie_json("eng", true))?;

    mtfps_cmd()
        .arg("--ffprobe")
        .arg(&ffprobe)
        .arg(&file)
        .assert()
        .success()
        .stdout(
            "Video Info:\n\
             \x20 Codec: H.265 / HEVC (High Efficiency Video Coding)\n\
             \x20 Resolution: 3840x2160\n\
             \x20 HDR: Yes\n\
             Audio Languages:\n\
             \x20 eng\n",
        );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_single_file_failure() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let ffprobe = stub_ffprobe(dir.path())?;
    let file = dir.path().join("notes.txt");
    std::fs::write(&file, "just some notes")?;

    mtfps_cmd()
        .arg("--ffprobe")
        .arg(&ffprobe)
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Unable to probe"))
        .stderr(contains("notes.txt"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_directory_walk() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    let ffprobe = stub_ffprobe(tools.path())?;
    let media = tempdir()?;
    std::fs::write(media.path().join("a.mkv"), movie_json("eng", true))?;
    std::fs::write(media.path().join("b.txt"), "not probed")?;
    std::fs::create_dir(media.path().join("sub"))?;
    std::fs::write(media.path().join("sub").join("c.mp4"), movie_json("jpn", false))?;

    mtfps_cmd()
        .arg("--ffprobe")
        .arg(&ffprobe)
        .arg(media.path())
        .assert()
        .success()
        .stdout(contains("File: a.mkv\nVideo Info:"))
        .stdout(contains("File: c.mp4\nVideo Info:"))
        .stdout(contains("  HDR: No\n"))
        .stdout(contains("  jpn\n"))
        .stdout(contains("b.txt").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_directory_walk_stops_at_first_failure() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    let ffprobe = stub_ffprobe(tools.path())?;
    let media = tempdir()?;
    std::fs::write(media.path().join("a.mkv"), movie_json("eng", false))?;
    std::fs::write(media.path().join("b.mkv"), "corrupt")?;
    std::fs::write(media.path().join("c.mkv"), movie_json("ger", false))?;

    mtfps_cmd()
        .arg("--ffprobe")
        .arg(&ffprobe)
        .arg(media.path())
        .assert()
        .code(1)
        .stdout(contains("File: a.mkv"))
        .stdout(contains("File: c.mkv").not())
        .stderr(contains("Unable to probe b.mkv"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_max_mode() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    let ffprobe = stub_ffprobe(tools.path())?;
    let media = tempdir()?;

    let x = media.path().join("X");
    std::fs::create_dir(&x)?;
    std::fs::write(x.join("small.nfo"), "tiny")?;
    let mut padded = movie_json("eng", true);
    padded.push_str(&" ".repeat(512));
    std::fs::write(x.join("movie.mkv"), padded)?;

    let y = media.path().join("Y");
    std::fs::create_dir(&y)?;
    std::fs::write(y.join("show.mp4"), movie_json("fre", false))?;

    std::fs::create_dir(media.path().join("Empty"))?;

    mtfps_cmd()
        .arg("--ffprobe")
        .arg(&ffprobe)
        .arg("--max-mode")
        .arg(media.path())
        .assert()
        .success()
        .stdout(contains("Folder: X\nVideo Info:"))
        .stdout(contains("Folder: Y\nVideo Info:"))
        .stdout(contains("Folder: Empty").not())
        .stdout(contains("  fre\n"));
    Ok(())
}
