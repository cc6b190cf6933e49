use std::{
    path::Path,
    process::{Command, Stdio},
};

use crate::{GeostayError, GeostayResult};

pub fn file_url(path: &Path) -> GeostayResult<String> {
    let absolute = path.canonicalize().map_err(|source| GeostayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format!("file://{}", absolute.display()))
}

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Hand the file to the platform opener without waiting for it. Returns the opened URL.
pub fn open_in_browser(path: &Path) -> GeostayResult<String> {
    let url = file_url(path)?;

    opener(&url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| GeostayError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Spawned browser for {}", url);
    Ok(url)
}

#[test]
fn file_url_is_absolute() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.html");
    std::fs::write(&path, "<html></html>").unwrap();

    let url = file_url(&path).unwrap();

    assert!(url.starts_with("file://"));
    assert!(url.ends_with("map.html"));
}

#[test]
fn missing_file_has_no_url() {
    let err = file_url(Path::new("definitely/not/here.html")).unwrap_err();
    assert!(matches!(err, GeostayError::Io { .. }));
}
