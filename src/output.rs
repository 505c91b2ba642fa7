//! Writing generated artifacts to disk

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ExtractError;

/// Replace every `(path, contents)` pair as one unit
///
/// All contents go to sibling temporary files first. Only when every
/// temporary is written are they renamed into place, each existing file
/// being kept aside as a backup until the whole set has landed. If any
/// rename fails the files already replaced are restored, so the outputs
/// never end up as a mix of old and new generations. Missing parent
/// directories are created.
pub fn write_all_atomically(artifacts: &[(&Path, &str)]) -> Result<(), ExtractError> {
    let mut temps: Vec<PathBuf> = Vec::with_capacity(artifacts.len());
    for &(path, contents) in artifacts {
        if let Err(source) = stage(path, contents, &mut temps) {
            remove_all(&temps);
            return Err(ExtractError::Write {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    let mut placed: Vec<Placed> = Vec::with_capacity(artifacts.len());
    for (&(path, _), temp) in artifacts.iter().zip(&temps) {
        match place(path, temp) {
            Ok(done) => placed.push(done),
            Err(source) => {
                roll_back(&placed);
                remove_all(&temps);
                return Err(ExtractError::Write {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    for done in &placed {
        if let Some(backup) = &done.backup {
            if let Err(err) = fs::remove_file(backup) {
                log::warn!("could not remove backup {}: {}", backup.display(), err);
            }
        }
    }
    Ok(())
}

/// Replace a single file, see [`write_all_atomically`]
pub fn write_atomically(path: &Path, contents: &str) -> Result<(), ExtractError> {
    write_all_atomically(&[(path, contents)])
}

/// Fail with [`ExtractError::OutOfDate`] unless `path` holds exactly `contents`
pub fn check_current(path: &Path, contents: &str) -> Result<(), ExtractError> {
    match fs::read_to_string(path) {
        Ok(existing) if existing == contents => Ok(()),
        Ok(_) => Err(ExtractError::OutOfDate {
            path: path.to_path_buf(),
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(ExtractError::OutOfDate {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(ExtractError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// A target renamed into place, with where its previous file went
struct Placed {
    path: PathBuf,
    backup: Option<PathBuf>,
}

fn stage(path: &Path, contents: &str, temps: &mut Vec<PathBuf>) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let temp = temp_path(path);
    if let Err(err) = fs::write(&temp, contents) {
        let _ = fs::remove_file(&temp);
        return Err(err);
    }
    temps.push(temp);
    Ok(())
}

fn place(path: &Path, temp: &Path) -> io::Result<Placed> {
    // Only regular files are set aside; anything else makes the rename fail
    let backup = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_file() => {
            let backup = backup_path(path);
            fs::rename(path, &backup)?;
            Some(backup)
        }
        _ => None,
    };

    if let Err(err) = fs::rename(temp, path) {
        if let Some(backup) = &backup {
            let _ = fs::rename(backup, path);
        }
        return Err(err);
    }
    Ok(Placed {
        path: path.to_path_buf(),
        backup,
    })
}

fn roll_back(placed: &[Placed]) {
    for done in placed.iter().rev() {
        let restored = match &done.backup {
            Some(backup) => fs::rename(backup, &done.path),
            None => fs::remove_file(&done.path),
        };
        if let Err(err) = restored {
            log::error!("could not restore {}: {}", done.path.display(), err);
        }
    }
}

fn remove_all(paths: &[PathBuf]) {
    for path in paths {
        let _ = fs::remove_file(path);
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}", name, suffix))
}

fn temp_path(path: &Path) -> PathBuf {
    sibling(path, "tmp")
}

fn backup_path(path: &Path) -> PathBuf {
    sibling(path, "bak")
}
