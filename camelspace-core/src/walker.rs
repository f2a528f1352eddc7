use crate::error::WalkError;
use crate::options::WalkOptions;
use crate::output::{RenameRecord, RenameStatus, WalkReport};
use crate::transform::transform_name;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Walk `root` depth-first and rename every file whose name changes under
/// [`camel_space`](crate::camel_space).
///
/// The walk never changes the process working directory; every path is
/// derived from `root`. Entries are visited in file name order. Hidden
/// directories (name starting with `.`) are never entered, though `root`
/// itself is always processed.
///
/// Only an unreadable `root` or a runaway transform stops the walk. Failed
/// subdirectory listings and failed renames are logged, recorded in the
/// returned [`WalkReport`] and skipped.
pub fn walk(root: &Path, options: &WalkOptions) -> Result<WalkReport, WalkError> {
    let metadata = fs::metadata(root).map_err(|source| WalkError::StartDir {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(WalkError::ListRoot {
            path: root.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }
    // Surface an unlistable root before any work is done
    fs::read_dir(root).map_err(|source| WalkError::ListRoot {
        path: root.to_path_buf(),
        source,
    })?;

    let mut report = WalkReport::new(root, *options);
    let mut hidden_dirs_skipped = 0;
    // walkdir yields a directory before listing it; a failed listing follows
    // immediately as an error for the same path.
    let mut last_entered: Option<PathBuf> = None;

    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() > 0 && is_hidden_dir(entry) {
                debug!("Skipping hidden directory {}", entry.path().display());
                hidden_dirs_skipped += 1;
                return false;
            }
            true
        });

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                if err.depth() == 0 {
                    return Err(WalkError::ListRoot {
                        path,
                        source: err.into(),
                    });
                }
                warn!("Could not list files in {} - {}", path.display(), err);
                report.listing_failures += 1;
                if last_entered.as_deref() == Some(path.as_path()) {
                    report.directories_entered -= 1;
                    last_entered = None;
                }
                continue;
            },
        };

        if entry.file_type().is_dir() {
            if options.recursive {
                debug!("Entering {}", entry.path().display());
                report.directories_entered += 1;
                last_entered = Some(entry.path().to_path_buf());
            }
            continue;
        }

        process_file(root, &entry, options, &mut report)?;
    }

    report.hidden_dirs_skipped = hidden_dirs_skipped;
    Ok(report)
}

fn process_file(
    root: &Path,
    entry: &DirEntry,
    options: &WalkOptions,
    report: &mut WalkReport,
) -> Result<(), WalkError> {
    report.files_seen += 1;
    let path = entry.path();
    let relative = relative_to(root, path);

    let Some(name) = entry.file_name().to_str() else {
        warn!("Skipping {}: name is not valid UTF-8", path.display());
        report.unreadable_names += 1;
        return Ok(());
    };

    let new_name = transform_name(name).map_err(|source| WalkError::Transform {
        path: path.to_path_buf(),
        source,
    })?;

    if new_name == name {
        report.unchanged += 1;
        if options.verbose {
            info!("Did not have to rename {}", relative.display());
        }
        return Ok(());
    }

    let target = path.with_file_name(&new_name);
    let relative_target = relative_to(root, &target);

    if options.pretend {
        info!(
            "Would have renamed {} to {}",
            relative.display(),
            relative_target.display()
        );
        report.push(RenameRecord::new(
            relative,
            relative_target,
            RenameStatus::Pretended,
        ));
        return Ok(());
    }

    // On case-insensitive filesystems a case-only change finds the file itself
    // under the new name; anything else already there must be left alone.
    if target.symlink_metadata().is_ok() && !is_same_entry(path, &target) {
        warn!(
            "Not renaming {} to {}: target already exists",
            relative.display(),
            relative_target.display()
        );
        report.push(
            RenameRecord::new(relative, relative_target, RenameStatus::Skipped)
                .with_reason("target already exists"),
        );
        return Ok(());
    }

    match fs::rename(path, &target) {
        Ok(()) => {
            info!("Renamed {} to {}", relative.display(), relative_target.display());
            report.push(RenameRecord::new(
                relative,
                relative_target,
                RenameStatus::Renamed,
            ));
        },
        Err(err) => {
            warn!(
                "Error renaming {} to {} - {}",
                relative.display(),
                relative_target.display(),
                err
            );
            report.push(
                RenameRecord::new(relative, relative_target, RenameStatus::Failed)
                    .with_reason(err.to_string()),
            );
        },
    }

    Ok(())
}

/// Whether both paths name the same directory entry. Symlinks are not
/// followed, so a link and the file it points to are different entries.
#[cfg(unix)]
fn is_same_entry(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (a.symlink_metadata(), b.symlink_metadata()) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_entry(a: &Path, b: &Path) -> bool {
    same_file::is_same_file(a, b).unwrap_or(false)
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
