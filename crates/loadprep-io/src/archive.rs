//! Archive extraction and raw-file discovery.
//!
//! The UCI download is a zip holding a single semicolon-delimited `.txt`
//! file. It is unpacked into a sibling directory of the archive and the text
//! file is then located by extension.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use loadprep_core::{PrepError, PrepResult};
use tracing::{debug, info};
use zip::ZipArchive;

/// Name of the directory created next to the archive.
pub const EXTRACT_DIR_NAME: &str = "uci_extracted";

/// Directory the archive at `zip_path` is unpacked into.
pub fn extraction_dir(zip_path: &Path) -> PathBuf {
    let parent = match zip_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    parent.join(EXTRACT_DIR_NAME)
}

/// Check that the archive exists, then unpack it into [`extraction_dir`].
///
/// The directory is reused if it already exists and files with the same
/// name are overwritten. Returns the extraction directory.
pub fn extract_archive(zip_path: &Path) -> PrepResult<PathBuf> {
    if !zip_path.exists() {
        return Err(PrepError::ArchiveNotFound {
            path: zip_path.to_path_buf(),
        });
    }
    let out_dir = extraction_dir(zip_path);
    fs::create_dir_all(&out_dir)?;
    let count = extract_zip_archive(zip_path, &out_dir)?;
    info!(
        "Extracted {} entries from {} into {}",
        count,
        zip_path.display(),
        out_dir.display()
    );
    Ok(out_dir)
}

/// Extract each entry from an archive into `out_dir`, returning the number
/// of files written. Entries whose names escape `out_dir` are skipped.
fn extract_zip_archive(zip_path: &Path, out_dir: &Path) -> PrepResult<usize> {
    let file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(file)
        .map_err(|err| PrepError::Archive(format!("reading {}: {err}", zip_path.display())))?;
    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|err| PrepError::Archive(format!("entry {i}: {err}")))?;
        let Some(name) = entry.enclosed_name().map(|name| name.to_path_buf()) else {
            debug!("Skipping archive entry with unsafe name: {}", entry.name());
            continue;
        };
        let target = out_dir.join(name);
        if entry.is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&target)?;
            io::copy(&mut entry, &mut outfile)?;
            written += 1;
        }
    }
    Ok(written)
}

/// Find the raw text file inside `dir`.
///
/// Only the top level of `dir` is scanned and the extension must be exactly
/// `txt` (`A.TXT` does not match). Candidates are ordered by file name so
/// the choice does not depend on directory-listing order.
pub fn find_raw_text_file(dir: &Path) -> PrepResult<PathBuf> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_txt = path
            .extension()
            .and_then(OsStr::to_str)
            .map(|ext| ext == "txt")
            .unwrap_or(false);
        if is_txt && path.is_file() {
            candidates.push(path);
        }
    }
    candidates.sort();

    let mut iter = candidates.into_iter();
    let chosen = iter.next().ok_or_else(|| PrepError::NoRawTextFile {
        dir: dir.to_path_buf(),
    })?;
    for ignored in iter {
        debug!("Ignoring additional text file {}", ignored.display());
    }
    debug!("Using raw text file {}", chosen.display());
    Ok(chosen)
}
