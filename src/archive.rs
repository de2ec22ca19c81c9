//! Archive materialization and bundle packing
//!
//! The pipeline core only ever sees directories; this module turns an
//! uploaded zip into one and turns a staged bundle back into a zip.

use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Error, Result};

/// Materializes the input into a readable directory tree.
///
/// A directory is used as-is. A `.zip` file is extracted into `scratch` (the
/// caller owns the scratch directory's lifetime). Anything else, an archive
/// over `max_archive_size` bytes, or a corrupt archive fails with
/// [`Error::InvalidUpload`].
pub fn materialize(input: &Path, scratch: &Path, max_archive_size: u64) -> Result<PathBuf> {
    if input.is_dir() {
        return Ok(input.to_path_buf());
    }

    if !input.is_file() || !has_zip_extension(input) {
        return Err(Error::InvalidUpload(format!(
            "{} is not a zip archive or project directory",
            input.display()
        )));
    }

    let size = fs::metadata(input)?.len();
    if size > max_archive_size {
        return Err(Error::InvalidUpload(format!(
            "archive is {} bytes, limit is {}",
            size, max_archive_size
        )));
    }

    extract_zip(input, scratch)?;
    debug!(archive = %input.display(), dest = %scratch.display(), "extracted archive");
    Ok(scratch.to_path_buf())
}

fn has_zip_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("zip"))
        .unwrap_or(false)
}

fn extract_zip(zip_path: &Path, dest: &Path) -> Result<()> {
    let file = fs::File::open(zip_path)?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| Error::InvalidUpload(format!("corrupt archive: {}", e)))?;
    archive
        .extract(dest)
        .map_err(|e| Error::InvalidUpload(format!("failed to extract archive: {}", e)))?;
    Ok(())
}

/// Deflate-compresses the tree at `dir` into a zip at `dest`, entry names
/// relative to `dir` with forward-slash separators.
pub fn pack(dir: &Path, dest: &Path) -> Result<()> {
    let file = fs::File::create(dest)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkBuilder::new(dir)
        .standard_filters(false)
        .hidden(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .flatten()
    {
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let name = match entry.path().strip_prefix(dir) {
            Ok(rel) => rel
                .components()
                .filter_map(|c| c.as_os_str().to_str())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => continue,
        };
        writer
            .start_file(name, options)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let mut src = fs::File::open(entry.path())?;
        io::copy(&mut src, &mut writer)?;
    }

    writer
        .finish()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    debug!(bundle = %dest.display(), "packed export bundle");
    Ok(())
}
