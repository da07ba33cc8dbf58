//! Image discovery in a flat dataset directory.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::SplitError;

/// Recognised image suffixes. Matching is case-sensitive.
pub const IMAGE_EXTENSIONS: [&str; 3] = [".jpg", ".png", ".jpeg"];

/// Suffix for label files paired with images.
pub const LABEL_EXTENSION: &str = ".txt";

/// List image file names directly inside `dir`, sorted by name.
///
/// Sub-directories are not descended into, and entries that are not regular
/// files are ignored even when their name looks like an image.
pub fn discover_images(dir: &Path) -> Result<Vec<String>, SplitError> {
    if !dir.is_dir() {
        return Err(SplitError::SourceNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|source| SplitError::SourceRead {
            path: dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };

        if is_image_name(name) {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

/// Returns true if `name` ends with one of [`IMAGE_EXTENSIONS`].
pub fn is_image_name(name: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Derive the label file name for an image: everything before the last `.`
/// plus `.txt`.
pub fn label_file_name(image_name: &str) -> String {
    let stem = image_name
        .rsplit_once('.')
        .map_or(image_name, |(stem, _)| stem);
    format!("{stem}{LABEL_EXTENSION}")
}
