//! Output layout creation and paired image/label copying.

use std::fs;
use std::path::{Path, PathBuf};

use super::discover::label_file_name;
use super::report::SplitSummary;
use super::Split;
use crate::error::SplitError;

const IMAGES_DIR: &str = "images";
const LABELS_DIR: &str = "labels";

/// Destination directories for one split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitDirs {
    pub images: PathBuf,
    pub labels: PathBuf,
}

impl SplitDirs {
    pub fn new(output_dir: &Path, split: Split) -> Self {
        let root = output_dir.join(split.dir_name());
        Self {
            images: root.join(IMAGES_DIR),
            labels: root.join(LABELS_DIR),
        }
    }
}

/// Create `images/` and `labels/` for every split under `output_dir`.
///
/// Existing directories are reused.
pub fn prepare_output_layout(output_dir: &Path) -> Result<(), SplitError> {
    for split in Split::ALL {
        let dirs = SplitDirs::new(output_dir, split);
        create_dir(&dirs.images)?;
        create_dir(&dirs.labels)?;
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<(), SplitError> {
    fs::create_dir_all(path).map_err(|source| SplitError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy each image in `files` and its label, when present, into the split's
/// directories. Destination files are overwritten.
pub fn copy_split(
    source_dir: &Path,
    output_dir: &Path,
    split: Split,
    files: &[String],
) -> Result<SplitSummary, SplitError> {
    let dirs = SplitDirs::new(output_dir, split);
    let mut summary = SplitSummary::new(split);

    for image_name in files {
        copy_file(&source_dir.join(image_name), &dirs.images.join(image_name))?;
        summary.images += 1;

        let label_name = label_file_name(image_name);
        let label_src = source_dir.join(&label_name);
        if label_src.is_file() {
            copy_file(&label_src, &dirs.labels.join(&label_name))?;
            summary.labels_copied += 1;
        } else {
            tracing::debug!(image = %image_name, split = %split, "no label file, skipping");
            summary.labels_missing += 1;
        }
    }

    Ok(summary)
}

fn copy_file(from: &Path, to: &Path) -> Result<(), SplitError> {
    tracing::debug!(from = %from.display(), to = %to.display(), "copy");
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|source| SplitError::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
}
