//! Split report types.
//!
//! A [`SplitReport`] summarises what a run placed in each split. It renders
//! as human-readable text through `Display` and as JSON through `serde`.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::Split;

/// The result of partitioning a dataset directory.
#[derive(Clone, Debug, Serialize)]
pub struct SplitReport {
    /// Source dataset directory.
    pub source: PathBuf,
    /// Output root.
    pub output: PathBuf,
    /// Seed used for the shuffle, if one was supplied.
    pub seed: Option<u64>,
    /// One summary per split, in train/val/test order.
    pub splits: Vec<SplitSummary>,
}

impl SplitReport {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            seed: None,
            splits: Vec::new(),
        }
    }

    /// Total number of images placed across all splits.
    pub fn total_images(&self) -> usize {
        self.splits.iter().map(|s| s.images).sum()
    }

    /// Number of images placed in `split`.
    pub fn count(&self, split: Split) -> usize {
        self.summary(split).map_or(0, |s| s.images)
    }

    pub fn summary(&self, split: Split) -> Option<&SplitSummary> {
        self.splits.iter().find(|s| s.split == split)
    }

    /// `(train, val, test)` image counts.
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.count(Split::Train),
            self.count(Split::Val),
            self.count(Split::Test),
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (train, val, test) = self.counts();
        writeln!(
            f,
            "Dataset split complete: train {} images, val {} images, test {} images",
            train, val, test
        )?;

        for summary in &self.splits {
            writeln!(f, "  {}", summary)?;
        }

        if let Some(seed) = self.seed {
            writeln!(f, "  seed: {}", seed)?;
        }

        Ok(())
    }
}

/// Counts for a single split.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub split: Split,
    pub images: usize,
    pub labels_copied: usize,
    pub labels_missing: usize,
}

impl SplitSummary {
    pub fn new(split: Split) -> Self {
        Self {
            split,
            images: 0,
            labels_copied: 0,
            labels_missing: 0,
        }
    }
}

impl fmt::Display for SplitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} images, {} labels",
            self.split, self.images, self.labels_copied
        )?;
        if self.labels_missing > 0 {
            write!(f, " ({} without label)", self.labels_missing)?;
        }
        Ok(())
    }
}
