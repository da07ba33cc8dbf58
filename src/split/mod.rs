//! Train/val/test partitioning of a flat image + label directory.
//!
//! The pipeline runs in four steps:
//!
//! 1. [`discover::discover_images`] lists image files in the source directory.
//! 2. [`plan_split`] shuffles them and slices the list by [`SplitRatios`].
//! 3. [`copy::prepare_output_layout`] creates `<split>/images` and
//!    `<split>/labels` under the output root.
//! 4. [`copy::copy_split`] copies each image and its `.txt` label, if any.
//!
//! Split sizes are `floor(total * train)` and `floor(total * val)`; the test
//! split takes whatever is left. An explicit test ratio is only validated,
//! never used for counting, so the test split absorbs all rounding loss.

pub mod copy;
pub mod discover;
pub mod report;

use std::fmt;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::SplitError;
pub use report::{SplitReport, SplitSummary};

/// One of the three output partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    /// All splits in processing order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Val, Split::Test];

    /// Directory name under the output root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Validated train/val/test fractions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitRatios {
    train: f64,
    val: f64,
    test: f64,
}

impl SplitRatios {
    /// Build ratios from train, val and an optional test fraction.
    ///
    /// Without `test`, it is derived as `1 - train - val`. With `test`, the
    /// three values must add up to exactly `1.0`.
    pub fn new(train: f64, val: f64, test: Option<f64>) -> Result<Self, SplitError> {
        check_fraction("train", train)?;
        check_fraction("val", val)?;

        let test = match test {
            Some(test) => {
                check_fraction("test", test)?;
                let sum = train + val + test;
                if sum != 1.0 {
                    return Err(SplitError::InvalidRatios {
                        message: format!("ratios must sum to 1 (got {sum})"),
                    });
                }
                test
            }
            None => {
                if train + val > 1.0 {
                    return Err(SplitError::InvalidRatios {
                        message: format!(
                            "train ({train}) and val ({val}) ratios must not exceed 1 together"
                        ),
                    });
                }
                (1.0 - train - val).max(0.0)
            }
        };

        Ok(Self { train, val, test })
    }

    /// Build ratios from train and val; test takes the remainder.
    pub fn from_train_val(train: f64, val: f64) -> Result<Self, SplitError> {
        Self::new(train, val, None)
    }

    pub fn train(&self) -> f64 {
        self.train
    }

    pub fn val(&self) -> f64 {
        self.val
    }

    /// The test fraction. Informational only: the test split size is
    /// always the remainder after train and val.
    pub fn test(&self) -> f64 {
        self.test
    }
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            train: 0.8,
            val: 0.1,
            test: 1.0 - 0.8 - 0.1,
        }
    }
}

fn check_fraction(name: &str, value: f64) -> Result<(), SplitError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SplitError::InvalidRatios {
            message: format!("{name} ratio must be in the interval [0.0, 1.0] (got {value})"),
        });
    }
    Ok(())
}

/// Partitioning options.
#[derive(Clone, Debug, Default)]
pub struct SplitOptions {
    pub ratios: SplitRatios,
    /// Seed for a reproducible shuffle. `None` uses an entropy-seeded rng.
    pub seed: Option<u64>,
}

/// Compute `(train, val, test)` item counts for `total` items.
pub fn split_counts(total: usize, ratios: &SplitRatios) -> (usize, usize, usize) {
    let train = floor_count(total, ratios.train).min(total);
    let val = floor_count(total, ratios.val).min(total - train);
    (train, val, total - train - val)
}

fn floor_count(total: usize, ratio: f64) -> usize {
    (total as f64 * ratio).floor() as usize
}

/// File names assigned to each split.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitPlan {
    pub train: Vec<String>,
    pub val: Vec<String>,
    pub test: Vec<String>,
}

impl SplitPlan {
    pub fn files(&self, split: Split) -> &[String] {
        match split {
            Split::Train => &self.train,
            Split::Val => &self.val,
            Split::Test => &self.test,
        }
    }

    pub fn len(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shuffle `files` with `rng` and slice them into contiguous splits.
pub fn plan_split<R: Rng + ?Sized>(
    mut files: Vec<String>,
    ratios: &SplitRatios,
    rng: &mut R,
) -> SplitPlan {
    files.shuffle(rng);

    let (train_count, val_count, _) = split_counts(files.len(), ratios);
    let mut val = files.split_off(train_count);
    let test = val.split_off(val_count);

    SplitPlan {
        train: files,
        val,
        test,
    }
}

/// Split `source_dir` into `output_dir` according to `opts`.
pub fn partition_dataset(
    source_dir: &Path,
    output_dir: &Path,
    opts: &SplitOptions,
) -> Result<SplitReport, SplitError> {
    let mut report = if let Some(seed) = opts.seed {
        let mut rng = StdRng::seed_from_u64(seed);
        partition_dataset_with_rng(source_dir, output_dir, &opts.ratios, &mut rng)?
    } else {
        let mut rng = rand::rng();
        partition_dataset_with_rng(source_dir, output_dir, &opts.ratios, &mut rng)?
    };

    report.seed = opts.seed;
    Ok(report)
}

/// Split `source_dir` into `output_dir`, shuffling with the given rng.
///
/// Nothing under `source_dir` is modified. Copy failures abort the run and
/// leave already-copied files in place.
pub fn partition_dataset_with_rng<R: Rng + ?Sized>(
    source_dir: &Path,
    output_dir: &Path,
    ratios: &SplitRatios,
    rng: &mut R,
) -> Result<SplitReport, SplitError> {
    let images = discover::discover_images(source_dir)?;
    tracing::info!(
        source = %source_dir.display(),
        images = images.len(),
        "discovered images"
    );

    let plan = plan_split(images, ratios, rng);
    copy::prepare_output_layout(output_dir)?;

    let mut report = SplitReport::new(source_dir, output_dir);
    for split in Split::ALL {
        let summary = copy::copy_split(source_dir, output_dir, split, plan.files(split))?;
        tracing::info!(
            split = %split,
            images = summary.images,
            labels = summary.labels_copied,
            "split written"
        );
        report.splits.push(summary);
    }

    Ok(report)
}
