#![allow(dead_code)]

use datasplit::SplitRatios;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Valid train/val ratios; test is derived.
pub fn arb_ratios() -> impl Strategy<Value = SplitRatios> {
    (0.0f64..=1.0)
        .prop_flat_map(|train| (Just(train), 0.0f64..=(1.0 - train)))
        .prop_filter_map("train + val must not exceed 1", |(train, val)| {
            SplitRatios::from_train_val(train, val).ok()
        })
}

/// Unique image file names with a mix of recognised extensions.
pub fn arb_image_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z0-9_]{1,12}", 0..=max).prop_map(|stems| {
        stems
            .into_iter()
            .enumerate()
            .map(|(i, stem)| {
                let ext = ["jpg", "png", "jpeg"][i % 3];
                format!("{stem}.{ext}")
            })
            .collect()
    })
}
