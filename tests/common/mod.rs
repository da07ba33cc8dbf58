#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Write a fake image per name, plus a label for each name in `labels`.
pub fn write_flat_dataset(root: &Path, images: &[&str], labels: &[&str]) {
    fs::create_dir_all(root).expect("create dataset dir");
    for name in images {
        fs::write(root.join(name), name.as_bytes()).expect("write image");
    }
    for name in labels {
        fs::write(root.join(name), format!("0 0.5 0.5 0.2 0.2 # {name}\n"))
            .expect("write label");
    }
}

/// Sorted file names directly inside `dir`.
pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

pub fn split_dir(output: &Path, split: &str, kind: &str) -> PathBuf {
    output.join(split).join(kind)
}
