#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test code, panics provide clear failure messages"
)]

//! End-to-end tests over real unit trees.
//!
//! Each test lays out a manifest and a directory of units in a temporary
//! directory and drives the loader the way the `stoke` binary does.
//!
//! # Running
//!
//! ```bash
//! cargo test -p stoke --test bootstrap
//! ```

#[path = "bootstrap/cli.rs"]
mod cli;
#[path = "bootstrap/resolve.rs"]
mod resolve;

use std::path::Path;

/// Write `contents` to `root/relative`, creating parent directories.
pub fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}
