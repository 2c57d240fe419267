//! Output path helpers

use std::path::{Path, PathBuf};

use crate::constants::canvas::IMAGE_EXTENSION;

/// The image path for a user-supplied output name
///
/// Any existing extension is replaced, so `graph.jpg` and `graph` both
/// become `graph.png`.
pub fn image_output_path(output: &Path) -> PathBuf {
    output.with_extension(IMAGE_EXTENSION)
}
