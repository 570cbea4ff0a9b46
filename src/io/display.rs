//! Opening rendered images in the platform viewer

use crate::io::error::{Result, SnowflakeError};
use std::path::Path;

/// Open a saved image with the system's default viewer
///
/// The file must already exist; the viewer is launched without waiting for it to exit.
///
/// # Errors
///
/// Returns an error if the file is missing or no viewer could be launched
pub fn show_image(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(SnowflakeError::Display {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "image file does not exist"),
        });
    }

    open::that_detached(path).map_err(|source| SnowflakeError::Display {
        path: path.to_path_buf(),
        source,
    })
}
