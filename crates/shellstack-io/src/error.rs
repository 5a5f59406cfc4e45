//! Stack I/O error types.

use thiserror::Error;

/// Errors that can occur while writing or reading an image stack.
#[derive(Error, Debug)]
pub enum StackError {
    /// Failed to create, write or read the stack file.
    #[error("stack I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// TIFF encoding or decoding failed.
    #[error("TIFF error: {0}")]
    TiffError(#[from] tiff::TiffError),

    /// The volume has no voxels, so there is no page to write.
    #[error("volume is empty, nothing to write")]
    EmptyVolume,

    /// A page is not 16-bit grayscale.
    #[error("unsupported pixel format: {0}")]
    UnsupportedPixelFormat(String),

    /// A page differs in size from the first page.
    #[error("page {page} is {actual:?}, expected {expected:?}")]
    PageSizeMismatch {
        page: u32,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// The decoded pages do not form a valid volume.
    #[error(transparent)]
    Volume(#[from] shellstack_core::ShellstackError),
}

/// A specialized Result type for stack I/O.
pub type StackResult<T> = std::result::Result<T, StackError>;
