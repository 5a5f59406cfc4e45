//! TIFF stack I/O for shellstack.
//!
//! Volumes are stored as one multi-page 16-bit grayscale TIFF, one page per
//! z-slice in ascending order.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{StackError, StackResult};
pub use reader::{read_stack, read_stack_from};
pub use writer::{save_stack, stack_file_name, write_stack, write_stack_to, write_stack_to_buffer};
