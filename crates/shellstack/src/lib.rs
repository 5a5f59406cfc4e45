//! shellstack: synthetic volumetric test data.
//!
//! Draws a sphere, two cones and a cylinder as thin shells into a 16-bit voxel
//! grid and writes the grid as a multi-page grayscale TIFF, one page per
//! z-slice.
//!
//! # Quick Start
//!
//! ```no_run
//! use shellstack::*;
//!
//! fn main() -> StackResult<()> {
//!     let config = ShapeConfig::new().with_dims(64, 64, 64).with_thickness(2);
//!     let path = run(&config, ".")?;
//!     println!("wrote {}", path.display());
//!     Ok(())
//! }
//! ```

#![allow(clippy::missing_errors_doc)]

use std::path::{Path, PathBuf};

pub use shellstack_core::{
    generate, shape_intensity, surface_value, Result, ShapeConfig, Shape, ShellGeometry,
    ShellstackError, UVec3, Volume,
};
pub use shellstack_io::{
    read_stack, read_stack_from, save_stack, stack_file_name, write_stack, write_stack_to,
    write_stack_to_buffer, StackError, StackResult,
};

/// Generates the volume for `config` and saves it into `output_dir`.
///
/// Returns the path of the written stack.
pub fn run(config: &ShapeConfig, output_dir: impl AsRef<Path>) -> StackResult<PathBuf> {
    log::info!(
        "generating {}x{}x{} volume, thickness {}, fade {}",
        config.width,
        config.height,
        config.depth,
        config.thickness,
        config.fade
    );
    let volume = generate(config);
    log::info!(
        "max value {}, {} non-zero voxels",
        volume.max_value(),
        volume.count_nonzero()
    );
    save_stack(output_dir, config, &volume)
}
