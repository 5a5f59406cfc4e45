//! Serialization of volumes as multi-page TIFF stacks.

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::{Path, PathBuf};

use shellstack_core::{ShapeConfig, Volume};
use tiff::encoder::{colortype::Gray16, TiffEncoder};

use crate::{StackError, StackResult};

/// Derives the output file name from the shape intensities and grid parameters.
///
/// The pattern is
/// `sphere{sv}cone{co1v}cone{co2v}cylinder{cyv}_w{w}h{h}d{d}th{th}.tif`.
#[must_use]
pub fn stack_file_name(config: &ShapeConfig) -> String {
    format!(
        "sphere{}cone{}cone{}cylinder{}_w{}h{}d{}th{}.tif",
        config.sphere_value,
        config.cone1_value,
        config.cone2_value,
        config.cylinder_value,
        config.width,
        config.height,
        config.depth,
        config.thickness,
    )
}

/// Encodes every z-slice of `volume` as one 16-bit grayscale page, z ascending.
///
/// # Errors
/// Returns [`StackError::EmptyVolume`] if the volume has no voxels, or an
/// encoding error from the underlying writer.
pub fn write_stack_to<W: Write + Seek>(writer: W, volume: &Volume) -> StackResult<()> {
    if volume.is_empty() {
        return Err(StackError::EmptyVolume);
    }

    let mut encoder = TiffEncoder::new(writer)?;
    for (z, page) in volume.slices().enumerate() {
        log::trace!("encoding page {z}");
        encoder.write_image::<Gray16>(volume.width(), volume.height(), page)?;
    }
    Ok(())
}

/// Writes `volume` to `path`, creating or truncating the file.
pub fn write_stack(path: impl AsRef<Path>, volume: &Volume) -> StackResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_stack_to(&mut writer, volume)?;
    writer.flush()?;
    Ok(())
}

/// Encodes `volume` into an in-memory TIFF buffer.
pub fn write_stack_to_buffer(volume: &Volume) -> StackResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    write_stack_to(&mut buffer, volume)?;
    Ok(buffer.into_inner())
}

/// Writes `volume` into `dir` under the name derived from `config`.
///
/// Any existing file with that name is overwritten. Returns the written path.
pub fn save_stack(
    dir: impl AsRef<Path>,
    config: &ShapeConfig,
    volume: &Volume,
) -> StackResult<PathBuf> {
    let path = dir.as_ref().join(stack_file_name(config));
    log::info!("writing {}...", path.display());
    write_stack(&path, volume)?;
    log::info!("done");
    Ok(path)
}
