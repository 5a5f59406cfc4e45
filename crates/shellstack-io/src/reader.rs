//! Decoding of multi-page TIFF stacks back into volumes.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use shellstack_core::Volume;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::ColorType;

use crate::{StackError, StackResult};

/// Decodes a stack of 16-bit grayscale pages into a volume.
///
/// The first page fixes width and height; page count becomes the depth.
pub fn read_stack_from<R: Read + Seek>(reader: R) -> StackResult<Volume> {
    let mut decoder = Decoder::new(reader)?;
    let (width, height) = decoder.dimensions()?;

    let mut data = Vec::new();
    let mut depth = 0_u32;
    loop {
        let color = decoder.colortype()?;
        if color != ColorType::Gray(16) {
            return Err(StackError::UnsupportedPixelFormat(format!(
                "page {depth} is {color:?}"
            )));
        }

        let page_dims = decoder.dimensions()?;
        if page_dims != (width, height) {
            return Err(StackError::PageSizeMismatch {
                page: depth,
                expected: (width, height),
                actual: page_dims,
            });
        }

        match decoder.read_image()? {
            DecodingResult::U16(page) => data.extend_from_slice(&page),
            _ => {
                return Err(StackError::UnsupportedPixelFormat(format!(
                    "page {depth} does not decode to 16-bit samples"
                )))
            }
        }
        depth += 1;

        if !decoder.more_images() {
            break;
        }
        decoder.next_image()?;
    }

    Ok(Volume::from_raw(width, height, depth, data)?)
}

/// Reads the stack stored at `path`.
pub fn read_stack(path: impl AsRef<Path>) -> StackResult<Volume> {
    let reader = BufReader::new(File::open(path)?);
    read_stack_from(reader)
}
