//! Dense 16-bit voxel volume.

use glam::UVec3;

use crate::{Result, ShellstackError};

/// A dense `depth × height × width` grid of `u16` voxels.
///
/// Voxels are stored slice by slice: the value at `(x, y, z)` lives at
/// `x + y * width + z * width * height`, so each z-slice is one contiguous
/// row-major page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    dims: UVec3,
    data: Vec<u16>,
}

impl Volume {
    /// Creates a zero-filled volume.
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        let dims = UVec3::new(width, height, depth);
        Self {
            dims,
            data: vec![0; num_voxels(dims)],
        }
    }

    /// Wraps existing voxel data, checking its length against the dimensions.
    pub fn from_raw(width: u32, height: u32, depth: u32, data: Vec<u16>) -> Result<Self> {
        let dims = UVec3::new(width, height, depth);
        let expected = num_voxels(dims);
        if data.len() != expected {
            return Err(ShellstackError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Returns (width, height, depth).
    #[must_use]
    pub fn dims(&self) -> UVec3 {
        self.dims
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.dims.x
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.dims.y
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.dims.z
    }

    /// Returns the total number of voxels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if any dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of voxels in one z-slice.
    #[must_use]
    pub fn slice_len(&self) -> usize {
        self.dims.x as usize * self.dims.y as usize
    }

    /// Flattens a 3D voxel index to a linear index.
    #[must_use]
    pub fn flatten_index(&self, x: u32, y: u32, z: u32) -> usize {
        x as usize + y as usize * self.dims.x as usize + z as usize * self.slice_len()
    }

    /// Returns the voxel at `(x, y, z)`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32, z: u32) -> u16 {
        self.data[self.flatten_index(x, y, z)]
    }

    /// Sets the voxel at `(x, y, z)`.
    pub fn set(&mut self, x: u32, y: u32, z: u32, value: u16) {
        let idx = self.flatten_index(x, y, z);
        self.data[idx] = value;
    }

    /// Raises the voxel at `(x, y, z)` to `value` if `value` is larger.
    pub fn raise(&mut self, x: u32, y: u32, z: u32, value: u16) {
        let idx = self.flatten_index(x, y, z);
        if value > self.data[idx] {
            self.data[idx] = value;
        }
    }

    /// Returns all voxels in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[u16] {
        &self.data
    }

    /// Returns the z-slice at `z` as a row-major `width × height` array.
    #[must_use]
    pub fn slice(&self, z: u32) -> &[u16] {
        let len = self.slice_len();
        let start = z as usize * len;
        &self.data[start..start + len]
    }

    /// Iterates over z-slices in ascending order.
    pub fn slices(&self) -> impl Iterator<Item = &[u16]> + '_ {
        // chunks_exact panics on zero; an empty volume has nothing to yield
        let len = self.slice_len().max(1);
        self.data.chunks_exact(len)
    }

    /// Returns the largest voxel value, or 0 for an empty volume.
    #[must_use]
    pub fn max_value(&self) -> u16 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Counts voxels with a non-zero value.
    #[must_use]
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

fn num_voxels(dims: UVec3) -> usize {
    dims.x as usize * dims.y as usize * dims.z as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let volume = Volume::new(4, 3, 2);
        assert_eq!(volume.dims(), UVec3::new(4, 3, 2));
        assert_eq!(volume.len(), 24);
        assert_eq!(volume.max_value(), 0);
        assert_eq!(volume.count_nonzero(), 0);
    }

    #[test]
    fn test_index_layout() {
        let volume = Volume::new(4, 3, 2);
        assert_eq!(volume.flatten_index(0, 0, 0), 0);
        assert_eq!(volume.flatten_index(1, 0, 0), 1);
        assert_eq!(volume.flatten_index(0, 1, 0), 4);
        assert_eq!(volume.flatten_index(0, 0, 1), 12);
        assert_eq!(volume.flatten_index(3, 2, 1), 23);
    }

    #[test]
    fn test_set_and_slice() {
        let mut volume = Volume::new(4, 3, 2);
        volume.set(1, 2, 1, 77);
        assert_eq!(volume.get(1, 2, 1), 77);
        assert_eq!(volume.slice(1)[1 + 2 * 4], 77);
        assert!(volume.slice(0).iter().all(|&v| v == 0));
        assert_eq!(volume.slices().count(), 2);
    }

    #[test]
    fn test_raise_keeps_max() {
        let mut volume = Volume::new(2, 2, 2);
        volume.raise(0, 0, 0, 10);
        volume.raise(0, 0, 0, 5);
        assert_eq!(volume.get(0, 0, 0), 10);
        volume.raise(0, 0, 0, 11);
        assert_eq!(volume.get(0, 0, 0), 11);
    }

    #[test]
    fn test_from_raw_checks_size() {
        assert!(Volume::from_raw(2, 2, 2, vec![0; 8]).is_ok());
        let err = Volume::from_raw(2, 2, 2, vec![0; 7]).unwrap_err();
        assert!(matches!(
            err,
            ShellstackError::SizeMismatch {
                expected: 8,
                actual: 7
            }
        ));
    }

    #[test]
    fn test_empty_volume() {
        let volume = Volume::new(0, 4, 4);
        assert!(volume.is_empty());
        assert_eq!(volume.slices().count(), 0);
        assert_eq!(volume.max_value(), 0);
    }
}
