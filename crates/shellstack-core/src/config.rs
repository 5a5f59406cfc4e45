//! Shape configuration for the synthetic stack.

use std::path::Path;

use glam::UVec3;
use serde::{Deserialize, Serialize};

use crate::{Result, ShellstackError};

/// Parameters describing the grid and the four shells drawn into it.
///
/// Missing fields in a deserialized configuration fall back to
/// [`ShapeConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Grid width (voxels along x).
    pub width: u32,

    /// Grid height (voxels along y).
    pub height: u32,

    /// Grid depth (voxels along z, one page per slice).
    pub depth: u32,

    /// Half-width of each shell, in voxels.
    pub thickness: u32,

    /// Sphere intensity (nominally 0-255).
    pub sphere_value: u32,

    /// Intensity of the cone along the x axis.
    pub cone1_value: u32,

    /// Intensity of the cone along the y axis.
    pub cone2_value: u32,

    /// Intensity of the cylinder along the z axis.
    pub cylinder_value: u32,

    /// Multiplier applied to every shape intensity.
    pub data_scale: u32,

    /// Whether intensities fall off linearly across the shell thickness.
    pub fade: bool,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            depth: 512,
            thickness: 3,
            sphere_value: 64,
            cone1_value: 96,
            cone2_value: 128,
            cylinder_value: 160,
            data_scale: 16,
            fade: true,
        }
    }
}

impl ShapeConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// Returns the grid dimensions as (width, height, depth).
    pub fn dims(&self) -> UVec3 {
        UVec3::new(self.width, self.height, self.depth)
    }

    /// Sets all three grid dimensions.
    pub fn with_dims(mut self, width: u32, height: u32, depth: u32) -> Self {
        self.width = width;
        self.height = height;
        self.depth = depth;
        self
    }

    /// Sets the shell thickness.
    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Sets the four shape intensities (sphere, cone 1, cone 2, cylinder).
    pub fn with_values(mut self, sphere: u32, cone1: u32, cone2: u32, cylinder: u32) -> Self {
        self.sphere_value = sphere;
        self.cone1_value = cone1;
        self.cone2_value = cone2;
        self.cylinder_value = cylinder;
        self
    }

    /// Sets the data scale.
    pub fn with_data_scale(mut self, data_scale: u32) -> Self {
        self.data_scale = data_scale;
        self
    }

    /// Enables or disables fading.
    pub fn with_fade(mut self, fade: bool) -> Self {
        self.fade = fade;
        self
    }

    /// Largest intensity any voxel can receive, before `u16` saturation.
    pub fn max_intensity(&self) -> u64 {
        let max_value = self
            .sphere_value
            .max(self.cone1_value)
            .max(self.cone2_value)
            .max(self.cylinder_value);
        u64::from(max_value) * u64::from(self.data_scale)
    }

    /// Checks for configurations that generate without error but draw nothing.
    ///
    /// Generation does not call this; callers decide whether to reject or warn.
    pub fn validate(&self) -> Result<()> {
        if self.thickness == 0 {
            return Err(ShellstackError::InvalidConfig(
                "thickness must be greater than zero".to_string(),
            ));
        }
        if self.width == 0 || self.height == 0 || self.depth == 0 {
            return Err(ShellstackError::InvalidConfig(format!(
                "grid dimensions must be non-zero, got {}x{}x{}",
                self.width, self.height, self.depth
            )));
        }
        if self.max_intensity() > u64::from(u16::MAX) {
            return Err(ShellstackError::InvalidConfig(format!(
                "maximum intensity {} exceeds the 16-bit range",
                self.max_intensity()
            )));
        }
        Ok(())
    }
}
