//! Voxelization of the sphere, cone and cylinder shells.

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use glam::{DVec3, Vec3Swizzles};

use crate::surface::surface_value;
use crate::{ShapeConfig, Volume};

/// Slices between progress messages.
const PROGRESS_INTERVAL: u32 = 10;

/// The shapes drawn into the volume, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Sphere around the volume center.
    Sphere,
    /// Wide cone along the x axis, opening towards +x.
    Cone1,
    /// Narrow cone along the y axis, opening towards +y.
    Cone2,
    /// Cylinder along the z axis.
    Cylinder,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Sphere, Shape::Cone1, Shape::Cone2, Shape::Cylinder];

    /// Returns the raw intensity configured for this shape.
    #[must_use]
    pub fn value(self, config: &ShapeConfig) -> u32 {
        match self {
            Shape::Sphere => config.sphere_value,
            Shape::Cone1 => config.cone1_value,
            Shape::Cone2 => config.cone2_value,
            Shape::Cylinder => config.cylinder_value,
        }
    }
}

/// Radii and center derived from the grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellGeometry {
    pub center: DVec3,
    pub sphere_radius: f64,
    pub cone1_radius: f64,
    pub cone2_radius: f64,
    pub cylinder_radius: f64,
    height: f64,
}

impl ShellGeometry {
    #[must_use]
    pub fn new(config: &ShapeConfig) -> Self {
        let dims = config.dims();
        let center = dims.as_dvec3() / 2.0;
        let sphere_radius = f64::from(dims.min_element()) / 3.0;
        Self {
            center,
            sphere_radius,
            cone1_radius: sphere_radius,
            cone2_radius: sphere_radius / 2.0,
            cylinder_radius: sphere_radius / 6.0,
            height: f64::from(config.height),
        }
    }

    /// Returns the shell radius and squared distance for `shape` at voxel `p`.
    ///
    /// Cone radii grow linearly with position along their axis; both are
    /// normalized by the grid height.
    #[must_use]
    pub fn shell(&self, shape: Shape, p: DVec3) -> (f64, f64) {
        let d = p - self.center;
        match shape {
            Shape::Sphere => (self.sphere_radius, d.length_squared()),
            Shape::Cone1 => (
                p.x / self.height * self.cone1_radius,
                d.yz().length_squared(),
            ),
            Shape::Cone2 => (
                p.y / self.height * self.cone2_radius,
                d.xz().length_squared(),
            ),
            Shape::Cylinder => (self.cylinder_radius, d.xy().length_squared()),
        }
    }
}

/// Converts a shape's membership at a voxel into a stored intensity.
///
/// Truncates toward zero and saturates at `u16::MAX`.
#[must_use]
pub fn shape_intensity(value: u32, data_scale: u32, membership: f64, fade: bool) -> u16 {
    let mut v = f64::from(value) * f64::from(data_scale);
    if fade {
        v *= membership;
    }
    v as u16
}

/// Generates the full test volume for `config`.
///
/// Each voxel holds the largest contribution of the four shells; overlapping
/// shells never add up. Zero dimensions yield an empty volume.
#[must_use]
pub fn generate(config: &ShapeConfig) -> Volume {
    let mut volume = Volume::new(config.width, config.height, config.depth);
    let geometry = ShellGeometry::new(config);
    let thickness = f64::from(config.thickness);
    log::debug!("shell geometry: {geometry:?}");

    for z in 0..config.depth {
        if z % PROGRESS_INTERVAL == 0 || z == config.depth - 1 {
            log::info!("z {z}");
        }
        for y in 0..config.height {
            for x in 0..config.width {
                let p = DVec3::new(f64::from(x), f64::from(y), f64::from(z));
                for shape in Shape::ALL {
                    let (r, d_sq) = geometry.shell(shape, p);
                    let membership = surface_value(r, d_sq, thickness);
                    if membership > 0.0 {
                        let v = shape_intensity(
                            shape.value(config),
                            config.data_scale,
                            membership,
                            config.fade,
                        );
                        volume.raise(x, y, z, v);
                    }
                }
            }
        }
    }

    volume
}
