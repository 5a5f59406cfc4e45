//! Core types for shellstack.
//!
//! This crate provides the pieces needed to synthesize a test volume:
//! - [`ShapeConfig`] describing the grid and the four shells
//! - [`surface_value`] scoring how close a voxel lies to a shell
//! - [`generate`] filling a [`Volume`] with a sphere, two cones and a cylinder

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod generator;
pub mod surface;
pub mod volume;

pub use config::ShapeConfig;
pub use error::{Result, ShellstackError};
pub use generator::{generate, shape_intensity, Shape, ShellGeometry};
pub use surface::surface_value;
pub use volume::Volume;

// Re-export glam types for convenience
pub use glam::{DVec3, UVec3};
