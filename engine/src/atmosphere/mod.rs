//! Atmosphere Module
//!
//! The procedural sky model: a mutable parameter store, a day/night cycle
//! that drives it, named presets, and a pure shading function that turns a
//! view direction into a sky color.
//!
//! # Features
//! - Day/night cycle with sun path and palette blending
//! - Sun disk with air-density scattering halo
//! - Value-noise clouds scrolled by the time of day
//! - Exponential height fog
//! - Stars gated by sun elevation
//! - Reinhard tone mapping and gamma-corrected output

pub mod bake;
pub mod day_cycle;
pub mod noise;
pub mod params;
pub mod presets;
pub mod shading;

pub use bake::bake_panorama;
pub use day_cycle::{DayCycle, sun_direction_at};
pub use params::SkyParameters;
pub use presets::SkyPreset;
pub use shading::shade;
