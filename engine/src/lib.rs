//! Daybreak Engine Library
//!
//! A procedural sky/atmosphere engine built on wgpu.
//! The same shading model runs in two places: a WGSL fragment shader for the
//! windowed demo and a pure-Rust function for offline panorama baking and
//! tests.
//!
//! # Modules
//!
//! - [`atmosphere`] - Sky parameter store, day/night cycle, presets, value
//!   noise, and the CPU shading function
//! - [`render`] - wgpu surface bring-up and the fullscreen-triangle sky pass
//! - [`config`] - Demo configuration and parameter persistence
//!
//! # Example
//!
//! ```
//! use daybreak_engine::atmosphere::{DayCycle, SkyParameters, SkyPreset, shade};
//! use glam::Vec3;
//!
//! let mut params = SkyParameters::default();
//! SkyPreset::Dusk.apply(&mut params);
//!
//! let cycle = DayCycle::default();
//! cycle.advance(&mut params, 1.0 / 60.0);
//!
//! // Shade one sky direction (a real consumer does this per fragment/pixel)
//! let color = shade(Vec3::new(0.0, 0.3, -1.0).normalize(), Vec3::ZERO, &params);
//! assert!(color.min_element() >= 0.0);
//! ```

pub mod atmosphere;
pub mod config;
pub mod render;

// Re-export the core model types at crate level for convenience
pub use atmosphere::{DayCycle, SkyParameters, SkyPreset, shade};
pub use render::{GpuContext, SkyDome};
