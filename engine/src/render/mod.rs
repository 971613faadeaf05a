//! Render Module
//!
//! wgpu plumbing for the demo: surface/device bring-up and the
//! fullscreen-triangle sky pass.

pub mod gpu_context;
pub mod sky_dome;

pub use gpu_context::{GpuContext, GpuContextConfig};
pub use sky_dome::{SkyDome, SkyDomeUniforms};
