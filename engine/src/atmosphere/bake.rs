//! Panorama Baking
//!
//! Renders the sky model on the CPU into an equirectangular RGBA8 image -
//! the offline counterpart of the WGSL path, sharing [`shade`] exactly.
//! The baker is the render surface here, so the final clamp to [0, 1]
//! happens in this module before quantization.

use glam::Vec3;

use super::params::SkyParameters;
use super::shading::shade;

/// Eye position used for baking: standing height above the ground plane,
/// matching the demo's default camera.
const BAKE_EYE: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Equirectangular direction for a pixel center. Row 0 is the zenith,
/// the middle row the horizon, the last row the nadir.
fn pixel_direction(x: u32, y: u32, width: u32, height: u32) -> Vec3 {
    let u = (x as f32 + 0.5) / width as f32;
    let v = (y as f32 + 0.5) / height as f32;

    let longitude = (u * 2.0 - 1.0) * std::f32::consts::PI;
    let latitude = (0.5 - v) * std::f32::consts::PI;

    Vec3::new(
        latitude.cos() * longitude.sin(),
        latitude.sin(),
        -latitude.cos() * longitude.cos(),
    )
    .normalize()
}

/// Bake the sky into a `width` x `height` equirectangular RGBA8 buffer,
/// row-major from the top.
pub fn bake_panorama(params: &SkyParameters, width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);

    for y in 0..height {
        for x in 0..width {
            let dir = pixel_direction(x, y, width, height);
            let color = shade(dir, BAKE_EYE, params).clamp(Vec3::ZERO, Vec3::ONE);
            data.push((color.x * 255.0).round() as u8);
            data.push((color.y * 255.0).round() as u8);
            data.push((color.z * 255.0).round() as u8);
            data.push(255);
        }
    }

    data
}
