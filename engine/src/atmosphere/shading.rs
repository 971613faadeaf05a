//! Sky Shading
//!
//! The pure shading function: view direction in, RGB out. Seven stages run
//! in a fixed order, each feeding the next - gradient, sun, clouds, fog,
//! stars, Reinhard tone mapping, gamma. Reordering any pair changes the
//! image, so the stages are kept as separate functions and composed once in
//! [`shade`].
//!
//! There are no error paths: every input is a well-formed vector or real by
//! construction (view directions are normalized upstream). Intermediate
//! color values are per-channel and unclamped between stages; the final
//! output lands in [0, 1) through the tone mapper, and the render surface
//! owns any last clamp.

use glam::Vec3;

use super::noise::value_noise3;
use super::params::SkyParameters;

/// Angular size of the sun disk, as a dot-product window. Small enough that
/// the sun reads as a tight disk; the wide glow is the halo term.
pub const SUN_DISK_SIZE: f32 = 0.004;

/// Noise-space scale of the cloud field.
const CLOUD_NOISE_SCALE: f32 = 4.0;

/// Noise-space scale of the star field. Much higher frequency than clouds
/// so single "cells" shrink to star-like points.
const STAR_NOISE_SCALE: f32 = 60.0;

/// Distance proxy for the fog integral: the sky is treated as a shell at a
/// fixed far plane rather than ray-marched.
const FAR_PLANE: f32 = 1000.0;

/// World height over which fog fades out entirely.
const FOG_FADE_HEIGHT: f32 = 50.0;

/// Cubic Hermite threshold, clamped to [0, 1].
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Stage 1: vertical gradient between horizon and zenith color.
///
/// `horizon_fade` bends the blend curve: 0 keeps the plain linear ramp,
/// values toward 1 pull the zenith color down the dome.
pub fn gradient_stage(view_dir: Vec3, params: &SkyParameters) -> Vec3 {
    let t = (view_dir.y * 0.5 + 0.5).clamp(0.0, 1.0);
    let curve = t.powf(1.0 - params.horizon_fade());
    params.horizon_color().lerp(params.zenith_color(), curve)
}

/// Disk factor of the sun: 0 outside the disk window, up to `sun_intensity`
/// dead-center.
pub fn sun_disk(view_dir: Vec3, sun_direction: Vec3, sun_intensity: f32) -> f32 {
    let amount = view_dir.dot(sun_direction).clamp(0.0, 1.0);
    smoothstep(1.0 - SUN_DISK_SIZE, 1.0, amount) * sun_intensity
}

/// Stage 2: sun disk plus forward-scattering halo.
///
/// The halo strength comes from `air_density`: a thin eighth-power lobe
/// around the sun, standing in for the wide term of a two-lobe glow.
pub fn sun_stage(color: Vec3, view_dir: Vec3, params: &SkyParameters) -> Vec3 {
    let amount = view_dir.dot(params.sun_direction()).clamp(0.0, 1.0);
    let disk = sun_disk(view_dir, params.sun_direction(), params.sun_intensity());
    let halo = params.air_density() * amount.powi(8) * 4.0;
    color + params.sun_color() * (disk + halo)
}

/// Stage 3: value-noise clouds, scrolled along x/z by the hour of day.
///
/// The store's hour doubles as the animation clock, so clouds advance
/// exactly when the day cycle ticks and the shading function needs no extra
/// time argument.
pub fn cloud_stage(color: Vec3, view_dir: Vec3, params: &SkyParameters) -> Vec3 {
    let scroll = params.time_of_day() * params.cloud_speed();
    let p = view_dir * CLOUD_NOISE_SCALE + Vec3::new(scroll, 0.0, scroll);
    let mask = smoothstep(0.4, 0.7, value_noise3(p));
    color.lerp(Vec3::ONE, mask * params.cloud_density() * 0.3)
}

/// Stage 4: exponential fog, fading out with the height of the shaded point.
///
/// Distance is the fixed far-plane shell, not a real ray length. The height
/// factor keeps fog dense toward the horizon and absent straight up; with
/// `fog_density == 0` the stage is exactly the identity.
pub fn fog_stage(color: Vec3, view_dir: Vec3, camera_pos: Vec3, params: &SkyParameters) -> Vec3 {
    let distance = view_dir.length() * FAR_PLANE;
    let height = camera_pos.y + view_dir.y * FAR_PLANE;
    let height_factor = 1.0 - (height / FOG_FADE_HEIGHT).clamp(0.0, 1.0);
    let fog_amount = (1.0 - (-distance * params.fog_density()).exp()) * height_factor;
    color.lerp(params.fog_color(), fog_amount)
}

/// Raw star mask at a noise-space position: high-frequency noise pushed
/// through a tight threshold so only the brightest cells survive.
pub fn star_field(p: Vec3) -> f32 {
    smoothstep(0.95, 1.0, value_noise3(p))
}

/// Stage 5: stars, composited additively before tone mapping so they track
/// exposure like everything else.
///
/// The layer eases in as the sun sinks below the horizon; a noon sky with
/// `show_stars` left on (the default) stays clean.
pub fn star_stage(color: Vec3, view_dir: Vec3, params: &SkyParameters) -> Vec3 {
    if !params.show_stars() {
        return color;
    }
    let night = 1.0 - smoothstep(-0.15, 0.05, params.sun_direction().y);
    let star = star_field(view_dir * STAR_NOISE_SCALE) * params.star_intensity() * night;
    color + Vec3::splat(star)
}

/// Stage 6: Reinhard tone mapping, per channel. Monotonic; maps any
/// non-negative input into [0, 1).
pub fn tone_map(color: Vec3, exposure: f32) -> Vec3 {
    let scaled = color * exposure;
    scaled / (scaled + Vec3::ONE)
}

/// Stage 7: gamma correction to display encoding.
pub fn gamma_correct(color: Vec3) -> Vec3 {
    color.powf(1.0 / 2.2)
}

/// Shade one sky direction.
///
/// `view_dir` must be unit length (normalized by the caller, as every
/// consumer in this crate does). Pure and reentrant - safe to call from any
/// number of pixels at once.
pub fn shade(view_dir: Vec3, camera_pos: Vec3, params: &SkyParameters) -> Vec3 {
    let color = gradient_stage(view_dir, params);
    let color = sun_stage(color, view_dir, params);
    let color = cloud_stage(color, view_dir, params);
    let color = fog_stage(color, view_dir, camera_pos, params);
    let color = star_stage(color, view_dir, params);
    let color = tone_map(color, params.exposure());
    gamma_correct(color)
}
