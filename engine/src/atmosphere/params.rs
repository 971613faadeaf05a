//! Sky Parameter Store
//!
//! A single bundle of every knob the shading model reads. One instance is
//! owned by the application and passed by reference into the day cycle, the
//! shading function, and the uniform upload - there is no global state.
//!
//! Writes are infallible. Three invariants are enforced at write time:
//! - `sun_direction` is renormalized after every edit
//! - color channels are clamped to [0, 1]
//! - `time_of_day` wraps modulo 24
//!
//! Everything else is stored exactly as given; out-of-range numeric values
//! degrade to implausible-looking skies, not errors.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Current shading parameters for the procedural sky.
///
/// Created once at startup with [`SkyParameters::default`], then mutated in
/// place by the day cycle, by preset application, and by direct user edits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkyParameters {
    sun_direction: Vec3,
    time_of_day: f32,
    air_density: f32,
    horizon_fade: f32,
    fog_density: f32,
    fog_color: Vec3,
    cloud_speed: f32,
    cloud_density: f32,
    exposure: f32,
    horizon_color: Vec3,
    zenith_color: Vec3,
    sun_color: Vec3,
    sun_intensity: f32,
    star_intensity: f32,
    show_stars: bool,
}

impl Default for SkyParameters {
    fn default() -> Self {
        Self {
            sun_direction: Vec3::new(0.0, 1.0, 0.0),
            time_of_day: 12.0,
            air_density: 0.01,
            horizon_fade: 0.5,
            fog_density: 0.002,
            fog_color: Vec3::new(0.8, 0.9, 1.0),
            cloud_speed: 0.25,
            cloud_density: 0.5,
            exposure: 1.0,
            horizon_color: Vec3::new(1.0, 0.9, 0.8),
            zenith_color: Vec3::new(0.529, 0.808, 0.922),
            sun_color: Vec3::new(1.0, 1.0, 1.0),
            sun_intensity: 1.0,
            star_intensity: 0.5,
            show_stars: true,
        }
    }
}

fn clamp_color(c: Vec3) -> Vec3 {
    c.clamp(Vec3::ZERO, Vec3::ONE)
}

impl SkyParameters {
    /// Direction toward the sun. Always unit length.
    pub fn sun_direction(&self) -> Vec3 {
        self.sun_direction
    }

    /// Set the sun direction. The stored value is renormalized; a degenerate
    /// zero-length input falls back to straight up rather than poisoning the
    /// store with NaN.
    pub fn set_sun_direction(&mut self, dir: Vec3) {
        self.sun_direction = dir.try_normalize().unwrap_or(Vec3::Y);
    }

    /// Hour of day in [0, 24).
    pub fn time_of_day(&self) -> f32 {
        self.time_of_day
    }

    /// Set the hour of day. Wraps modulo 24 - the cycle is periodic, never
    /// clamped, so hour 25 is 1:00 and hour -1 is 23:00.
    pub fn set_time_of_day(&mut self, hour: f32) {
        self.time_of_day = hour.rem_euclid(24.0);
    }

    /// Scattering halo strength around the sun.
    pub fn air_density(&self) -> f32 {
        self.air_density
    }

    pub fn set_air_density(&mut self, value: f32) {
        self.air_density = value;
    }

    /// Gradient sharpness control in [0, 1]; higher values push the horizon
    /// band down and fill more of the dome with the zenith color.
    pub fn horizon_fade(&self) -> f32 {
        self.horizon_fade
    }

    pub fn set_horizon_fade(&mut self, value: f32) {
        self.horizon_fade = value;
    }

    /// Exponential fog falloff rate.
    pub fn fog_density(&self) -> f32 {
        self.fog_density
    }

    pub fn set_fog_density(&mut self, value: f32) {
        self.fog_density = value;
    }

    pub fn fog_color(&self) -> Vec3 {
        self.fog_color
    }

    pub fn set_fog_color(&mut self, color: Vec3) {
        self.fog_color = clamp_color(color);
    }

    /// Cloud scroll rate, in noise-space units per hour of sky time.
    pub fn cloud_speed(&self) -> f32 {
        self.cloud_speed
    }

    pub fn set_cloud_speed(&mut self, value: f32) {
        self.cloud_speed = value;
    }

    /// Cloud opacity, typically in [0, 1].
    pub fn cloud_density(&self) -> f32 {
        self.cloud_density
    }

    pub fn set_cloud_density(&mut self, value: f32) {
        self.cloud_density = value;
    }

    /// Tone-mapping scale. 1.0 is neutral; higher brightens.
    pub fn exposure(&self) -> f32 {
        self.exposure
    }

    pub fn set_exposure(&mut self, value: f32) {
        self.exposure = value;
    }

    /// Sky color at the horizon (gradient bottom).
    pub fn horizon_color(&self) -> Vec3 {
        self.horizon_color
    }

    pub fn set_horizon_color(&mut self, color: Vec3) {
        self.horizon_color = clamp_color(color);
    }

    /// Sky color straight up (gradient top).
    pub fn zenith_color(&self) -> Vec3 {
        self.zenith_color
    }

    pub fn set_zenith_color(&mut self, color: Vec3) {
        self.zenith_color = clamp_color(color);
    }

    pub fn sun_color(&self) -> Vec3 {
        self.sun_color
    }

    pub fn set_sun_color(&mut self, color: Vec3) {
        self.sun_color = clamp_color(color);
    }

    /// Peak contribution of the sun disk.
    pub fn sun_intensity(&self) -> f32 {
        self.sun_intensity
    }

    pub fn set_sun_intensity(&mut self, value: f32) {
        self.sun_intensity = value;
    }

    /// Star brightness in [0, 1]. Only visible when [`show_stars`] is on
    /// and the sun is below the horizon.
    ///
    /// [`show_stars`]: SkyParameters::show_stars
    pub fn star_intensity(&self) -> f32 {
        self.star_intensity
    }

    pub fn set_star_intensity(&mut self, value: f32) {
        self.star_intensity = value;
    }

    pub fn show_stars(&self) -> bool {
        self.show_stars
    }

    pub fn set_show_stars(&mut self, on: bool) {
        self.show_stars = on;
    }
}
