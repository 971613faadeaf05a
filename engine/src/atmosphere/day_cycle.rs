//! Day/Night Cycle
//!
//! Maps the hour of day onto a sun direction and blends the sky palette
//! across dawn, noon, dusk and midnight reference colors.
//!
//! The cycle never schedules itself: the host frame loop calls
//! [`DayCycle::advance`] with a measured delta and the cycle mutates the
//! shared [`SkyParameters`] in place. One sky day passes in ten real minutes
//! at the default rotation speed.

use glam::Vec3;

use super::params::SkyParameters;

/// Hours of sky time per real second at the default speed (24h / 600s).
pub const DEFAULT_ROTATION_SPEED: f32 = 0.04;

/// Sun direction for a given hour of day.
///
/// The sun rides a fixed circle in the XY plane: angle = (hour / 24) * 2pi,
/// direction = normalize(cos, sin, 0). Zenith at 06:00, nadir at 18:00.
/// Defined for every real hour; the trigonometry wraps on its own, so the
/// result has period 24.
pub fn sun_direction_at(hour: f32) -> Vec3 {
    let theta = (hour / 24.0) * std::f32::consts::TAU;
    Vec3::new(theta.cos(), theta.sin(), 0.0).normalize()
}

/// Reference colors for one anchor point of the cycle.
struct PaletteKey {
    zenith: Vec3,
    horizon: Vec3,
    fog: Vec3,
}

// Anchor palettes, shared with the preset table literals.
const DAWN: PaletteKey = PaletteKey {
    zenith: Vec3::new(0.529, 0.808, 0.922),
    horizon: Vec3::new(1.0, 0.6, 0.4),
    fog: Vec3::new(0.902, 0.902, 0.980),
};
const NOON: PaletteKey = PaletteKey {
    zenith: Vec3::new(0.290, 0.502, 1.0),
    horizon: Vec3::new(0.529, 0.808, 0.922),
    fog: Vec3::new(0.8, 0.8, 1.0),
};
const DUSK: PaletteKey = PaletteKey {
    zenith: Vec3::new(0.290, 0.502, 1.0),
    horizon: Vec3::new(1.0, 0.4, 0.2),
    fog: Vec3::new(1.0, 0.702, 0.278),
};
const MIDNIGHT: PaletteKey = PaletteKey {
    zenith: Vec3::new(0.0, 0.0, 0.2),
    horizon: Vec3::new(0.0, 0.0, 0.4),
    fog: Vec3::new(0.0, 0.0, 0.2),
};

fn mix_key(a: &PaletteKey, b: &PaletteKey, t: f32) -> (Vec3, Vec3, Vec3) {
    (
        a.zenith.lerp(b.zenith, t),
        a.horizon.lerp(b.horizon, t),
        a.fog.lerp(b.fog, t),
    )
}

/// Blended (zenith, horizon, fog) colors for an hour of day.
///
/// Hours in [6, 18) are day: the first half interpolates dawn to noon, the
/// second noon to dusk, using `day_progress = (hour - 6) / 12`. The night
/// half mirrors it (dusk to midnight to dawn), so the palette is continuous
/// at both boundaries.
pub fn palette_at(hour: f32) -> (Vec3, Vec3, Vec3) {
    let h = hour.rem_euclid(24.0);
    if (6.0..18.0).contains(&h) {
        let day_progress = (h - 6.0) / 12.0;
        if day_progress < 0.5 {
            mix_key(&DAWN, &NOON, day_progress * 2.0)
        } else {
            mix_key(&NOON, &DUSK, (day_progress - 0.5) * 2.0)
        }
    } else {
        let night_progress = (h - 18.0).rem_euclid(24.0) / 12.0;
        if night_progress < 0.5 {
            mix_key(&DUSK, &MIDNIGHT, night_progress * 2.0)
        } else {
            mix_key(&MIDNIGHT, &DAWN, (night_progress - 0.5) * 2.0)
        }
    }
}

/// Format an hour of day as `HH:MM` for the demo title bar.
pub fn hour_string(hour: f32) -> String {
    let h = hour.rem_euclid(24.0);
    let hours = h as u32;
    let minutes = ((h * 60.0) % 60.0) as u32;
    format!("{:02}:{:02}", hours, minutes)
}

/// Advances the hour of day and keeps the parameter store in sync.
#[derive(Debug, Clone)]
pub struct DayCycle {
    /// Hours of sky time per real second
    rotation_speed: f32,
    /// Is the cycle frozen?
    paused: bool,
    /// Whether ticks also overwrite the zenith/horizon/fog palette
    color_blend: bool,
}

impl Default for DayCycle {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
            paused: false,
            color_blend: true,
        }
    }
}

impl DayCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the cycle by `delta_seconds` of real time.
    ///
    /// Wraps the hour modulo 24, points the sun along [`sun_direction_at`],
    /// and (when palette blending is on) overwrites the store's zenith,
    /// horizon and fog colors with [`palette_at`]. A paused cycle leaves the
    /// store untouched.
    pub fn advance(&self, params: &mut SkyParameters, delta_seconds: f32) {
        if self.paused {
            return;
        }

        let hour = params.time_of_day() + self.rotation_speed * delta_seconds;
        params.set_time_of_day(hour);
        params.set_sun_direction(sun_direction_at(params.time_of_day()));

        if self.color_blend {
            let (zenith, horizon, fog) = palette_at(params.time_of_day());
            params.set_zenith_color(zenith);
            params.set_horizon_color(horizon);
            params.set_fog_color(fog);
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    /// Set the rotation speed in hours of sky time per real second.
    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.rotation_speed = speed.clamp(0.0, 10.0);
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn set_color_blend(&mut self, on: bool) {
        self.color_blend = on;
    }

    pub fn color_blend(&self) -> bool {
        self.color_blend
    }
}
