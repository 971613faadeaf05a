//! Sky Presets
//!
//! Named, literal parameter bundles applied atomically to the parameter
//! store. A bundle overwrites exactly the fields it carries and leaves every
//! other field untouched, so switching presets never resets knobs the user
//! tuned separately (cloud density, exposure, ...).

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::params::SkyParameters;

/// Named sky preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkyPreset {
    Dawn,
    #[default]
    Noon,
    Dusk,
    Night,
    FoggyMorning,
    ClearDay,
}

/// Partial parameter bundle. `Some` fields are written, `None` fields are
/// left alone.
#[derive(Clone, Copy, Debug)]
pub struct PresetBundle {
    pub time_of_day: Option<f32>,
    pub sun_direction: Option<Vec3>,
    pub sun_color: Option<Vec3>,
    pub sun_intensity: Option<f32>,
    pub zenith_color: Option<Vec3>,
    pub horizon_color: Option<Vec3>,
    pub fog_density: Option<f32>,
    pub fog_color: Option<Vec3>,
    pub show_stars: Option<bool>,
    pub star_intensity: Option<f32>,
}

const EMPTY: PresetBundle = PresetBundle {
    time_of_day: None,
    sun_direction: None,
    sun_color: None,
    sun_intensity: None,
    zenith_color: None,
    horizon_color: None,
    fog_density: None,
    fog_color: None,
    show_stars: None,
    star_intensity: None,
};

// Bundle literals, indexed by discriminant. Sun directions are the original
// light positions (normalized on application); colors are #rrggbb / 255.
const PRESET_TABLE: [PresetBundle; 6] = [
    // Dawn
    PresetBundle {
        time_of_day: Some(6.0),
        sun_direction: Some(Vec3::new(30.0, 5.0, 10.0)),
        sun_color: Some(Vec3::new(1.0, 0.6, 0.4)),
        sun_intensity: Some(0.7),
        zenith_color: Some(Vec3::new(0.529, 0.808, 0.922)),
        horizon_color: Some(Vec3::new(1.0, 0.6, 0.4)),
        fog_density: Some(0.01),
        fog_color: Some(Vec3::new(0.902, 0.902, 0.980)),
        ..EMPTY
    },
    // Noon
    PresetBundle {
        time_of_day: Some(12.0),
        sun_direction: Some(Vec3::new(0.0, 30.0, 0.0)),
        sun_color: Some(Vec3::new(1.0, 1.0, 1.0)),
        sun_intensity: Some(1.2),
        zenith_color: Some(Vec3::new(0.290, 0.502, 1.0)),
        horizon_color: Some(Vec3::new(0.529, 0.808, 0.922)),
        fog_density: Some(0.002),
        fog_color: Some(Vec3::new(0.8, 0.8, 1.0)),
        ..EMPTY
    },
    // Dusk
    PresetBundle {
        time_of_day: Some(18.0),
        sun_direction: Some(Vec3::new(-30.0, 5.0, 10.0)),
        sun_color: Some(Vec3::new(1.0, 0.4, 0.2)),
        sun_intensity: Some(0.8),
        zenith_color: Some(Vec3::new(0.290, 0.502, 1.0)),
        horizon_color: Some(Vec3::new(1.0, 0.4, 0.2)),
        fog_density: Some(0.008),
        fog_color: Some(Vec3::new(1.0, 0.702, 0.278)),
        ..EMPTY
    },
    // Night
    PresetBundle {
        time_of_day: Some(0.0),
        sun_direction: Some(Vec3::new(0.0, -20.0, 0.0)),
        sun_color: Some(Vec3::new(0.8, 0.8, 1.0)),
        sun_intensity: Some(0.1),
        zenith_color: Some(Vec3::new(0.0, 0.0, 0.2)),
        horizon_color: Some(Vec3::new(0.0, 0.0, 0.4)),
        fog_density: Some(0.015),
        fog_color: Some(Vec3::new(0.0, 0.0, 0.2)),
        show_stars: Some(true),
        star_intensity: Some(0.8),
    },
    // FoggyMorning
    PresetBundle {
        time_of_day: Some(8.0),
        sun_direction: Some(Vec3::new(20.0, 10.0, 10.0)),
        sun_color: Some(Vec3::new(1.0, 1.0, 0.8)),
        sun_intensity: Some(0.5),
        zenith_color: Some(Vec3::new(0.702, 0.702, 0.8)),
        horizon_color: Some(Vec3::new(0.902, 0.902, 0.980)),
        fog_density: Some(0.03),
        fog_color: Some(Vec3::new(0.902, 0.902, 0.980)),
        ..EMPTY
    },
    // ClearDay
    PresetBundle {
        time_of_day: Some(12.0),
        sun_direction: Some(Vec3::new(0.0, 30.0, 0.0)),
        sun_color: Some(Vec3::new(1.0, 1.0, 1.0)),
        sun_intensity: Some(1.0),
        zenith_color: Some(Vec3::new(0.529, 0.808, 0.922)),
        horizon_color: Some(Vec3::new(0.902, 0.902, 0.980)),
        fog_density: Some(0.0),
        fog_color: Some(Vec3::new(0.902, 0.902, 0.980)),
        ..EMPTY
    },
];

impl SkyPreset {
    pub const ALL: [SkyPreset; 6] = [
        SkyPreset::Dawn,
        SkyPreset::Noon,
        SkyPreset::Dusk,
        SkyPreset::Night,
        SkyPreset::FoggyMorning,
        SkyPreset::ClearDay,
    ];

    /// The preset's parameter bundle.
    pub fn bundle(self) -> &'static PresetBundle {
        &PRESET_TABLE[self as usize]
    }

    /// Apply the bundle to the store. Exactly the fields present in the
    /// bundle are overwritten, in one call, through the store's accessors
    /// (so the direction is normalized and colors are clamped as usual).
    pub fn apply(self, params: &mut SkyParameters) {
        let bundle = self.bundle();
        if let Some(hour) = bundle.time_of_day {
            params.set_time_of_day(hour);
        }
        if let Some(dir) = bundle.sun_direction {
            params.set_sun_direction(dir);
        }
        if let Some(color) = bundle.sun_color {
            params.set_sun_color(color);
        }
        if let Some(value) = bundle.sun_intensity {
            params.set_sun_intensity(value);
        }
        if let Some(color) = bundle.zenith_color {
            params.set_zenith_color(color);
        }
        if let Some(color) = bundle.horizon_color {
            params.set_horizon_color(color);
        }
        if let Some(value) = bundle.fog_density {
            params.set_fog_density(value);
        }
        if let Some(color) = bundle.fog_color {
            params.set_fog_color(color);
        }
        if let Some(on) = bundle.show_stars {
            params.set_show_stars(on);
        }
        if let Some(value) = bundle.star_intensity {
            params.set_star_intensity(value);
        }
    }

    /// Kebab-case label, as shown in the demo title bar.
    pub fn label(self) -> &'static str {
        match self {
            SkyPreset::Dawn => "dawn",
            SkyPreset::Noon => "noon",
            SkyPreset::Dusk => "dusk",
            SkyPreset::Night => "night",
            SkyPreset::FoggyMorning => "foggy-morning",
            SkyPreset::ClearDay => "clear-day",
        }
    }

    /// Look a preset up by its label.
    pub fn from_label(label: &str) -> Option<SkyPreset> {
        SkyPreset::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Cycles to the next preset.
    pub fn next(self) -> SkyPreset {
        let index = self as usize;
        SkyPreset::ALL[(index + 1) % SkyPreset::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_night_preset_enables_stars() {
        let mut params = SkyParameters::default();
        params.set_show_stars(false);
        SkyPreset::Night.apply(&mut params);
        assert!(params.show_stars());
        assert_eq!(params.star_intensity(), 0.8);
    }

    #[test]
    fn test_apply_touches_only_bundle_fields() {
        let mut params = SkyParameters::default();
        params.set_cloud_density(0.123);
        params.set_exposure(2.75);
        params.set_horizon_fade(0.9);

        SkyPreset::Noon.apply(&mut params);

        // Not part of any bundle - must survive the preset switch
        assert_eq!(params.cloud_density(), 0.123);
        assert_eq!(params.exposure(), 2.75);
        assert_eq!(params.horizon_fade(), 0.9);

        // Part of the bundle - must match the table
        assert_eq!(params.time_of_day(), 12.0);
        assert_eq!(params.fog_density(), 0.002);
    }

    #[test]
    fn test_applied_sun_direction_is_normalized() {
        let mut params = SkyParameters::default();
        SkyPreset::Dawn.apply(&mut params);
        assert!((params.sun_direction().length() - 1.0).abs() < 1e-6);

        SkyPreset::Night.apply(&mut params);
        assert_eq!(params.sun_direction(), -glam::Vec3::Y);
    }

    #[test]
    fn test_clear_day_turns_fog_off() {
        let mut params = SkyParameters::default();
        SkyPreset::ClearDay.apply(&mut params);
        assert_eq!(params.fog_density(), 0.0);
    }

    #[test]
    fn test_labels_round_trip() {
        for preset in SkyPreset::ALL {
            assert_eq!(SkyPreset::from_label(preset.label()), Some(preset));
        }
        assert_eq!(SkyPreset::from_label("blizzard"), None);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut preset = SkyPreset::Dawn;
        for _ in 0..SkyPreset::ALL.len() {
            preset = preset.next();
        }
        assert_eq!(preset, SkyPreset::Dawn);
    }
}
