//! Atmosphere Tests - Presets, Day Cycle and Shading Scenarios
//!
//! Cross-module tests for the sky model: preset application feeding the
//! shading function, the day cycle keeping the store's invariants, and the
//! GPU uniform snapshot staying faithful to the store.

use daybreak_engine::atmosphere::day_cycle::{palette_at, sun_direction_at};
use daybreak_engine::atmosphere::shading::{
    fog_stage, gradient_stage, shade, sun_disk, tone_map,
};
use daybreak_engine::atmosphere::{DayCycle, SkyParameters, SkyPreset};
use daybreak_engine::render::SkyDomeUniforms;
use glam::{Mat4, Vec3};

// ============================================================================
// Spec Scenarios
// ============================================================================

#[test]
fn test_six_oclock_sun_points_straight_up() {
    // timeOfDay = 6, auto-rotate off: direction must be (0, 1, 0)
    let mut params = SkyParameters::default();
    params.set_time_of_day(6.0);
    let dir = sun_direction_at(params.time_of_day());
    assert!(dir.x.abs() < 1e-5);
    assert!((dir.y - 1.0).abs() < 1e-5);
    assert_eq!(dir.z, 0.0);
}

#[test]
fn test_zero_fog_density_never_touches_color() {
    let mut params = SkyParameters::default();
    params.set_fog_density(0.0);

    let camera = Vec3::new(0.0, 2.0, 0.0);
    for i in 0..32 {
        let a = i as f32 * 0.41;
        let dir = Vec3::new(a.cos(), (a * 0.3).sin() * 0.5, a.sin()).normalize();
        let color = Vec3::new(0.25, 0.5, 0.75);
        assert_eq!(fog_stage(color, dir, camera, &params), color);
    }
}

#[test]
fn test_night_preset_star_contract() {
    let mut params = SkyParameters::default();
    params.set_show_stars(false);
    params.set_star_intensity(0.0);

    SkyPreset::Night.apply(&mut params);
    assert!(params.show_stars());
    assert_eq!(params.star_intensity(), 0.8);
}

#[test]
fn test_gradient_top_color_comes_from_store() {
    let mut params = SkyParameters::default();
    params.set_zenith_color(Vec3::new(0.1, 0.2, 0.9));
    let color = gradient_stage(Vec3::Y, &params);
    assert!((color - Vec3::new(0.1, 0.2, 0.9)).length() < 1e-6);
}

#[test]
fn test_sun_disk_window() {
    let sun = Vec3::new(0.0, 0.5, -0.866).normalize();
    assert_eq!(sun_disk(sun, sun, 1.2), 1.2);

    // Ten degrees off the sun axis: cos(10 deg) ~ 0.985 sits far below the
    // disk window at 1 - 0.004
    let angle = 10.0_f32.to_radians();
    let off = Vec3::new(
        0.0,
        sun.y * angle.cos() - sun.z * angle.sin(),
        sun.y * angle.sin() + sun.z * angle.cos(),
    );
    assert_eq!(sun_disk(off, sun, 1.2), 0.0);
}

#[test]
fn test_tone_map_bounds_any_hdr_input() {
    for exposure in [0.25, 1.0, 4.0] {
        for value in [0.0, 0.5, 1.0, 100.0, 1e9] {
            let out = tone_map(Vec3::splat(value), exposure);
            assert!(out.min_element() >= 0.0);
            assert!(out.max_element() < 1.0);
        }
    }
}

// ============================================================================
// Preset -> Shading Scenarios
// ============================================================================

#[test]
fn test_night_sky_is_darker_than_noon_sky() {
    let camera = Vec3::new(0.0, 2.0, 0.0);
    let dir = Vec3::new(0.3, 0.4, -0.6).normalize();

    let mut noon = SkyParameters::default();
    SkyPreset::Noon.apply(&mut noon);
    let mut night = SkyParameters::default();
    SkyPreset::Night.apply(&mut night);
    // Compare the base skies; a star cell on this exact ray would only add
    // light to the night side
    night.set_show_stars(false);

    let noon_color = shade(dir, camera, &noon);
    let night_color = shade(dir, camera, &night);
    assert!(
        night_color.length() < noon_color.length(),
        "night {:?} should be darker than noon {:?}",
        night_color,
        noon_color
    );
}

#[test]
fn test_foggy_morning_pulls_sky_toward_fog_color() {
    let camera = Vec3::new(0.0, 2.0, 0.0);
    // Near the horizon, where the height factor keeps fog strong
    let dir = Vec3::new(1.0, 0.01, 0.0).normalize();

    let mut foggy = SkyParameters::default();
    SkyPreset::FoggyMorning.apply(&mut foggy);
    let mut clear = foggy.clone();
    clear.set_fog_density(0.0);

    let foggy_color = shade(dir, camera, &foggy);
    let clear_color = shade(dir, camera, &clear);

    // Where the fog color itself ends up after tone mapping and gamma
    let fog_reference = daybreak_engine::atmosphere::shading::gamma_correct(tone_map(
        foggy.fog_color(),
        foggy.exposure(),
    ));

    let foggy_distance = (foggy_color - fog_reference).length();
    let clear_distance = (clear_color - fog_reference).length();
    assert!(foggy_distance < clear_distance);
}

#[test]
fn test_every_preset_shades_to_displayable_colors() {
    let camera = Vec3::new(0.0, 2.0, 0.0);
    for preset in SkyPreset::ALL {
        let mut params = SkyParameters::default();
        preset.apply(&mut params);

        for i in 0..16 {
            let a = i as f32 * 0.7;
            let dir = Vec3::new(a.cos() * 0.7, (a * 0.9).sin(), a.sin() * 0.7).normalize();
            let color = shade(dir, camera, &params);
            assert!(color.is_finite(), "{:?} at {:?}", preset, dir);
            assert!(color.min_element() >= 0.0);
            assert!(color.max_element() <= 1.0);
        }
    }
}

// ============================================================================
// Day Cycle Scenarios
// ============================================================================

#[test]
fn test_cycle_keeps_sun_direction_unit_over_a_full_day() {
    let mut params = SkyParameters::default();
    let mut cycle = DayCycle::new();
    cycle.set_rotation_speed(1.0);

    for _ in 0..240 {
        cycle.advance(&mut params, 0.1); // 24 hours in 240 ticks
        let len = params.sun_direction().length();
        assert!((len - 1.0).abs() < 1e-5);
        assert!(params.time_of_day() >= 0.0 && params.time_of_day() < 24.0);
    }
}

#[test]
fn test_cycle_palette_lands_in_store_clamped() {
    let mut params = SkyParameters::default();
    let cycle = DayCycle::new();

    // Walk a day in steps; every blended color must already satisfy the
    // store's [0, 1] channel invariant. A zero-delta advance applies the
    // palette for the current hour without moving time.
    for step in 0..48 {
        params.set_time_of_day(step as f32 * 0.5);
        cycle.advance(&mut params, 0.0);
        for color in [params.zenith_color(), params.horizon_color(), params.fog_color()] {
            assert!(color.min_element() >= 0.0);
            assert!(color.max_element() <= 1.0);
        }
    }
}

#[test]
fn test_palette_midnight_anchor() {
    // hour 0 is the exact midpoint of the night half: the midnight anchor
    let (zenith, horizon, fog) = palette_at(0.0);
    assert!((zenith - Vec3::new(0.0, 0.0, 0.2)).length() < 1e-5);
    assert!((horizon - Vec3::new(0.0, 0.0, 0.4)).length() < 1e-5);
    assert!((fog - Vec3::new(0.0, 0.0, 0.2)).length() < 1e-5);
}

// ============================================================================
// GPU Uniform Snapshot
// ============================================================================

#[test]
fn test_uniform_snapshot_tracks_preset() {
    let mut params = SkyParameters::default();
    SkyPreset::Dusk.apply(&mut params);

    let uniforms = SkyDomeUniforms::from_params(Mat4::IDENTITY, Vec3::new(0.0, 2.0, 0.0), &params);
    assert_eq!(uniforms.time_of_day, 18.0);
    assert_eq!(uniforms.fog_density, 0.008);
    assert_eq!(uniforms.sun_intensity, 0.8);

    let dir = Vec3::from(uniforms.sun_dir);
    assert!((dir.length() - 1.0).abs() < 1e-5);
}
