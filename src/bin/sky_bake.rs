//! Offline Sky Baker
//!
//! Run with: `cargo run --bin sky-bake [width] [height]`
//!
//! Renders an equirectangular panorama of every sky preset with the CPU
//! shading path and writes `sky_<preset>.png` files into the working
//! directory. Defaults to 1024x512.

use daybreak_engine::atmosphere::{SkyParameters, SkyPreset, bake_panorama};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let width: u32 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(1024)
        .max(1);
    let height: u32 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(width / 2)
        .max(1);

    log::info!("[SkyBake] Baking {} presets at {}x{}", SkyPreset::ALL.len(), width, height);

    for preset in SkyPreset::ALL {
        let mut params = SkyParameters::default();
        preset.apply(&mut params);

        let pixels = bake_panorama(&params, width, height);
        let filename = format!("sky_{}.png", preset.label());

        match image::save_buffer(
            &filename,
            &pixels,
            width,
            height,
            image::ExtendedColorType::Rgba8,
        ) {
            Ok(()) => log::info!("[SkyBake] Wrote {}", filename),
            Err(err) => {
                log::error!("[SkyBake] Failed to write {}: {}", filename, err);
                std::process::exit(1);
            }
        }
    }
}
