//! Procedural Sky Demo
//!
//! Run with: `cargo run --bin sky-demo`
//!
//! A windowed viewer for the procedural sky: free-look camera, running
//! day/night cycle, and live preset switching.
//!
//! Controls:
//! - Mouse right-drag: Look around
//! - 1-6: Presets (dawn, noon, dusk, night, foggy-morning, clear-day)
//! - Space: Pause/resume the day cycle
//! - +/-: Day cycle speed
//! - S: Toggle stars
//! - F: Toggle fog
//! - B: Toggle palette blending
//! - F5/F9: Save/load sky parameters (sky_params.json)
//! - ESC: Exit

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use glam::{Mat4, Vec3};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use daybreak_engine::atmosphere::day_cycle::hour_string;
use daybreak_engine::atmosphere::{DayCycle, SkyParameters, SkyPreset};
use daybreak_engine::config::{self, DemoConfig};
use daybreak_engine::render::{GpuContext, GpuContextConfig, SkyDome};

const PARAMS_PATH: &str = "sky_params.json";

/// Fixed-position free-look camera
struct Camera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    look_sensitivity: f32,
    fov: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 0.0),
            yaw: 0.0,
            pitch: 0.1, // Slightly above the horizon
            look_sensitivity: 0.003,
            fov: 60.0_f32.to_radians(),
        }
    }
}

impl Camera {
    fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    fn view_proj(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov, aspect, 0.1, 2000.0);
        proj * view
    }

    fn handle_mouse_look(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw += delta_x * self.look_sensitivity;
        self.pitch -= delta_y * self.look_sensitivity;

        let pitch_limit = 89.0_f32.to_radians();
        self.pitch = self.pitch.clamp(-pitch_limit, pitch_limit);
    }
}

struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    sky: SkyDome,
    params: SkyParameters,
    cycle: DayCycle,
    preset: SkyPreset,
    camera: Camera,
    right_mouse_down: bool,
    last_mouse_pos: Option<(f64, f64)>,
    // Stashed densities so F/C toggles restore the tuned values
    stashed_fog_density: f32,
    last_frame_time: Instant,
    frame_count: u32,
    fps_update_time: Instant,
    current_fps: f32,
}

impl AppState {
    fn new(window: Arc<Window>, config: &DemoConfig) -> Self {
        let gpu = GpuContext::new(
            Arc::clone(&window),
            GpuContextConfig {
                vsync: config.vsync,
                high_performance: true,
            },
        );
        let sky = SkyDome::new(&gpu.device, gpu.format());

        let mut params = SkyParameters::default();
        config.preset.apply(&mut params);

        let mut cycle = DayCycle::new();
        cycle.set_rotation_speed(config.rotation_speed);
        cycle.set_paused(config.paused);

        let now = Instant::now();

        Self {
            window,
            gpu,
            sky,
            params,
            cycle,
            preset: config.preset,
            camera: Camera::default(),
            right_mouse_down: false,
            last_mouse_pos: None,
            stashed_fog_density: 0.005,
            last_frame_time: now,
            frame_count: 0,
            fps_update_time: now,
            current_fps: 0.0,
        }
    }

    fn apply_preset(&mut self, preset: SkyPreset) {
        self.preset = preset;
        preset.apply(&mut self.params);
        log::info!("[SkyDemo] Applied preset '{}'", preset.label());
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size.width, new_size.height);
    }

    fn update(&mut self) {
        let now = Instant::now();
        let delta_time = (now - self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        self.cycle.advance(&mut self.params, delta_time);

        // FPS tracking and title bar
        self.frame_count += 1;
        let fps_elapsed = (now - self.fps_update_time).as_secs_f32();
        if fps_elapsed >= 1.0 {
            self.current_fps = self.frame_count as f32 / fps_elapsed;
            self.frame_count = 0;
            self.fps_update_time = now;

            self.window.set_title(&format!(
                "Daybreak | {} | {} | FPS: {:.0}{}",
                hour_string(self.params.time_of_day()),
                self.preset.label(),
                self.current_fps,
                if self.cycle.is_paused() { " | paused" } else { "" },
            ));
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.gpu.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (width, height) = self.gpu.dimensions();
        let aspect = width as f32 / height as f32;
        self.sky.update(
            &self.gpu.queue,
            self.camera.view_proj(aspect),
            self.camera.position,
            &self.params,
        );

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Sky Demo Encoder"),
            });

        self.sky.render_to_view(&mut encoder, &view);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if !pressed {
            return;
        }

        match key {
            KeyCode::Digit1 => self.apply_preset(SkyPreset::Dawn),
            KeyCode::Digit2 => self.apply_preset(SkyPreset::Noon),
            KeyCode::Digit3 => self.apply_preset(SkyPreset::Dusk),
            KeyCode::Digit4 => self.apply_preset(SkyPreset::Night),
            KeyCode::Digit5 => self.apply_preset(SkyPreset::FoggyMorning),
            KeyCode::Digit6 => self.apply_preset(SkyPreset::ClearDay),
            KeyCode::Tab => self.apply_preset(self.preset.next()),
            KeyCode::Space => {
                self.cycle.toggle_paused();
                log::info!(
                    "[SkyDemo] Day cycle {}",
                    if self.cycle.is_paused() { "paused" } else { "running" }
                );
            }
            KeyCode::Equal | KeyCode::NumpadAdd => {
                self.cycle.set_rotation_speed(self.cycle.rotation_speed() * 2.0);
                log::info!("[SkyDemo] Cycle speed {:.3} h/s", self.cycle.rotation_speed());
            }
            KeyCode::Minus | KeyCode::NumpadSubtract => {
                self.cycle.set_rotation_speed(self.cycle.rotation_speed() * 0.5);
                log::info!("[SkyDemo] Cycle speed {:.3} h/s", self.cycle.rotation_speed());
            }
            KeyCode::KeyS => {
                self.params.set_show_stars(!self.params.show_stars());
                log::info!(
                    "[SkyDemo] Stars {}",
                    if self.params.show_stars() { "on" } else { "off" }
                );
            }
            KeyCode::KeyF => {
                if self.params.fog_density() > 0.0 {
                    self.stashed_fog_density = self.params.fog_density();
                    self.params.set_fog_density(0.0);
                    log::info!("[SkyDemo] Fog off");
                } else {
                    self.params.set_fog_density(self.stashed_fog_density);
                    log::info!("[SkyDemo] Fog on ({:.3})", self.stashed_fog_density);
                }
            }
            KeyCode::KeyB => {
                self.cycle.set_color_blend(!self.cycle.color_blend());
                log::info!(
                    "[SkyDemo] Palette blending {}",
                    if self.cycle.color_blend() { "on" } else { "off" }
                );
            }
            KeyCode::F5 => match config::save_params(&self.params, Path::new(PARAMS_PATH)) {
                Ok(()) => log::info!("[SkyDemo] Saved parameters to {}", PARAMS_PATH),
                Err(err) => log::error!("[SkyDemo] Save failed: {}", err),
            },
            KeyCode::F9 => match config::load_params(Path::new(PARAMS_PATH)) {
                Ok(params) => {
                    self.params = params;
                    log::info!("[SkyDemo] Loaded parameters from {}", PARAMS_PATH);
                }
                Err(err) => log::error!("[SkyDemo] Load failed: {}", err),
            },
            KeyCode::KeyR => {
                self.params = SkyParameters::default();
                self.apply_preset(self.preset);
                self.camera = Camera::default();
                log::info!("[SkyDemo] Reset");
            }
            _ => {}
        }
    }

    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button == MouseButton::Right {
            self.right_mouse_down = pressed;
            if !pressed {
                self.last_mouse_pos = None;
            }
        }
    }

    fn handle_mouse_move(&mut self, x: f64, y: f64) {
        if self.right_mouse_down {
            if let Some((last_x, last_y)) = self.last_mouse_pos {
                let delta_x = (x - last_x) as f32;
                let delta_y = (y - last_y) as f32;
                self.camera.handle_mouse_look(delta_x, delta_y);
            }
        }
        self.last_mouse_pos = Some((x, y));
    }
}

struct App {
    config: DemoConfig,
    state: Option<AppState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("Daybreak - right-drag to look, 1-6 for presets")
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
        self.state = Some(AppState::new(window, &self.config));

        log::info!("[SkyDemo] Ready! Controls:");
        log::info!("  Right-drag - Look around");
        log::info!("  1-6 / Tab - Presets");
        log::info!("  Space - Pause day cycle, +/- speed");
        log::info!("  S - Stars, F - Fog, B - Palette blending");
        log::info!("  F5/F9 - Save/load parameters, R - Reset");
        log::info!("  ESC - Exit");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.resize(new_size);
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;

                if key == KeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }

                state.handle_key(key, pressed);
            }
            WindowEvent::MouseInput { button, state: btn_state, .. } => {
                state.handle_mouse_button(button, btn_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                state.handle_mouse_move(position.x, position.y);
            }
            WindowEvent::RedrawRequested => {
                state.update();

                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                    Err(e) => log::error!("Render error: {:?}", e),
                }

                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    let config = DemoConfig::load_or_default(Path::new("daybreak.json"));

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App { config, state: None };
    event_loop.run_app(&mut app).unwrap();
}
