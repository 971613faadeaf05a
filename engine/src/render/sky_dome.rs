//! Sky Dome Renderer
//!
//! Fullscreen-triangle sky pass. The fragment shader reconstructs the view
//! ray from the inverse view-projection matrix and runs the same seven
//! shading stages as the CPU model in `atmosphere::shading`; this module
//! owns the uniform mirror of the parameter store and the pipeline.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use static_assertions::const_assert_eq;

use crate::atmosphere::SkyParameters;

/// GPU uniform buffer layout (must match the WGSL `SkyUniforms` struct).
///
/// vec3 fields are followed by a scalar that fills their padding slot, so
/// the Rust and WGSL layouts line up without explicit pad fields.
/// Total size: 176 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SkyDomeUniforms {
    pub inv_view_proj: [[f32; 4]; 4], // 64 bytes (offset 0)
    pub camera_pos: [f32; 3],         // 12 bytes (offset 64)
    pub time_of_day: f32,             // 4 bytes (offset 76)
    pub sun_dir: [f32; 3],            // 12 bytes (offset 80)
    pub sun_intensity: f32,           // 4 bytes (offset 92)
    pub sun_color: [f32; 3],          // 12 bytes (offset 96)
    pub air_density: f32,             // 4 bytes (offset 108)
    pub zenith_color: [f32; 3],       // 12 bytes (offset 112)
    pub horizon_fade: f32,            // 4 bytes (offset 124)
    pub horizon_color: [f32; 3],      // 12 bytes (offset 128)
    pub fog_density: f32,             // 4 bytes (offset 140)
    pub fog_color: [f32; 3],          // 12 bytes (offset 144)
    pub cloud_speed: f32,             // 4 bytes (offset 156)
    pub cloud_density: f32,           // 4 bytes (offset 160)
    pub exposure: f32,                // 4 bytes (offset 164)
    pub star_intensity: f32,          // 4 bytes (offset 168)
    pub show_stars: u32,              // 4 bytes (offset 172)
}

// Must match the WGSL layout exactly
const_assert_eq!(std::mem::size_of::<SkyDomeUniforms>(), 176);

impl SkyDomeUniforms {
    /// Snapshot the parameter store into the GPU layout.
    pub fn from_params(inv_view_proj: Mat4, camera_pos: Vec3, params: &SkyParameters) -> Self {
        Self {
            inv_view_proj: inv_view_proj.to_cols_array_2d(),
            camera_pos: camera_pos.into(),
            time_of_day: params.time_of_day(),
            sun_dir: params.sun_direction().into(),
            sun_intensity: params.sun_intensity(),
            sun_color: params.sun_color().into(),
            air_density: params.air_density(),
            zenith_color: params.zenith_color().into(),
            horizon_fade: params.horizon_fade(),
            horizon_color: params.horizon_color().into(),
            fog_density: params.fog_density(),
            fog_color: params.fog_color().into(),
            cloud_speed: params.cloud_speed(),
            cloud_density: params.cloud_density(),
            exposure: params.exposure(),
            star_intensity: params.star_intensity(),
            show_stars: params.show_stars() as u32,
        }
    }
}

/// Procedural sky renderer
pub struct SkyDome {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl SkyDome {
    /// Create the sky pipeline for the given surface format.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sky Dome Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../../shaders/sky_dome.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Sky Dome Uniform Buffer"),
            size: std::mem::size_of::<SkyDomeUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Sky Dome Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Sky Dome Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sky Dome Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Fullscreen triangle, no vertex buffer, no depth - the sky is
        // infinitely far and drawn before anything else.
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sky Dome Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        log::info!("[SkyDome] Initialized procedural sky pipeline");

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }

    /// Upload the current parameters and camera for this frame.
    pub fn update(
        &self,
        queue: &wgpu::Queue,
        view_proj: Mat4,
        camera_pos: Vec3,
        params: &SkyParameters,
    ) {
        let uniforms = SkyDomeUniforms::from_params(view_proj.inverse(), camera_pos, params);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Record the sky draw into an existing render pass.
    pub fn render(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.draw(0..3, 0..1);
    }

    /// Create a render pass on `view` and draw the sky into it.
    pub fn render_to_view(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Sky Dome Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: 0.0,
                        g: 0.0,
                        b: 0.02,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        self.render(&mut render_pass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniforms_size_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<SkyDomeUniforms>(), 176);
    }

    #[test]
    fn test_uniforms_are_pod() {
        let params = SkyParameters::default();
        let uniforms = SkyDomeUniforms::from_params(Mat4::IDENTITY, Vec3::ZERO, &params);
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), std::mem::size_of::<SkyDomeUniforms>());
    }

    #[test]
    fn test_from_params_mirrors_store() {
        let mut params = SkyParameters::default();
        params.set_time_of_day(18.5);
        params.set_fog_density(0.03);
        params.set_show_stars(true);
        params.set_star_intensity(0.8);

        let uniforms =
            SkyDomeUniforms::from_params(Mat4::IDENTITY, Vec3::new(1.0, 2.0, 3.0), &params);
        assert_eq!(uniforms.time_of_day, 18.5);
        assert_eq!(uniforms.fog_density, 0.03);
        assert_eq!(uniforms.show_stars, 1);
        assert_eq!(uniforms.star_intensity, 0.8);
        assert_eq!(uniforms.camera_pos, [1.0, 2.0, 3.0]);

        params.set_show_stars(false);
        let uniforms = SkyDomeUniforms::from_params(Mat4::IDENTITY, Vec3::ZERO, &params);
        assert_eq!(uniforms.show_stars, 0);
    }
}
