use crate::constants::CLEAR_COLOR;
use flow_core::{VisualBuffer, BACKGROUND_SIZE, BACKGROUND_TINT, POINT_SIZE_PX};
use glam::{Mat4, Vec2};
use web_sys as web;

mod background;
mod helpers;
mod points;

use background::{create_background_resources, BackgroundResources, BackgroundUniforms};
use points::{create_points_resources, PointsResources, PointsUniforms};

/// Per-frame values the shaders read besides the slot buffers.
#[derive(Clone, Copy, Debug)]
pub struct FrameUniforms {
    pub view_proj: Mat4,
    pub time: f32,
    pub pointer: Vec2,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    background: BackgroundResources,
    points: PointsResources,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, capacity: usize) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let background = create_background_resources(&device, &queue, format);
        let points = create_points_resources(&device, format, capacity);
        log::info!(
            "[render] surface {}x{} {:?}, {} point slots",
            width,
            height,
            format,
            capacity
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            background,
            points,
            width,
            height,
        })
    }

    pub fn set_background_image(&mut self, bitmap: web::ImageBitmap) {
        self.background.set_image(&self.device, &self.queue, bitmap);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    /// Mark the cycled slots dirty: copy them into the instance buffers.
    pub fn upload_points(&self, buffer: &VisualBuffer) {
        self.points.upload(&self.queue, buffer);
    }

    pub fn render(&mut self, frame_uniforms: &FrameUniforms) -> Result<(), wgpu::SurfaceError> {
        let view_proj = frame_uniforms.view_proj.to_cols_array_2d();
        let bg = BackgroundUniforms {
            view_proj,
            tint: [BACKGROUND_TINT[0], BACKGROUND_TINT[1], BACKGROUND_TINT[2], 1.0],
            half_size: [BACKGROUND_SIZE[0] * 0.5, BACKGROUND_SIZE[1] * 0.5],
            _pad: [0.0; 2],
        };
        let pts = PointsUniforms {
            view_proj,
            resolution: [self.width as f32, self.height as f32],
            pointer: frame_uniforms.pointer.to_array(),
            time: frame_uniforms.time,
            point_size: POINT_SIZE_PX,
            _pad: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.background.uniform_buffer, 0, bytemuck::bytes_of(&bg));
        self.queue
            .write_buffer(&self.points.uniform_buffer, 0, bytemuck::bytes_of(&pts));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // painter's order: artboard first, points blend on top
            self.background.draw(&mut rpass);
            self.points.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
