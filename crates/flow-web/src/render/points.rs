use super::helpers;
use flow_core::VisualBuffer;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointsUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) resolution: [f32; 2],
    pub(crate) pointer: [f32; 2],
    pub(crate) time: f32,
    pub(crate) point_size: f32,
    pub(crate) _pad: [f32; 2],
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const OPACITY_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32];

/// One instanced sprite per buffer slot; slot data lives in two
/// instance-rate vertex buffers sized once for the whole pool.
pub(crate) struct PointsResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    position_buffer: wgpu::Buffer,
    opacity_buffer: wgpu::Buffer,
    capacity: u32,
}

pub(crate) fn create_points_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    capacity: usize,
) -> PointsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(flow_core::POINTS_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("points_bgl"),
        entries: &[helpers::uniform_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("points_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let additive = wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
    };
    let pipeline = helpers::make_quad_pipeline(
        device,
        "points_pipeline",
        &pl,
        &shader,
        ("vs_points", "fs_points"),
        &[
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &POSITION_ATTRS,
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<f32>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &OPACITY_ATTRS,
            },
        ],
        color_format,
        Some(additive),
    );
    let uniform_buffer = helpers::uniform_buffer(
        device,
        "points_uniforms",
        std::mem::size_of::<PointsUniforms>(),
    );
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("points_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    // zero-sized vertex buffers are not bindable, keep at least one slot
    let slots = capacity.max(1) as u64;
    let position_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("point_positions"),
        size: slots * std::mem::size_of::<[f32; 3]>() as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let opacity_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("point_opacities"),
        size: slots * std::mem::size_of::<f32>() as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    PointsResources {
        pipeline,
        uniform_buffer,
        bind_group,
        position_buffer,
        opacity_buffer,
        capacity: capacity as u32,
    }
}

impl PointsResources {
    /// Copy the freshly cycled slots to the GPU.
    pub(crate) fn upload(&self, queue: &wgpu::Queue, buffer: &VisualBuffer) {
        if self.capacity == 0 {
            return;
        }
        queue.write_buffer(&self.position_buffer, 0, buffer.position_bytes());
        queue.write_buffer(&self.opacity_buffer, 0, buffer.opacity_bytes());
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.capacity == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.position_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.opacity_buffer.slice(..));
        rpass.draw(0..6, 0..self.capacity);
    }
}
