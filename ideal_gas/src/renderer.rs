//! Rendering system for the gas visualizer

use common::{rect_outline, rect_triangles, Camera2D, CameraUniform, GraphicsContext, Vertex};
use ideal_gas::{ContainerRect, Frame};
use wgpu::util::DeviceExt;

use crate::theme::Palette;

/// Instance data for GPU rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
}

impl ParticleInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        2 => Float32x3,
        3 => Float32,
        4 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Quad vertex for instanced rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

impl QuadVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

// Unit quad vertices
const QUAD_VERTICES: &[QuadVertex] = &[
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, 1.0] },
];

// canvas, container, gauge frame, gauge fill
const MAX_FILL_VERTICES: usize = 4 * 6;
// canvas, container, gauge frame
const MAX_LINE_VERTICES: usize = 3 * 8;

/// How much of each buffer the last upload filled
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawCounts {
    pub particles: u32,
    pub fill_vertices: u32,
    pub line_vertices: u32,
}

/// Physical-pixel region of the window the canvas is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneViewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SceneViewport {
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

pub struct Renderer {
    particle_pipeline: wgpu::RenderPipeline,
    fill_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    particle_buffer: wgpu::Buffer,
    fill_buffer: wgpu::Buffer,
    line_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    max_particles: usize,
}

impl Renderer {
    pub fn new(ctx: &GraphicsContext, camera: &Camera2D, max_particles: usize) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Gas Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/gas.wgsl").into()),
        });

        let camera_buffer =
            common::create_uniform_buffer(device, &CameraUniform::from_camera_2d(camera));

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
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

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let particle_pipeline = Self::create_pipeline(
            ctx,
            &pipeline_layout,
            &shader,
            "Particle Pipeline",
            ("vs_particle", "fs_particle"),
            &[QuadVertex::layout(), ParticleInstance::layout()],
            wgpu::PrimitiveTopology::TriangleList,
        );
        let fill_pipeline = Self::create_pipeline(
            ctx,
            &pipeline_layout,
            &shader,
            "Fill Pipeline",
            ("vs_shape", "fs_shape"),
            &[Vertex::LAYOUT],
            wgpu::PrimitiveTopology::TriangleList,
        );
        let line_pipeline = Self::create_pipeline(
            ctx,
            &pipeline_layout,
            &shader,
            "Line Pipeline",
            ("vs_shape", "fs_shape"),
            &[Vertex::LAYOUT],
            wgpu::PrimitiveTopology::LineList,
        );

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Buffer"),
            contents: bytemuck::cast_slice(QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let particle_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Particle Buffer"),
            size: (std::mem::size_of::<ParticleInstance>() * max_particles) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let fill_buffer = common::create_vertex_buffer(
            device,
            &[Vertex::new([0.0; 3], [0.0; 4]); MAX_FILL_VERTICES],
        );
        let line_buffer = common::create_vertex_buffer(
            device,
            &[Vertex::new([0.0; 3], [0.0; 4]); MAX_LINE_VERTICES],
        );

        Self {
            particle_pipeline,
            fill_pipeline,
            line_pipeline,
            quad_buffer,
            particle_buffer,
            fill_buffer,
            line_buffer,
            camera_buffer,
            camera_bind_group,
            max_particles,
        }
    }

    fn create_pipeline(
        ctx: &GraphicsContext,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        label: &str,
        (vs_entry, fs_entry): (&str, &str),
        buffers: &[wgpu::VertexBufferLayout<'_>],
        topology: wgpu::PrimitiveTopology,
    ) -> wgpu::RenderPipeline {
        ctx.device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(layout),
                vertex: wgpu::VertexState {
                    module: shader,
                    entry_point: vs_entry,
                    buffers,
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: shader,
                    entry_point: fs_entry,
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.config.format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
            })
    }

    pub fn update_camera(&self, queue: &wgpu::Queue, camera: &Camera2D) {
        let uniform = CameraUniform::from_camera_2d(camera);
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    /// Upload the canvas, container, gauge and particles of `frame`.
    pub fn update_frame(
        &self,
        queue: &wgpu::Queue,
        frame: &Frame,
        palette: &Palette,
        canvas: (f32, f32),
    ) -> DrawCounts {
        let instances: Vec<ParticleInstance> = frame
            .particles
            .iter()
            .take(self.max_particles)
            .map(|p| ParticleInstance {
                position: [p.position.x, p.position.y, 0.0],
                radius: p.radius,
                color: palette.particle,
            })
            .collect();
        queue.write_buffer(&self.particle_buffer, 0, bytemuck::cast_slice(&instances));

        let canvas_rect = ContainerRect::new(0.0, 0.0, canvas.0, canvas.1);
        let fill = |r: &ContainerRect, c| rect_triangles(r.left, r.top, r.width, r.height, c);
        let outline = |r: &ContainerRect, c| rect_outline(r.left, r.top, r.width, r.height, c);

        let mut fills: Vec<Vertex> = Vec::with_capacity(MAX_FILL_VERTICES);
        fills.extend(fill(&canvas_rect, palette.canvas_bg));
        fills.extend(fill(&frame.container, palette.container_bg));
        fills.extend(fill(&frame.gauge_frame, palette.container_bg));
        if frame.gauge_fill.height > 0.0 {
            fills.extend(fill(&frame.gauge_fill, palette.accent));
        }
        queue.write_buffer(&self.fill_buffer, 0, bytemuck::cast_slice(&fills));

        let mut lines: Vec<Vertex> = Vec::with_capacity(MAX_LINE_VERTICES);
        lines.extend(outline(&canvas_rect, palette.border));
        lines.extend(outline(&frame.container, palette.border));
        lines.extend(outline(&frame.gauge_frame, palette.border));
        queue.write_buffer(&self.line_buffer, 0, bytemuck::cast_slice(&lines));

        DrawCounts {
            particles: instances.len() as u32,
            fill_vertices: fills.len() as u32,
            line_vertices: lines.len() as u32,
        }
    }

    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        counts: DrawCounts,
        viewport: SceneViewport,
        clear: [f32; 4],
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: clear[0] as f64,
                        g: clear[1] as f64,
                        b: clear[2] as f64,
                        a: clear[3] as f64,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if viewport.width < 1.0 || viewport.height < 1.0 {
            return;
        }
        render_pass.set_viewport(
            viewport.x,
            viewport.y,
            viewport.width,
            viewport.height,
            0.0,
            1.0,
        );
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

        if counts.fill_vertices > 0 {
            render_pass.set_pipeline(&self.fill_pipeline);
            render_pass.set_vertex_buffer(0, self.fill_buffer.slice(..));
            render_pass.draw(0..counts.fill_vertices, 0..1);
        }

        if counts.line_vertices > 0 {
            render_pass.set_pipeline(&self.line_pipeline);
            render_pass.set_vertex_buffer(0, self.line_buffer.slice(..));
            render_pass.draw(0..counts.line_vertices, 0..1);
        }

        if counts.particles > 0 {
            render_pass.set_pipeline(&self.particle_pipeline);
            render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.particle_buffer.slice(..));
            render_pass.draw(0..6, 0..counts.particles);
        }
    }
}
