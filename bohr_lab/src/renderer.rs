//! GPU rendering of the projected cloud and the comparison charts
//!
//! Two pipelines over a shared pixel-space ortho uniform: instanced quads
//! for cloud points and the nucleus marker, a line list for chart frames
//! and density polylines.

use crate::constants::CURVE_R_MAX;
use crate::curves::DensityCurve;
use crate::projector::ProjectedPoint;
use common::{GraphicsContext, ScreenUniform, Viewport};
use wgpu::util::DeviceExt;

/// Nucleus marker color: red 255,80,80
pub const NUCLEUS_RED: [f32; 4] = [1.0, 0.314, 0.314, 1.0];
/// Bohr curve color: 255,80,80
pub const BOHR_RED: [f32; 4] = [1.0, 0.314, 0.314, 1.0];
/// Quantum curve color: 100,150,255
pub const QUANTUM_BLUE: [f32; 4] = [0.392, 0.588, 1.0, 1.0];
/// Chart frame color: #444444
pub const FRAME_GRAY: [f32; 4] = [0.267, 0.267, 0.267, 1.0];

/// Background: near-black blue, 5,5,10
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.04,
    a: 1.0,
};

/// Nucleus marker radius in pixels
const NUCLEUS_RADIUS: f32 = 6.0;
/// Half-extent of a cloud point quad in pixels
const POINT_RADIUS: f32 = 1.0;

/// Instance data for screen-space point quads
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 2],
    pub size: f32,
    pub color: [f32; 4],
}

impl PointInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        2 => Float32x2,  // position (pixels)
        3 => Float32,    // half-extent (pixels)
        4 => Float32x4,  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Quad corner for point billboards
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub corner: [f32; 2],
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

const QUAD_VERTICES: &[QuadVertex] = &[
    QuadVertex { corner: [-1.0, -1.0] },
    QuadVertex { corner: [1.0, -1.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [-1.0, -1.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [-1.0, 1.0] },
];

/// Line vertex for chart frames and curves
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl LineVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Pixel rectangle hosting one chart
#[derive(Debug, Clone, Copy)]
pub struct ChartRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Renderer for the laboratory scene
pub struct CloudRenderer {
    point_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    point_buffer: wgpu::Buffer,
    max_points: usize,

    line_pipeline: wgpu::RenderPipeline,
    line_buffer: wgpu::Buffer,
    max_line_vertices: usize,

    screen_buffer: wgpu::Buffer,
    screen_bind_group: wgpu::BindGroup,
}

impl CloudRenderer {
    pub fn new(ctx: &GraphicsContext, max_points: usize, max_line_vertices: usize) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Cloud Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/cloud.wgsl").into()),
        });

        let screen_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Screen Buffer"),
            size: std::mem::size_of::<ScreenUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let screen_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Screen Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Screen Bind Group"),
            layout: &screen_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Cloud Pipeline Layout"),
            bind_group_layouts: &[&screen_bind_group_layout],
            push_constant_ranges: &[],
        });

        let blend = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent::OVER,
        };

        let point_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Point Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_point",
                buffers: &[QuadVertex::layout(), PointInstance::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_point",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(blend),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_line",
                buffers: &[LineVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_line",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(blend),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Buffer"),
            contents: bytemuck::cast_slice(QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let point_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Point Instance Buffer"),
            size: (std::mem::size_of::<PointInstance>() * max_points) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let line_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Line Buffer"),
            size: (std::mem::size_of::<LineVertex>() * max_line_vertices) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            point_pipeline,
            quad_buffer,
            point_buffer,
            max_points,
            line_pipeline,
            line_buffer,
            max_line_vertices,
            screen_buffer,
            screen_bind_group,
        }
    }

    pub fn update_viewport(&self, queue: &wgpu::Queue, viewport: &Viewport) {
        let uniform = ScreenUniform::from_viewport(viewport);
        queue.write_buffer(&self.screen_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    pub fn update_points(&self, queue: &wgpu::Queue, points: &[PointInstance]) {
        let data = &points[..points.len().min(self.max_points)];
        queue.write_buffer(&self.point_buffer, 0, bytemuck::cast_slice(data));
    }

    pub fn update_lines(&self, queue: &wgpu::Queue, vertices: &[LineVertex]) {
        let data = &vertices[..vertices.len().min(self.max_line_vertices)];
        queue.write_buffer(&self.line_buffer, 0, bytemuck::cast_slice(data));
    }

    /// Clear the frame and draw the point instances
    pub fn render_points(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        num_points: u32,
        clear: bool,
    ) {
        let load_op = if clear {
            wgpu::LoadOp::Clear(CLEAR_COLOR)
        } else {
            wgpu::LoadOp::Load
        };

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Point Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: load_op,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.point_pipeline);
        render_pass.set_bind_group(0, &self.screen_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.point_buffer.slice(..));
        render_pass.draw(0..6, 0..num_points);
    }

    /// Draw chart frames and curves on top of the cloud
    pub fn render_lines(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        num_vertices: u32,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Line Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.line_pipeline);
        render_pass.set_bind_group(0, &self.screen_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.line_buffer.slice(..));
        render_pass.draw(0..num_vertices, 0..1);
    }
}

/// Convert the frame's projected points to instances
pub fn cloud_to_instances(points: &[ProjectedPoint]) -> Vec<PointInstance> {
    points
        .iter()
        .map(|p| {
            let [r, g, b] = p.color();
            PointInstance {
                position: [p.x as f32, p.y as f32],
                size: POINT_RADIUS,
                color: [
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    1.0,
                ],
            }
        })
        .collect()
}

/// Red marker at the cloud anchor
pub fn nucleus_instance(anchor: (i32, i32)) -> PointInstance {
    PointInstance {
        position: [anchor.0 as f32, anchor.1 as f32],
        size: NUCLEUS_RADIUS,
        color: NUCLEUS_RED,
    }
}

/// Build line-list vertices for one chart: a gray frame plus the density
/// polyline mapped into the rectangle (density 1.0 at the top edge).
pub fn chart_lines(rect: ChartRect, curve: &DensityCurve, color: [f32; 4]) -> Vec<LineVertex> {
    let mut vertices = Vec::with_capacity(8 + curve.samples.len().saturating_sub(1) * 2);

    let corners = [
        [rect.x, rect.y],
        [rect.x + rect.width, rect.y],
        [rect.x + rect.width, rect.y + rect.height],
        [rect.x, rect.y + rect.height],
    ];
    for i in 0..4 {
        for corner in [corners[i], corners[(i + 1) % 4]] {
            vertices.push(LineVertex {
                position: corner,
                color: FRAME_GRAY,
            });
        }
    }

    let to_pixel = |&(r, p): &(f32, f32)| {
        [
            rect.x + r / CURVE_R_MAX * rect.width,
            rect.y + rect.height - p.clamp(0.0, 1.0) * rect.height,
        ]
    };
    for pair in curve.samples.windows(2) {
        vertices.push(LineVertex {
            position: to_pixel(&pair[0]),
            color,
        });
        vertices.push(LineVertex {
            position: to_pixel(&pair[1]),
            color,
        });
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_lines_frame_plus_polyline() {
        let curve = DensityCurve {
            samples: vec![(0.0, 0.0), (12.5, 1.0), (25.0, 0.0)],
        };
        let rect = ChartRect {
            x: 100.0,
            y: 50.0,
            width: 400.0,
            height: 250.0,
        };
        let lines = chart_lines(rect, &curve, QUANTUM_BLUE);
        // 4 frame segments + 2 curve segments, 2 vertices each
        assert_eq!(lines.len(), 12);

        // unit density sits on the top edge, zero on the bottom
        assert_eq!(lines[8].position, [100.0, 300.0]);
        assert_eq!(lines[9].position, [300.0, 50.0]);
        assert_eq!(lines[11].position, [500.0, 300.0]);
    }

    #[test]
    fn cloud_instances_carry_depth_cue_color() {
        let points = [ProjectedPoint {
            x: 10,
            y: 20,
            brightness: 255,
        }];
        let instances = cloud_to_instances(&points);
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].position, [10.0, 20.0]);
        // blue channel always the strongest
        assert!(instances[0].color[2] >= instances[0].color[1]);
        assert!(instances[0].color[1] >= instances[0].color[0]);
    }
}
