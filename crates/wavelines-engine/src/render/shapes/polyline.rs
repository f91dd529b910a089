use std::ops::Range;
use std::sync::Arc;

use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{
    camera_ubo_min_binding_size, grown_capacity, premul_alpha_blend, CameraUniform, PointVertex,
};

/// Renderer for `DrawCmd::Polyline`.
///
/// Each polyline is drawn as a one-pixel line strip. Offset and color are
/// per-instance attributes, so commands sharing one point buffer (same `Arc`)
/// upload their vertices once and differ only in the instance they draw.
#[derive(Default)]
pub struct PolylineRenderer {
    pipeline_key: Option<(wgpu::TextureFormat, u32)>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    camera_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

impl PolylineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws every polyline in `draw_list`, transformed by `view_proj`
    /// (column-major).
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
        view_proj: [[f32; 4]; 4],
    ) {
        let batch = PolylineBatch::build(draw_list);
        if batch.draws.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.ensure_vertex_capacity(ctx, batch.vertices.len());
        self.ensure_instance_capacity(ctx, batch.instances.len());

        let Some(camera_ubo) = self.camera_ubo.as_ref() else { return };
        let Some(vertex_vbo) = self.vertex_vbo.as_ref() else { return };
        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        ctx.queue.write_buffer(camera_ubo, 0, bytemuck::bytes_of(&CameraUniform { view_proj }));
        ctx.queue.write_buffer(vertex_vbo, 0, bytemuck::cast_slice(&batch.vertices));
        ctx.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(&batch.instances));

        let color_attachment = target.color_attachment(None);
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("wavelines polyline pass"),
            color_attachments: &[Some(color_attachment)],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vertex_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));

        for (i, range) in batch.draws.iter().enumerate() {
            let i = i as u32;
            rpass.draw(range.clone(), i..i + 1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        let key = (ctx.surface_format, ctx.sample_count);
        if self.pipeline_key == Some(key) && self.pipeline.is_some() {
            return;
        }

        log::debug!(
            "building polyline pipeline for {:?} at {}x MSAA",
            ctx.surface_format,
            ctx.sample_count
        );

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("wavelines polyline shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/polyline.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("wavelines polyline bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: camera_ubo_min_binding_size(),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("wavelines polyline pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("wavelines polyline pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[PointVertex::layout(), LineInstance::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: ctx.sample_count,
                ..Default::default()
            },
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_key = Some(key);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.camera_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.camera_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let camera_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("wavelines polyline camera ubo"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("wavelines polyline bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_ubo.as_entire_binding(),
            }],
        });

        self.camera_ubo = Some(camera_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return;
        }
        let new_cap = grown_capacity(required, 256);
        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("wavelines polyline vertex vbo"),
            size: (new_cap * std::mem::size_of::<PointVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }
        let new_cap = grown_capacity(required, 16);
        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("wavelines polyline instance vbo"),
            size: (new_cap * std::mem::size_of::<LineInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

// ── CPU batching ──────────────────────────────────────────────────────────

/// Vertex/instance data for one frame of polylines, in paint order.
///
/// `draws[i]` is the vertex range drawn with instance `i`.
#[derive(Debug, Default)]
struct PolylineBatch {
    vertices: Vec<PointVertex>,
    instances: Vec<LineInstance>,
    draws: Vec<Range<u32>>,
}

impl PolylineBatch {
    fn build(draw_list: &DrawList) -> Self {
        let mut batch = Self::default();
        let mut last: Option<(Arc<[[f32; 3]]>, Range<u32>)> = None;

        for item in draw_list.items() {
            let DrawCmd::Polyline(cmd) = item;
            if !cmd.is_drawable() {
                continue;
            }

            let range = match &last {
                Some((points, range)) if Arc::ptr_eq(points, &cmd.points) => range.clone(),
                _ => {
                    let start = batch.vertices.len() as u32;
                    batch
                        .vertices
                        .extend(cmd.points.iter().map(|&pos| PointVertex { pos }));
                    let range = start..batch.vertices.len() as u32;
                    last = Some((cmd.points.clone(), range.clone()));
                    range
                }
            };

            batch.instances.push(LineInstance {
                offset: cmd.offset.to_array(),
                color: cmd.color.to_array(),
            });
            batch.draws.push(range);
        }

        batch
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (24 bytes):
///
///  offset  0  offset  [f32; 2]   loc 1
///  offset  8  color   [f32; 4]   loc 2
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct LineInstance {
    offset: [f32; 2],
    color: [f32; 4],
}

impl LineInstance {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        1 => Float32x2, // offset
        2 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
