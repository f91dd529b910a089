//! Shared GPU types and utilities used by the shape renderers.

use bytemuck::{Pod, Zeroable};

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: component,
        alpha: component,
    }
}

// ── camera uniform ────────────────────────────────────────────────────────

/// Column-major view-projection matrix (64 bytes, 16-byte aligned).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// Returns the `wgpu` minimum binding size for the camera uniform buffer.
pub(super) fn camera_ubo_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<CameraUniform>() as u64)
}

// ── point vertex ──────────────────────────────────────────────────────────

/// Scene-space vertex position.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct PointVertex {
    pub pos: [f32; 3],
}

impl PointVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// ── buffer growth ─────────────────────────────────────────────────────────

/// Capacity (in elements) to allocate when `required` exceeds the current one.
pub(super) fn grown_capacity(required: usize, min: usize) -> usize {
    required.next_power_of_two().max(min)
}
