use crate::coords::Viewport;

/// Renderer-facing context (device/queue + surface format + viewport).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// MSAA sample count pipelines must be built for.
    pub sample_count: u32,
    pub viewport: Viewport, // logical px
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        sample_count: u32,
        viewport: Viewport,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            sample_count,
            viewport,
        }
    }
}

/// Target for drawing (encoder + color view, plus resolve view under MSAA).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    pub resolve_target: Option<&'a wgpu::TextureView>,
}

impl<'a> RenderTarget<'a> {
    /// Renders into `surface_view` directly, or into `msaa_view` resolving to
    /// `surface_view` when multisampling.
    #[inline]
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        surface_view: &'a wgpu::TextureView,
        msaa_view: Option<&'a wgpu::TextureView>,
    ) -> Self {
        match msaa_view {
            Some(msaa) => Self {
                encoder,
                color_view: msaa,
                resolve_target: Some(surface_view),
            },
            None => Self {
                encoder,
                color_view: surface_view,
                resolve_target: None,
            },
        }
    }

    /// Color attachment for a pass that keeps (`None`) or clears (`Some`) the
    /// current contents.
    pub fn color_attachment(&self, clear: Option<wgpu::Color>) -> wgpu::RenderPassColorAttachment<'a> {
        wgpu::RenderPassColorAttachment {
            view: self.color_view,
            resolve_target: self.resolve_target,
            ops: wgpu::Operations {
                load: match clear {
                    Some(c) => wgpu::LoadOp::Clear(c),
                    None => wgpu::LoadOp::Load,
                },
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        }
    }
}
