/// Surface and device options for [`Gpu::new`](super::Gpu::new).
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format if there is one.
    ///
    /// Turn off to write colours to the screen as given (no linear-to-sRGB
    /// encoding on store).
    pub prefer_srgb: bool,

    pub present_mode: wgpu::PresentMode,

    /// Ignored when the surface does not support it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,

    /// Hint passed through to the surface configuration.
    pub desired_maximum_frame_latency: u32,

    /// MSAA samples per pixel. Drops to 1 when the adapter cannot multisample
    /// the surface format at this count.
    pub sample_count: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            sample_count: 4,
        }
    }
}
