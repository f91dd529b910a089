/// What the frame loop should do after failing to acquire a surface texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Lost or outdated surface; configured again, redraw.
    Reconfigured,
    /// Timeout or a transient failure; drop this frame.
    SkipFrame,
    /// Out of memory; stop the event loop.
    Fatal,
}

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if caps.formats.is_empty() {
        return None;
    }

    let srgb_first = caps.formats.iter().copied().find(|f| f.is_srgb() == prefer_srgb);
    Some(srgb_first.unwrap_or(caps.formats[0]))
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Returns `requested` if the adapter can multisample `format` at that count,
/// otherwise 1.
pub(crate) fn choose_sample_count(
    adapter: &wgpu::Adapter,
    format: wgpu::TextureFormat,
    requested: u32,
) -> u32 {
    if requested <= 1 {
        return 1;
    }

    let flags = adapter.get_texture_format_features(format).flags;
    if flags.sample_count_supported(requested) {
        requested
    } else {
        log::warn!("{requested}x MSAA unsupported for {format:?}; rendering without multisampling");
        1
    }
}

/// Creates the multisampled color target matching the surface configuration.
///
/// Returns `None` when multisampling is off.
pub(crate) fn create_msaa_view(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    sample_count: u32,
) -> Option<wgpu::TextureView> {
    if sample_count <= 1 {
        return None;
    }

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("wavelines msaa color"),
        size: wgpu::Extent3d {
            width: config.width.max(1),
            height: config.height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format: config.format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });

    Some(texture.create_view(&wgpu::TextureViewDescriptor::default()))
}

pub(crate) fn map_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_and_outdated_surfaces_are_reconfigured() {
        assert_eq!(map_surface_error(&wgpu::SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(map_surface_error(&wgpu::SurfaceError::Outdated), SurfaceErrorAction::Reconfigured);
    }

    #[test]
    fn only_oom_is_fatal() {
        assert_eq!(map_surface_error(&wgpu::SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
        assert_eq!(map_surface_error(&wgpu::SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(map_surface_error(&wgpu::SurfaceError::Other), SurfaceErrorAction::SkipFrame);
    }
}
