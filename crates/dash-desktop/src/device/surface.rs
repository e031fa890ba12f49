//! Swapchain selection helpers. Pure over capability lists so they can be
//! tested without a device.

pub(crate) fn choose_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = formats.first().copied()?;
    if !prefer_srgb {
        return Some(formats.iter().copied().find(|f| !f.is_srgb()).unwrap_or(first));
    }
    Some(formats.iter().copied().find(|f| f.is_srgb()).unwrap_or(first))
}

pub(crate) fn choose_present_mode(
    supported: &[wgpu::PresentMode],
    preferred: &[wgpu::PresentMode],
) -> wgpu::PresentMode {
    preferred
        .iter()
        .copied()
        .find(|m| supported.contains(m))
        .unwrap_or(wgpu::PresentMode::Fifo)
}

/// Opaque when offered; the window never shows through the bars.
pub(crate) fn choose_alpha_mode(supported: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if supported.contains(&wgpu::CompositeAlphaMode::Opaque) {
        return wgpu::CompositeAlphaMode::Opaque;
    }
    supported.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
}
