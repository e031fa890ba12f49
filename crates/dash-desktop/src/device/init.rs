/// Options for bringing up the GPU layer.
///
/// Defaults target the widest range of adapters: no optional features,
/// downlevel limits, vsync on.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Present with vsync (`Fifo`). When off, the lowest-latency mode the
    /// surface supports is used instead.
    pub vsync: bool,

    /// Prefer an sRGB swapchain format.
    ///
    /// The canvas holds sRGB bytes; an sRGB target keeps them unchanged on
    /// screen.
    pub prefer_srgb: bool,

    pub power_preference: wgpu::PowerPreference,

    /// Hint only; honoured where the backend supports it.
    pub desired_maximum_frame_latency: u32,
}

impl GpuInit {
    /// Present modes in order of preference.
    pub(crate) fn present_modes(&self) -> &'static [wgpu::PresentMode] {
        if self.vsync {
            &[wgpu::PresentMode::Fifo]
        } else {
            &[
                wgpu::PresentMode::Mailbox,
                wgpu::PresentMode::Immediate,
                wgpu::PresentMode::Fifo,
            ]
        }
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            vsync: true,
            prefer_srgb: true,
            power_preference: wgpu::PowerPreference::LowPower,
            desired_maximum_frame_latency: 2,
        }
    }
}
