/// One acquired swapchain image plus the encoder recording into it.
///
/// Short-lived: hand it back to [`Gpu::submit`](super::Gpu::submit) in the
/// same redraw. Holding it blocks acquisition of the next image.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl GpuFrame {
    /// Size of the acquired image in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        let t = &self.surface_texture.texture;
        (t.width(), t.height())
    }
}
