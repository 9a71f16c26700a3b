/// One acquired swapchain image plus the encoder recording into it.
///
/// Short-lived: the surface texture must be submitted promptly or the next
/// acquisition blocks.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
