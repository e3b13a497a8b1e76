/// Errors from GPU and atlas setup. All of them are fatal to the game.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("failed to create window surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
    #[error("failed to decode texture atlas: {0}")]
    Image(#[from] image::ImageError),
    #[error("atlas is {width}x{height}, which does not split into a 4x4 sprite grid")]
    AtlasDimensions { width: u32, height: u32 },
}
