//! Errors raised by the viewer shell.
//!
//! Rendering itself cannot fail; these cover the window system and file
//! output around it.

/// Viewer errors
#[derive(thiserror::Error, Debug)]
pub enum ViewerError {
    /// SDL reports failures as plain strings
    #[error("SDL error: {0}")]
    Sdl(String),

    /// PNG encoding or file IO
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Nothing to write
    #[error("Cannot export an empty {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },
}
