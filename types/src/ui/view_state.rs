//! UI options shared by the engine and the renderer.

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for arrows and bullets.
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Disable smooth scrolling.
    pub reduced_motion: bool,
}
