pub mod canvas_renderer;

// Re-export for convenient access
pub use canvas_renderer::CanvasRenderer;
