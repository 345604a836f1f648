/// Painting a [`FrameLayout`](crate::FrameLayout) into a surface.
pub mod compositor;
/// Resizable raster target.
pub mod surface;
