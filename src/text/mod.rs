/// Parley-backed [`TextLayoutEngine`](crate::TextLayoutEngine).
pub mod engine;
