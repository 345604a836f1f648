/// Decoding encoded image bytes into premultiplied pixels.
pub mod decode;
