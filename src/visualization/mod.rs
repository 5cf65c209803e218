pub mod framebuffer;
pub mod vis2d;
