//! Minimal software implementation of the pipeline surrounding the mesh
//! shader stages.
//!
//! This exists to make the vertex and fragment stages testable end to end
//! without requiring a GPU: it feeds real vertex records through the actual
//! `mesh_shader::vert_main` entry point, rasterizes the resulting triangles
//! with perspective-correct interpolation and applies the fragment-stage
//! formula per covered pixel. It is test tooling, not a renderer.

mod raster;
mod target;
mod texture;

pub use raster::{draw, shade};
pub use target::RenderTarget;
pub use texture::{AddressMode, Filter, Sampler2d, Texture2d};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("texture dimensions {width}x{height} are empty")]
    EmptyTexture { width: u32, height: u32 },
    #[error("texture data is {actual} bytes, expected {expected} for {width}x{height} rgba8")]
    TextureSize {
        width: u32,
        height: u32,
        expected: u64,
        actual: usize,
    },
}
