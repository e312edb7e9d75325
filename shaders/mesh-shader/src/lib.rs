//! Vertex and fragment stages of the textured-mesh pass, plus the interface
//! types shared with the host side. Both stages are pure, per-invocation
//! functions; everything stateful (buffers, descriptors, draw submission)
//! lives with the caller.

#![cfg_attr(target_arch = "spirv", no_std)]

pub use spirv_std::glam;

use spirv_std::glam::{Mat4, Vec2, Vec3, Vec4};
use spirv_std::image::{Image2d, SampledImage};
use spirv_std::spirv;

/// Numeric locations and binding indices agreed with the pipeline setup.
/// These must match the vertex input attributes, descriptor set layout and
/// push constant range the host declares.
pub mod layout {
    pub const POSITION_LOCATION: u32 = 0;
    pub const COLOR_LOCATION: u32 = 1;
    pub const TEXTURE_UV_LOCATION: u32 = 2;

    pub const VARYING_COLOR_LOCATION: u32 = 0;
    pub const VARYING_TEXTURE_UV_LOCATION: u32 = 1;

    pub const SCENE_UNIFORM_BINDING: u32 = 0;
    pub const TEXTURE_SAMPLER_BINDING: u32 = 1;

    /// Size of the vertex-stage push constant range.
    pub const DRAW_CONSTANTS_SIZE: u32 = core::mem::size_of::<super::DrawConstants>() as u32;
}

/// One input vertex record.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    not(target_arch = "spirv"),
    derive(bytemuck::Pod, bytemuck::Zeroable)
)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Vec3,
    pub texture_uv: Vec2,
}

impl Vertex {
    pub fn new(position: Vec3, color: Vec3, texture_uv: Vec2) -> Self {
        Self {
            position,
            color,
            texture_uv,
        }
    }
}

/// Frame-constant block, bound once per frame at binding 0.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    not(target_arch = "spirv"),
    derive(bytemuck::Pod, bytemuck::Zeroable)
)]
pub struct SceneUniform {
    pub view: Mat4,
    pub projection: Mat4,
}

impl SceneUniform {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self { view, projection }
    }
}

impl Default for SceneUniform {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }
}

/// Per-draw constants, supplied through the push constant path.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    not(target_arch = "spirv"),
    derive(bytemuck::Pod, bytemuck::Zeroable)
)]
pub struct DrawConstants {
    pub model: Mat4,
}

impl DrawConstants {
    pub fn new(model: Mat4) -> Self {
        Self { model }
    }
}

impl Default for DrawConstants {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
        }
    }
}

/// Object space to clip space. The order is fixed: model first, then view,
/// then projection. The position is a point, so w = 1.
pub fn world_to_clip(scene: &SceneUniform, draw: &DrawConstants, position: Vec3) -> Vec4 {
    scene.projection * scene.view * draw.model * position.extend(1.0)
}

#[spirv(vertex)]
pub fn vert_main(
    position: Vec3,
    color: Vec3,
    texture_uv: Vec2,
    #[spirv(uniform, descriptor_set = 0, binding = 0)] scene: &SceneUniform,
    #[spirv(push_constant)] draw: &DrawConstants,
    #[spirv(position)] clip_position: &mut Vec4,
    out_color: &mut Vec3,
    out_texture_uv: &mut Vec2,
) {
    *clip_position = world_to_clip(scene, draw, position);
    *out_color = color;
    *out_texture_uv = texture_uv;
}

#[spirv(fragment)]
pub fn frag_main(
    color: Vec3,
    texture_uv: Vec2,
    #[spirv(descriptor_set = 0, binding = 1)] texture: &SampledImage<Image2d>,
    out_color: &mut Vec4,
) {
    // The interpolated vertex color is part of the interface but does not
    // take part in the output formula.
    let _ = color;
    *out_color = unsafe { texture.sample(texture_uv) };
}
