use log::debug;
use mesh_shader::glam::{Vec2, Vec3, Vec4};
use mesh_shader::{vert_main, DrawConstants, SceneUniform, Vertex};

use crate::target::RenderTarget;
use crate::texture::{Sampler2d, Texture2d};

#[derive(Debug, Clone, Copy)]
struct ScreenVertex {
    pos: Vec2,
    inv_w: f32,
    color: Vec3,
    uv: Vec2,
}

/// Fragment-stage rule: a texture lookup and nothing else. The interpolated
/// vertex color is carried through the interface but does not contribute to
/// the output.
pub fn shade(texture: &Texture2d, sampler: Sampler2d, color: Vec3, uv: Vec2) -> Vec4 {
    let _ = color;
    texture.sample(sampler, uv)
}

fn to_screen(width: u32, height: u32, clip: Vec4, color: Vec3, uv: Vec2) -> ScreenVertex {
    let inv_w = 1.0 / clip.w;
    let ndc_x = clip.x * inv_w;
    let ndc_y = clip.y * inv_w;
    ScreenVertex {
        pos: Vec2::new(
            (ndc_x * 0.5 + 0.5) * width as f32,
            (-ndc_y * 0.5 + 0.5) * height as f32,
        ),
        inv_w,
        color,
        uv,
    }
}

fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Draw a triangle list through the mesh shader stages: one `vert_main`
/// invocation per vertex, then rasterization with perspective-correct
/// interpolation of the two varyings, then the fragment rule per covered
/// pixel. No blending and no depth test; later triangles overwrite.
pub fn draw(
    target: &mut RenderTarget,
    scene: &SceneUniform,
    push: &DrawConstants,
    vertices: &[Vertex],
    texture: &Texture2d,
    sampler: Sampler2d,
) {
    debug!("drawing {} triangles", vertices.len() / 3);
    let (width, height) = (target.width(), target.height());
    for tri in vertices.chunks_exact(3) {
        let run_stage = |v: &Vertex| {
            let mut clip = Vec4::ZERO;
            let mut color = Vec3::ZERO;
            let mut uv = Vec2::ZERO;
            vert_main(
                v.position,
                v.color,
                v.texture_uv,
                scene,
                push,
                &mut clip,
                &mut color,
                &mut uv,
            );
            to_screen(width, height, clip, color, uv)
        };
        let a = run_stage(&tri[0]);
        let b = run_stage(&tri[1]);
        let c = run_stage(&tri[2]);
        rasterize_triangle(target, &a, &b, &c, texture, sampler);
    }
}

fn rasterize_triangle(
    target: &mut RenderTarget,
    a: &ScreenVertex,
    b: &ScreenVertex,
    c: &ScreenVertex,
    texture: &Texture2d,
    sampler: Sampler2d,
) {
    let min_x = a.pos.x.min(b.pos.x).min(c.pos.x).floor().max(0.0) as i32;
    let max_x = a
        .pos
        .x
        .max(b.pos.x)
        .max(c.pos.x)
        .ceil()
        .min(target.width() as f32 - 1.0) as i32;
    let min_y = a.pos.y.min(b.pos.y).min(c.pos.y).floor().max(0.0) as i32;
    let max_y = a
        .pos
        .y
        .max(b.pos.y)
        .max(c.pos.y)
        .ceil()
        .min(target.height() as f32 - 1.0) as i32;

    let area = edge(a.pos, b.pos, c.pos);
    if area.abs() < f32::EPSILON {
        return;
    }

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

            let w0 = edge(b.pos, c.pos, p);
            let w1 = edge(c.pos, a.pos, p);
            let w2 = edge(a.pos, b.pos, p);

            // Inside test accepting either winding.
            let inside = (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0)
                || (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0);
            if !inside {
                continue;
            }

            let b0 = w0 / area;
            let b1 = w1 / area;
            let b2 = w2 / area;

            // Perspective-correct interpolation of the varyings.
            let inv_w = (a.inv_w * b0 + b.inv_w * b1 + c.inv_w * b2).max(f32::EPSILON);
            let w = 1.0 / inv_w;
            let color =
                (a.color * a.inv_w * b0 + b.color * b.inv_w * b1 + c.color * c.inv_w * b2) * w;
            let uv = (a.uv * a.inv_w * b0 + b.uv * b.inv_w * b1 + c.uv * c.inv_w * b2) * w;

            let out = shade(texture, sampler, color, uv);
            target.set(x as u32, y as u32, out);
        }
    }
}
