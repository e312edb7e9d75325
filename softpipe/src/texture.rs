use mesh_shader::glam::{Vec2, Vec4};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    Nearest,
    #[default]
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressMode {
    #[default]
    Repeat,
    ClampToEdge,
}

/// Filtering and wrapping policy, the external configuration a combined
/// image sampler carries. Defaults match a linear/repeat sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sampler2d {
    pub filter: Filter,
    pub address_u: AddressMode,
    pub address_v: AddressMode,
}

/// Row-major, top-left origin, RGBA texels in [0, 1].
#[derive(Debug, Clone)]
pub struct Texture2d {
    width: u32,
    height: u32,
    texels: Vec<Vec4>,
}

impl Texture2d {
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyTexture { width, height });
        }
        let expected = width as u64 * height as u64 * 4;
        if bytes.len() as u64 != expected {
            return Err(Error::TextureSize {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        let texels = bytes
            .chunks_exact(4)
            .map(|px| {
                Vec4::new(
                    px[0] as f32 / 255.0,
                    px[1] as f32 / 255.0,
                    px[2] as f32 / 255.0,
                    px[3] as f32 / 255.0,
                )
            })
            .collect();
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// A 1x1 texture of a single color.
    pub fn solid(color: Vec4) -> Self {
        Self {
            width: 1,
            height: 1,
            texels: vec![color],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn get(&self, x: u32, y: u32) -> Vec4 {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.texels[(y * self.width + x) as usize]
    }

    pub fn sample(&self, sampler: Sampler2d, uv: Vec2) -> Vec4 {
        let apply_addr = |coord: f32, mode: AddressMode| match mode {
            AddressMode::ClampToEdge => coord.clamp(0.0, 1.0),
            AddressMode::Repeat => {
                let c = coord.fract();
                if c < 0.0 {
                    c + 1.0
                } else {
                    c
                }
            }
        };
        let u = apply_addr(uv.x, sampler.address_u);
        let v = apply_addr(uv.y, sampler.address_v);

        // Map [0, 1] to texel centers [0, size - 1].
        let fx = u * (self.width as f32 - 1.0);
        let fy = v * (self.height as f32 - 1.0);

        match sampler.filter {
            Filter::Nearest => {
                let x = (fx + 0.5).floor() as u32;
                let y = (fy + 0.5).floor() as u32;
                self.get(x, y)
            }
            Filter::Linear => {
                let x0 = fx.floor().clamp(0.0, (self.width - 1) as f32) as u32;
                let y0 = fy.floor().clamp(0.0, (self.height - 1) as f32) as u32;
                let x1 = (x0 + 1).min(self.width - 1);
                let y1 = (y0 + 1).min(self.height - 1);
                let tx = fx - fx.floor();
                let ty = fy - fy.floor();

                let c00 = self.get(x0, y0);
                let c10 = self.get(x1, y0);
                let c01 = self.get(x0, y1);
                let c11 = self.get(x1, y1);

                let cx0 = c00.lerp(c10, tx);
                let cx1 = c01.lerp(c11, tx);
                cx0.lerp(cx1, ty)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_shader::glam::vec2;

    const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);
    const WHITE: Vec4 = Vec4::ONE;

    fn black_white_2x1() -> Texture2d {
        Texture2d::from_rgba8(2, 1, &[0, 0, 0, 255, 255, 255, 255, 255]).unwrap()
    }

    fn nearest() -> Sampler2d {
        Sampler2d {
            filter: Filter::Nearest,
            ..Sampler2d::default()
        }
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(
            Texture2d::from_rgba8(0, 0, &[]).unwrap_err(),
            Error::EmptyTexture {
                width: 0,
                height: 0
            }
        ));
        assert!(matches!(
            Texture2d::from_rgba8(4, 0, &[]).unwrap_err(),
            Error::EmptyTexture { .. }
        ));
        assert!(matches!(
            Texture2d::from_rgba8(0, 4, &[]).unwrap_err(),
            Error::EmptyTexture { .. }
        ));
    }

    #[test]
    fn rejects_mismatched_byte_count() {
        let err = Texture2d::from_rgba8(2, 2, &[0; 12]).unwrap_err();
        assert!(matches!(
            err,
            Error::TextureSize {
                expected: 16,
                actual: 12,
                ..
            }
        ));
    }

    #[test]
    fn nearest_picks_closest_texel() {
        let tex = black_white_2x1();
        assert_eq!(tex.sample(nearest(), vec2(0.25, 0.0)), BLACK);
        assert_eq!(tex.sample(nearest(), vec2(0.75, 0.0)), WHITE);
    }

    #[test]
    fn repeat_wraps_by_fractional_part() {
        let tex = black_white_2x1();
        assert_eq!(tex.sample(nearest(), vec2(1.25, 0.0)), BLACK);
        assert_eq!(tex.sample(nearest(), vec2(-0.25, 0.0)), WHITE);
    }

    #[test]
    fn clamp_to_edge_pins_out_of_range_coordinates() {
        let tex = black_white_2x1();
        let samp = Sampler2d {
            filter: Filter::Nearest,
            address_u: AddressMode::ClampToEdge,
            address_v: AddressMode::ClampToEdge,
        };
        assert_eq!(tex.sample(samp, vec2(1.5, 0.0)), WHITE);
        assert_eq!(tex.sample(samp, vec2(-0.5, 0.0)), BLACK);
    }

    #[test]
    fn linear_filtering_blends_midpoint() {
        let tex = black_white_2x1();
        let samp = Sampler2d::default();
        let mid = tex.sample(samp, vec2(0.5, 0.0));
        assert_eq!(mid, Vec4::new(0.5, 0.5, 0.5, 1.0));
    }
}
