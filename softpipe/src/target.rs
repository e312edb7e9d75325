use mesh_shader::glam::Vec4;

/// Color attachment: one Vec4 per pixel, row-major, top-left origin.
#[derive(Debug, Clone)]
pub struct RenderTarget {
    width: u32,
    height: u32,
    color: Vec<Vec4>,
}

impl RenderTarget {
    pub fn new(width: u32, height: u32, clear: Vec4) -> Self {
        Self {
            width,
            height,
            color: vec![clear; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, clear: Vec4) {
        self.color.fill(clear);
    }

    pub fn get(&self, x: u32, y: u32) -> Vec4 {
        self.color[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, c: Vec4) {
        self.color[(y * self.width + x) as usize] = c;
    }

    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity((self.width * self.height * 4) as usize);
        for c in &self.color {
            let c = c.clamp(Vec4::ZERO, Vec4::ONE);
            out.extend_from_slice(&[
                (c.x * 255.0).round() as u8,
                (c.y * 255.0).round() as u8,
                (c.z * 255.0).round() as u8,
                (c.w * 255.0).round() as u8,
            ]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_overwrites_every_pixel() {
        let mut target = RenderTarget::new(4, 3, Vec4::ZERO);
        target.set(2, 1, Vec4::ONE);
        target.clear(Vec4::new(0.0, 0.0, 1.0, 1.0));
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(target.get(x, y), Vec4::new(0.0, 0.0, 1.0, 1.0));
            }
        }
    }

    #[test]
    fn rgba8_output_is_clamped() {
        let mut target = RenderTarget::new(1, 1, Vec4::ZERO);
        target.set(0, 0, Vec4::new(2.0, -1.0, 0.5, 1.0));
        assert_eq!(target.to_rgba8(), vec![255, 0, 128, 255]);
    }
}
