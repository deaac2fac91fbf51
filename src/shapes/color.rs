//! Shape colors

use rand::Rng;

/// Fill color as a packed 0xRRGGBB value
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ShapeColor(pub u32);

impl ShapeColor {
    /// The fixed spawn palette
    pub const PALETTE: [ShapeColor; 7] = [
        ShapeColor(0xff6b6b), // Coral
        ShapeColor(0x4ecdc4), // Teal
        ShapeColor(0x45b7d1), // Sky
        ShapeColor(0x96ceb4), // Sage
        ShapeColor(0xfeca57), // Mustard
        ShapeColor(0xff9ff3), // Pink
        ShapeColor(0x54a0ff), // Blue
    ];

    /// Pick a palette color uniformly at random
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::PALETTE[rng.gen_range(0..Self::PALETTE.len())]
    }

    pub fn r(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(&self) -> u8 {
        self.0 as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_channels() {
        let color = ShapeColor(0xfeca57);
        assert_eq!((color.r(), color.g(), color.b()), (0xfe, 0xca, 0x57));
    }

    #[test]
    fn test_random_from_palette() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(ShapeColor::PALETTE.contains(&ShapeColor::random(&mut rng)));
        }
    }
}
