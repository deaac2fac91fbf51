//! Aggregate statistics shown under the canvas

/// Count and combined area of the live shapes
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct FrameStats {
    pub shape_count: usize,
    pub total_area: f32,
}

impl FrameStats {
    /// Total area rounded to the nearest square pixel
    pub fn total_area_rounded(&self) -> u64 {
        self.total_area.round() as u64
    }
}
