use glam::Vec3;
use rand::prelude::*;

use crate::constants::{SCATTER_HALF_EXTENT, SCATTER_MAX_OPACITY};

/// Fixed-capacity position/opacity slots uploaded to the GPU every frame.
///
/// The slot vectors are sized once in [`VisualBuffer::new`] and never grow or
/// shrink; the cycler overwrites them in place.
#[derive(Clone, Debug)]
pub struct VisualBuffer {
    positions: Vec<Vec3>,
    opacities: Vec<f32>,
}

impl VisualBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; capacity],
            opacities: vec![0.0; capacity],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn opacities(&self) -> &[f32] {
        &self.opacities
    }

    #[inline]
    pub fn write(&mut self, slot: usize, position: Vec3, opacity: f32) {
        self.positions[slot] = position;
        self.opacities[slot] = opacity;
    }

    /// Fill every slot with a random point on the z=0 plane and a dim random
    /// opacity, so the pool is visible before the first cycle.
    pub fn scatter(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for (pos, alpha) in self.positions.iter_mut().zip(self.opacities.iter_mut()) {
            *pos = Vec3::new(
                rng.gen_range(-SCATTER_HALF_EXTENT..SCATTER_HALF_EXTENT),
                rng.gen_range(-SCATTER_HALF_EXTENT..SCATTER_HALF_EXTENT),
                0.0,
            );
            *alpha = rng.gen_range(0.0..SCATTER_MAX_OPACITY);
        }
    }

    /// Raw bytes of the position slots, laid out as tightly packed `vec3<f32>`.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn opacity_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.opacities)
    }
}
