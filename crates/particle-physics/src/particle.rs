//! Particle record and viewport bounds

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// A single disc in the simulation
/// Laid out for direct upload into a storage buffer
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// Position in viewport pixels
    pub position: [f32; 2],
    /// Velocity in pixels per frame
    pub velocity: [f32; 2],
    /// Disc radius
    pub radius: f32,
    /// RGBA color
    pub color: [u8; 4],
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: [u8; 4]) -> Self {
        Self {
            position: position.to_array(),
            velocity: velocity.to_array(),
            radius,
            color,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        Vec2::from_array(self.velocity)
    }

    #[inline]
    pub fn set_pos(&mut self, position: Vec2) {
        self.position = position.to_array();
    }

    #[inline]
    pub fn set_vel(&mut self, velocity: Vec2) {
        self.velocity = velocity.to_array();
    }

    /// Speed in pixels per frame
    pub fn speed(&self) -> f32 {
        self.vel().length()
    }
}

/// Axis-aligned simulation region, anchored at the origin
///
/// Mirrors the current viewport. Resizing never moves particles directly;
/// anything left outside is pushed back by the next boundary pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Negative or non-finite extents collapse to zero
    pub fn new(width: f32, height: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True if a disc of `radius` centred at `position` lies fully inside
    pub fn contains_disc(&self, position: Vec2, radius: f32) -> bool {
        position.x >= radius
            && position.x <= self.width - radius
            && position.y >= radius
            && position.y <= self.height - radius
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
