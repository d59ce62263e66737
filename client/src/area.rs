use treatmon_protocol::Direction;

use crate::config::AreaConfig;

/// A rectangular grid the player walks through, starting at (0, 0)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    tier: u8,
    width: u32,
    height: u32,
    x: u32,
    y: u32,
}

impl Area {
    pub fn new(config: &AreaConfig) -> Self {
        Self {
            tier: config.tier,
            width: config.width,
            height: config.height,
            x: 0,
            y: 0,
        }
    }

    pub fn tier(&self) -> u8 {
        self.tier
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Move one cell. Returns false, without moving, at the grid edge.
    pub fn step(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        let nx = i64::from(self.x) + dx;
        let ny = i64::from(self.y) + dy;

        if nx < 0 || ny < 0 || nx >= i64::from(self.width) || ny >= i64::from(self.height) {
            tracing::debug!(x = self.x, y = self.y, direction = direction.as_str(), "Step blocked");
            return false;
        }

        self.x = nx as u32;
        self.y = ny as u32;
        true
    }
}
