use super::node::Position;

/// Fixed grid parameters for placing nodes in emission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub step_x: f64,
    pub wrap_x: f64,
    pub row_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            step_x: 250.0,
            wrap_x: 1000.0,
            row_height: 150.0,
        }
    }
}

/// Row-major cursor. Positions depend only on how many nodes were placed before.
#[derive(Debug, Clone)]
pub struct LayoutCursor {
    config: LayoutConfig,
    x: f64,
    y: f64,
}

impl LayoutCursor {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Returns the position for the next node and advances the cursor.
    pub fn next_position(&mut self) -> Position {
        let position = Position {
            x: self.x,
            y: self.y,
        };
        self.x += self.config.step_x;
        if self.x > self.config.wrap_x {
            self.x = 0.0;
            self.y += self.config.row_height;
        }
        position
    }
}
