//! Chart drawing parameters.
//!
//! [`ChartSettings`] groups the static parameters that renderers need to
//! lay out the radar chart. These are application-layer concerns, not domain
//! policy: the chart model itself carries no pixel sizes.

use serde::{Deserialize, Serialize};

/// Chart canvas and text parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Font size in pixels for axis labels.
    pub font_size: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 700,
            height: 500,
            font_size: 12,
        }
    }
}

impl ChartSettings {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }
}
