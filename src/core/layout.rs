use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;

pub const MARGIN_TOP: f64 = 20.0;
pub const MARGIN_RIGHT: f64 = 30.0;
pub const MARGIN_BOTTOM: f64 = 30.0;
pub const MARGIN_LEFT: f64 = 40.0;

/// Plot area carved out of the surface by fixed margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub plot_width: f64,
    pub plot_height: f64,
}

impl PlotLayout {
    /// Surfaces smaller than the margins produce an empty plot area.
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        Self {
            margin_top: MARGIN_TOP,
            margin_right: MARGIN_RIGHT,
            margin_bottom: MARGIN_BOTTOM,
            margin_left: MARGIN_LEFT,
            plot_width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0),
            plot_height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0),
        }
    }

    #[must_use]
    pub fn plot_left(self) -> f64 {
        self.margin_left
    }

    #[must_use]
    pub fn plot_right(self) -> f64 {
        self.margin_left + self.plot_width
    }

    #[must_use]
    pub fn plot_top(self) -> f64 {
        self.margin_top
    }

    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        self.margin_top + self.plot_height
    }
}
