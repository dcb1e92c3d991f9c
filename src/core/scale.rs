use crate::core::domain::ValueDomain;
use crate::core::layout::PlotLayout;
use crate::core::types::PixelPoint;

/// Maps `value` from `[domain_min, domain_max]` onto `[range_start, range_end]`.
///
/// A collapsed domain (`domain_min == domain_max`) maps every value to
/// `range_start`.
#[must_use]
pub fn scale(value: f64, domain_min: f64, domain_max: f64, range_start: f64, range_end: f64) -> f64 {
    let span = domain_max - domain_min;
    if span == 0.0 {
        return range_start;
    }
    range_start + (value - domain_min) / span * (range_end - range_start)
}

/// Forward-only linear mapping from values to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: ValueDomain,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: ValueDomain, range_start: f64, range_end: f64) -> Self {
        Self {
            domain,
            range_start,
            range_end,
        }
    }

    /// Vertical scale for `layout`: larger values map to smaller pixel-y.
    #[must_use]
    pub fn vertical(domain: ValueDomain, layout: PlotLayout) -> Self {
        Self::new(domain, layout.plot_bottom(), layout.plot_top())
    }

    #[must_use]
    pub fn domain(self) -> ValueDomain {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        scale(
            value,
            self.domain.min,
            self.domain.max,
            self.range_start,
            self.range_end,
        )
    }
}

/// Evenly spaced x positions for point indices across the plot width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexScale {
    origin: f64,
    step: f64,
}

impl IndexScale {
    /// First point sits on the left plot edge, the last on the right edge.
    ///
    /// With fewer than two points there is no spacing to distribute and the
    /// step is zero.
    #[must_use]
    pub fn for_points(point_count: usize, layout: PlotLayout) -> Self {
        let step = if point_count > 1 {
            layout.plot_width / (point_count - 1) as f64
        } else {
            0.0
        };
        Self {
            origin: layout.plot_left(),
            step,
        }
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn x_for(self, index: usize) -> f64 {
        self.origin + index as f64 * self.step
    }
}

/// The pair of scales shared by every renderer in one draw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendScales {
    pub x: IndexScale,
    pub y: LinearScale,
}

impl TrendScales {
    #[must_use]
    pub fn new(layout: PlotLayout, domain: ValueDomain, point_count: usize) -> Self {
        Self {
            x: IndexScale::for_points(point_count, layout),
            y: LinearScale::vertical(domain, layout),
        }
    }

    #[must_use]
    pub fn point(self, index: usize, value: f64) -> PixelPoint {
        PixelPoint::new(self.x.x_for(index), self.y.map(value))
    }
}
