use serde::{Deserialize, Serialize};

use crate::core::types::TrendInput;

/// Multiplier applied to the domain maximum so the highest point does not
/// touch the top edge of the plot.
pub const HEADROOM_RATIO: f64 = 1.1;

/// Value range covered by the y-axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Domain spanning `values` and the zero baseline, with headroom above.
    ///
    /// Non-finite values are ignored. An empty set yields the collapsed
    /// domain `[0, 0]`.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold((0.0_f64, 0.0_f64), |(min, max), value| {
                (min.min(value), max.max(value))
            });
        Self {
            min,
            max: max * HEADROOM_RATIO,
        }
    }

    #[must_use]
    pub fn from_input(input: &TrendInput) -> Self {
        Self::from_values(input.values())
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_collapsed(self) -> bool {
        self.span() == 0.0
    }

    /// Value at tick `index` of `intervals` equal subdivisions; `index` runs
    /// `0..=intervals`.
    #[must_use]
    pub fn tick_value(self, index: usize, intervals: usize) -> f64 {
        if intervals == 0 {
            return self.min;
        }
        self.min + index as f64 / intervals as f64 * self.span()
    }
}
