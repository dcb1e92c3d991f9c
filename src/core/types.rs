use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Position in surface pixel space, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One trend snapshot as delivered by the assessment backend.
///
/// `time_periods[i]` labels point `i` of the concatenation
/// `historical ++ projected`, so a well-formed input carries exactly one label
/// per point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendInput {
    pub historical: Vec<f64>,
    pub projected: Vec<f64>,
    pub time_periods: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AssessmentEnvelope {
    #[serde(default)]
    trend_analysis: Option<TrendAnalysis>,
}

#[derive(Debug, Deserialize)]
struct TrendAnalysis {
    trend_data: TrendInput,
}

impl TrendInput {
    #[must_use]
    pub fn new(
        historical: Vec<f64>,
        projected: Vec<f64>,
        time_periods: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            historical,
            projected,
            time_periods: time_periods.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a bare `{historical, projected, time_periods}` record.
    pub fn from_json(raw: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Extracts `trend_analysis.trend_data` from a risk-assessment response.
    ///
    /// Responses produced without trend analysis yield `Ok(None)`, which the
    /// chart renders as its empty state.
    pub fn from_assessment_json(raw: &str) -> ChartResult<Option<Self>> {
        let envelope: AssessmentEnvelope = serde_json::from_str(raw)?;
        Ok(envelope.trend_analysis.map(|analysis| analysis.trend_data))
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.historical.len() + self.projected.len()
    }

    /// Historical values followed by projected values, in temporal order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.historical.iter().chain(self.projected.iter()).copied()
    }

    /// Label count minus point count; zero for a well-formed input.
    #[must_use]
    pub fn label_mismatch(&self) -> isize {
        let labels = isize::try_from(self.time_periods.len()).unwrap_or(isize::MAX);
        let points = isize::try_from(self.point_count()).unwrap_or(isize::MAX);
        labels.saturating_sub(points)
    }

    /// Rejects values that cannot be mapped to pixel geometry.
    pub fn validate(&self) -> ChartResult<()> {
        for (series, values) in [
            ("historical", &self.historical),
            ("projected", &self.projected),
        ] {
            if let Some(index) = values.iter().position(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "{series} value at index {index} must be finite"
                )));
            }
        }
        Ok(())
    }
}
