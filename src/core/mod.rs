pub mod domain;
pub mod labels;
pub mod layout;
pub mod scale;
pub mod types;

pub use domain::{HEADROOM_RATIO, ValueDomain};
pub use labels::{format_axis_value, label_step, thinned_label_indices};
pub use layout::PlotLayout;
pub use scale::{IndexScale, LinearScale, TrendScales, scale};
pub use types::{PixelPoint, TrendInput, Viewport};
