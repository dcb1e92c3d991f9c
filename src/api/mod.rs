mod axis_grid;
mod controller;
mod legend;
mod placeholder;
mod series;
mod style;
mod validation;

pub use axis_grid::{AxisGridContext, append_axis_and_grid};
pub use controller::{
    DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH, RenderState, TrendChart, TrendChartProps,
    build_frame, render,
};
pub use legend::append_legend;
pub use placeholder::{append_empty_placeholder, append_loading_placeholder};
pub use series::{SeriesGeometry, append_series, project_series};
pub use style::{
    ACCENT_RED, AxisStyle, LegendStyle, PRIMARY_BLUE, PlaceholderStyle, SeriesStyle,
    TrendChartStyle,
};
