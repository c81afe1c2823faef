//! Result packaging: the flat result row and the plot series

pub mod plots;
pub mod row;

pub use plots::{build_plots, PlotSeries, PlotStyle, PLOT_LABELS};
pub use row::{ResultRow, COLUMNS};
