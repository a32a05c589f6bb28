pub mod axis;
pub mod line_plot;
