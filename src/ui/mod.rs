pub mod app;
pub mod birth_chart;
pub mod form_panel;
pub mod landing_panel;
pub mod results_panel;
pub mod theme;
