pub mod birth_chart;
pub mod profile;
pub mod reading;
