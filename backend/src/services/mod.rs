pub mod presentations;
pub mod templates;
pub mod uploads;
