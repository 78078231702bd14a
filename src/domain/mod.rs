//! Domain aggregates shared by the sorting core and the web layer.

pub mod client;
pub mod sort;
pub mod sort_editor;
pub mod types;
