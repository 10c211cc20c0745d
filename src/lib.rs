//! Laptop catalogue browser: CSV loading, checkbox facet filtering and an
//! egui front end.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;

pub use data::facet::{Facet, FacetSelection};
pub use data::filter::{filter, filtered_indices};
pub use data::model::{Dataset, Record};
pub use data::parser::parse;
pub use error::LoadError;
