//! Academy course catalog.
//!
//! Reads a course spreadsheet, normalizes its rows into courses, groups them
//! by knowledge zone and level section, and resolves tab/level selections.
//! The desktop browser (`academy-catalog`) and the JSON server
//! (`academy_api`) are thin shells over [`data::catalog::Catalog`].

pub mod api;
pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod progress;
pub mod state;
pub mod ui;
