//! Kora: Catalog Filtering and Map-Focus Engine
//!
//! A headless interaction engine for cultural-heritage collections:
//! record stores, composable filter predicates, and a selection/focus
//! state machine that drives external map, panorama, and speech
//! collaborators through command ports.

pub mod calendar;
pub mod chat;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod focus;
pub mod geo;
pub mod logging;
pub mod record;
pub mod session;
pub mod store;
pub mod tour;
pub mod types;

pub use error::{Error, Result};
