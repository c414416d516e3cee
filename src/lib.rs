//! Side-by-side size comparison of celestial bodies.
//!
//! Bodies picked from a catalog are drawn left to right as shaded discs
//! sharing one pixel-per-km scale, chosen so the largest body spans 70% of
//! the viewport height.

pub mod app;
pub mod catalog;
pub mod color;
pub mod config;
pub mod display_list;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod scale;
pub mod session;
pub mod viewport;

pub use error::{ComparatorError, Result};

#[cfg(test)]
mod catalog_test;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod scale_test;
