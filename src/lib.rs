//! hazard-score crate
//!
//! Scores workplace hazards as likelihood × severity on a 5×5 matrix and classifies the
//! result into four fixed bands: Low (1-4), Medium (5-9), High (10-16), and Very High
//! (17-25). Hazards still High or Very High after controls are flagged for a corrective
//! action.
//!
//! The [`scoring`] module is the pure core. Everything else loads hazard registers,
//! renders reports, and drives the `hazard-score` command line tool.

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod config;

#[doc(hidden)]
pub mod misc;

#[doc(hidden)]
pub mod records;

#[doc(hidden)]
pub mod reports;

pub mod scoring;

pub use commands::{Host, run};
