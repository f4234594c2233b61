//! Business-operations engine for a small cafe.
//!
//! This crate provides attendance tracking, monthly payroll calculation
//! with salary-advance limits, and a materials/inventory costing ledger,
//! exposed over an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod costing;
pub mod error;
pub mod models;
pub mod payroll;
pub mod store;
