//! Sprint Capacity Engine
//!
//! This crate computes, for one sprint of an agile team, each member's total
//! and remaining work-hour capacity, net of time off and of work already
//! assigned to them, and produces a tabular snapshot for reporting.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
