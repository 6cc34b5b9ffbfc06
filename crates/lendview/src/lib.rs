//! Core library for the loan application review dashboard.
//!
//! The deployable HTTP service lives in `services/api`; the risk scoring,
//! field access policy, and table query pipeline live here under
//! [`dashboard`].

pub mod config;
pub mod dashboard;
pub mod error;
pub mod telemetry;
