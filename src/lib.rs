//! Bounded-buffer scoring pipeline
//!
//! A batch of [`scoring::Item`]s is pushed through a bounded buffer to a
//! pool of worker threads; accepted results are collected in ascending
//! score order and rendered as a fixed-width report.

pub mod app;
pub mod core;
pub mod input;
pub mod monitor;
pub mod pipeline;
pub mod report;
pub mod scoring;
