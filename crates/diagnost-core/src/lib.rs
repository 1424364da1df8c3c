//! diagnost-core — Diagnostic assessment engine.
//!
//! This crate defines the quiz data model, the single-pass scoring
//! algorithm, per-area classification, and the recommendation rules that
//! turn a learner's answers into a [`result::DiagnosticResult`].

pub mod area;
pub mod catalog;
pub mod error;
pub mod model;
pub mod parser;
pub mod progress;
pub mod recommend;
pub mod result;
pub mod scoring;
pub mod session;
