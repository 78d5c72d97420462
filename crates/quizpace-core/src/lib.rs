//! quizpace-core — Adaptive quiz scoring and level progression.
//!
//! This crate is the computational heart of the quizpace platform: it turns a
//! batch of answered questions and the level a quiz was served at into a
//! performance score, a rating label, and a recommended next level, plus the
//! cross-attempt aggregates built on top of those. Everything is synchronous
//! pure computation; persistence and transport live in the layers around it.

pub mod error;
pub mod model;
pub mod report;
pub mod scoring;
pub mod statistics;
