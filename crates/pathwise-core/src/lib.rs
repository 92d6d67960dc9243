//! pathwise-core: adaptive learning scoring, quizzes, and roster analysis.
//!
//! This crate defines the data model, the learning/engagement/risk
//! classifiers, quiz generation and grading, lesson content, and the
//! teacher-facing roster views that the pathwise CLI builds on.

pub mod alerts;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod content;
pub mod error;
pub mod feedback;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod report;
pub mod roster;
pub mod session;
