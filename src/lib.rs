//! FinanceScope - a terminal front-end for intelligent financial
//! document analysis.
//!
//! This snapshot is the startup skeleton: a credential gate over
//! `OPENAI_API_KEY` and the screen that reports its outcome. The
//! analysis pipeline arrives in a later milestone.
//!
//! The binary entry point is in main.rs.

pub mod app;
pub mod config;
pub mod gate;
pub mod input;
pub mod notice;
pub mod theme;
pub mod ui;
