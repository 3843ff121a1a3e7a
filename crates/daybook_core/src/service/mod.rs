//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into calendar-level operations.
//! - Keep presentation/persistence collaborators decoupled from arena
//!   details.

pub mod calendar;
