//! Calendar domain model.
//!
//! # Responsibility
//! - Define the canonical records managed by the calendar core.
//! - Keep every cross-entity relationship as stable-id lists, never live
//!   references.
//!
//! # Invariants
//! - Every record is identified by a `Uuid`-backed id that is never reused.
//! - Events are owned solely by the calendar's event store; memos, series and
//!   alerts hold event ids only.

pub mod alert;
pub mod event;
pub mod memo;
pub mod series;
