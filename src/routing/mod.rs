//! Route-based access control.
//!
//! DESIGN
//! ======
//! `table` holds the immutable path → view mapping; `guard` decides each
//! navigation from that table and the session flag. Neither depends on the
//! Leptos runtime, so both are tested as plain functions.

pub mod guard;
pub mod table;
