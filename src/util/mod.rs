//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate router/browser glue from page logic to improve
//! reuse and testability.

pub mod navigation;
