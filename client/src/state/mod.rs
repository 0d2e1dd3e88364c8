//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the framework-free store and its invariants;
//! `session_context` adapts it to Leptos signals and context.

pub mod session;
pub mod session_context;
