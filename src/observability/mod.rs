//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; request IDs flow through every event
//! - Access logs come from the HTTP trace layer, not hand-rolled prints

pub mod logging;
