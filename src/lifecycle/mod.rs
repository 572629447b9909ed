//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Initialize logging → Bind listener → Serve
//!
//! Shutdown:
//!     SIGINT → Shutdown::trigger → serve drains in-flight requests → Exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
