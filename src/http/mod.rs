//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, raw path capture)
//!     → [resolver classifies and computes]
//!     → response.rs (HTML page construction)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use server::HttpServer;
