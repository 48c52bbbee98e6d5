//! Awful DNS Application Layer
//!
//! Query dispatch and the pathological response handlers.
pub mod handlers;
pub mod ports;
pub mod router;
pub mod use_cases;

pub use router::{QueryRouter, Route};
