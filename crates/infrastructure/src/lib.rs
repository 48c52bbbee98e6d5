//! Awful DNS Infrastructure Layer
//!
//! Wire codec adapter and UDP/TCP listeners built on hickory.
pub mod dns;
