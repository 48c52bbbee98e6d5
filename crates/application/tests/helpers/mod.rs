#![allow(unused_imports)]

pub mod mock_handlers;

pub use mock_handlers::{query, RecordingHandler};
