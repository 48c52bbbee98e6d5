#![allow(dead_code)]

pub mod test_client;
pub mod test_server;

pub use test_client::{Transport, TestClient};
pub use test_server::TestServer;
