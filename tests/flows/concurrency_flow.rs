//! Sleeping queries must not hold up other queries on either transport.

#[path = "../common/mod.rs"]
mod common;

use common::{TestServer, Transport};
use hickory_proto::op::ResponseCode;
use std::time::Duration;

const SLEEP_NAME: &str = "500.sleep.example.com.";
const PIT_NAME: &str = "cnamepit.example.com.";

async fn assert_pit_not_delayed(sleep_on: Transport, pit_on: Transport) {
    let server = TestServer::start().await;
    let sleeper = server.client();
    let prober = server.client();

    let slow = tokio::spawn(async move { sleeper.query(sleep_on, SLEEP_NAME).await });

    // let the sleep request reach the server first
    tokio::time::sleep(Duration::from_millis(20)).await;
    let (pit, pit_elapsed) = prober.query(pit_on, PIT_NAME).await;

    assert_eq!(pit.response_code(), ResponseCode::NoError);
    assert_eq!(pit.answers().len(), 1);
    assert!(
        pit_elapsed < Duration::from_millis(250),
        "cname pit over {:?} took {:?} while sleeping over {:?}",
        pit_on,
        pit_elapsed,
        sleep_on
    );

    let (slept, slept_elapsed) = slow.await.unwrap();
    assert_eq!(slept.response_code(), ResponseCode::NoError);
    assert!(slept.answers().is_empty());
    assert!(slept_elapsed >= Duration::from_millis(500));
}

#[tokio::test]
async fn test_udp_sleep_does_not_block_tcp_pit() {
    assert_pit_not_delayed(Transport::Udp, Transport::Tcp).await;
}

#[tokio::test]
async fn test_tcp_sleep_does_not_block_udp_pit() {
    assert_pit_not_delayed(Transport::Tcp, Transport::Udp).await;
}

#[tokio::test]
async fn test_same_transport_sleep_does_not_block_pit() {
    assert_pit_not_delayed(Transport::Udp, Transport::Udp).await;
    assert_pit_not_delayed(Transport::Tcp, Transport::Tcp).await;
}
