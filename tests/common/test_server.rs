use super::TestClient;
use awful_dns_application::{use_cases::HandleDnsQueryUseCase, QueryRouter};
use awful_dns_domain::config::ZoneConfig;
use awful_dns_infrastructure::dns::{DnsListener, DnsServerHandler, ListenerError};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Full server stack on 127.0.0.1 with an ephemeral port shared by UDP and
/// TCP. Aborted on drop.
pub struct TestServer {
    addr: SocketAddr,
    task: JoinHandle<Result<(), ListenerError>>,
}

impl TestServer {
    pub const GLUE: Ipv4Addr = Ipv4Addr::new(192, 0, 2, 53);

    pub async fn start() -> Self {
        Self::start_with_zone(ZoneConfig {
            base_domain: "example.com".to_string(),
            advertised_ip: Self::GLUE,
        })
        .await
    }

    pub async fn start_with_zone(zone: ZoneConfig) -> Self {
        let router = Arc::new(QueryRouter::for_zone(&zone));
        let use_case = Arc::new(HandleDnsQueryUseCase::new(router));
        let handler = DnsServerHandler::new(use_case);

        let listener = DnsListener::bind(
            SocketAddr::from(([127, 0, 0, 1], 0)),
            handler,
            Duration::from_secs(5),
        )
        .await
        .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no local address");

        let task = tokio::spawn(listener.run());

        Self { addr, task }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn client(&self) -> TestClient {
        TestClient::new(self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
