use crate::router::QueryRouter;
use awful_dns_domain::{DnsQuery, DnsResponse};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

pub struct HandleDnsQueryUseCase {
    router: Arc<QueryRouter>,
}

impl HandleDnsQueryUseCase {
    pub fn new(router: Arc<QueryRouter>) -> Self {
        Self { router }
    }

    /// Route the query, log the dispatch and run the selected handler to
    /// completion.
    pub async fn execute(&self, query: &DnsQuery, client: SocketAddr) -> DnsResponse {
        let start = Instant::now();
        let handler = self.router.route(query.qname());

        info!(
            client = %client,
            domain = %query.qname(),
            record_type = %query.record_type,
            handler = handler.name(),
            "DNS query received"
        );

        let response = handler.handle(query).await;

        debug!(
            domain = %query.qname(),
            handler = handler.name(),
            records = response.record_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Response built"
        );

        response
    }
}
