use async_trait::async_trait;
use awful_dns_domain::{DnsQuery, DnsResponse};

#[async_trait]
pub trait QueryHandler: Send + Sync {
    /// Stable name reported in the query log.
    fn name(&self) -> &'static str;

    /// Build the response for one query. Never fails: handler-local errors are
    /// reported inside the response itself.
    async fn handle(&self, query: &DnsQuery) -> DnsResponse;
}
