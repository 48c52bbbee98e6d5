use crate::ports::QueryHandler;
use async_trait::async_trait;
use awful_dns_domain::{DnsQuery, DnsResponse};

pub const NO_MATCH_MESSAGE: &str = "request did not match any known pattern.";

/// Diagnostic reply: a single TXT answer owned by the query name.
///
/// Handlers report their own recoverable failures through this instead of a
/// non-success status code.
pub fn txt_error(query: &DnsQuery, message: &str) -> DnsResponse {
    DnsResponse::diagnostic(query.qname(), message)
}

/// Catch-all for queries outside every registered pattern.
pub struct UnknownHandler;

#[async_trait]
impl QueryHandler for UnknownHandler {
    fn name(&self) -> &'static str {
        "unknown"
    }

    async fn handle(&self, query: &DnsQuery) -> DnsResponse {
        txt_error(query, NO_MATCH_MESSAGE)
    }
}
