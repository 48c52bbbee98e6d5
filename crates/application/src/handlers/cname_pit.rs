use super::CHAIN_LABEL;
use crate::ports::QueryHandler;
use async_trait::async_trait;
use awful_dns_domain::{DnsQuery, DnsResponse, ResponseRecord};

/// Answers every query with a CNAME to `q.<qname>`, so a resolver that
/// follows aliases comes back for `q.q.<qname>` until its own depth limit
/// stops it.
pub struct CnamePitHandler;

#[async_trait]
impl QueryHandler for CnamePitHandler {
    fn name(&self) -> &'static str {
        "cname_pit"
    }

    async fn handle(&self, query: &DnsQuery) -> DnsResponse {
        let name = query.qname();
        DnsResponse::success().with_answer(ResponseRecord::cname(
            name,
            query.child_name(CHAIN_LABEL),
        ))
    }
}
