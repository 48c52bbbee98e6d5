use super::CHAIN_LABEL;
use crate::ports::QueryHandler;
use async_trait::async_trait;
use awful_dns_domain::{DnsQuery, DnsResponse, ResponseRecord};
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Always replies with a referral one zone cut deeper: NS `q.<qname>` in the
/// authority section plus glue pointing back at this server.
pub struct ManyCutsHandler {
    glue: Ipv4Addr,
}

impl ManyCutsHandler {
    pub fn new(glue: Ipv4Addr) -> Self {
        Self { glue }
    }
}

#[async_trait]
impl QueryHandler for ManyCutsHandler {
    fn name(&self) -> &'static str {
        "many_cuts"
    }

    async fn handle(&self, query: &DnsQuery) -> DnsResponse {
        let next: Arc<str> = query.child_name(CHAIN_LABEL).into();

        DnsResponse::success()
            .with_authority(ResponseRecord::ns(query.qname(), Arc::clone(&next)))
            .with_additional(ResponseRecord::a(next, self.glue))
    }
}
