#![allow(dead_code)]

use async_trait::async_trait;
use awful_dns_application::ports::QueryHandler;
use awful_dns_domain::{DnsQuery, DnsResponse, RecordClass, RecordType};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn query(name: &str) -> DnsQuery {
    DnsQuery::new(name, RecordType::A, RecordClass::IN)
}

/// Handler that only counts how often it ran.
#[derive(Clone)]
pub struct RecordingHandler {
    name: &'static str,
    calls: Arc<AtomicUsize>,
}

impl RecordingHandler {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryHandler for RecordingHandler {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn handle(&self, _query: &DnsQuery) -> DnsResponse {
        self.calls.fetch_add(1, Ordering::SeqCst);
        DnsResponse::success()
    }
}
