use super::txt_error;
use crate::ports::QueryHandler;
use async_trait::async_trait;
use awful_dns_domain::{DnsQuery, DnsResponse, DomainError};
use std::time::Duration;
use tracing::debug;

pub const SLEEP_PARSE_ERROR: &str = "failed to parse integer sleep time";

/// Sleeps for the number of milliseconds given in the first label of the
/// query name, then replies with an empty NOERROR.
///
/// The delay suspends only the task serving this query. Zero and negative
/// values reply immediately.
pub struct SleepHandler;

impl SleepHandler {
    /// Parse the first label as a signed 16-bit millisecond count.
    pub fn parse_millis(query: &DnsQuery) -> Result<i16, DomainError> {
        let label = query.first_label();
        label
            .parse::<i16>()
            .map_err(|_| DomainError::InvalidSleepDuration(label.to_string()))
    }

    pub fn delay_for(millis: i16) -> Duration {
        Duration::from_millis(u64::try_from(millis).unwrap_or(0))
    }
}

#[async_trait]
impl QueryHandler for SleepHandler {
    fn name(&self) -> &'static str {
        "sleep"
    }

    async fn handle(&self, query: &DnsQuery) -> DnsResponse {
        let millis = match Self::parse_millis(query) {
            Ok(millis) => millis,
            Err(e) => {
                debug!(error = %e, domain = %query.qname(), "Rejecting sleep query");
                return txt_error(query, SLEEP_PARSE_ERROR);
            }
        };

        let delay = Self::delay_for(millis);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        DnsResponse::success()
    }
}
