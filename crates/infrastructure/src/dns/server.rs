use crate::dns::record_map::{EncodedSections, RecordMapper};
use awful_dns_application::handlers::txt_error;
use awful_dns_application::use_cases::HandleDnsQueryUseCase;
use awful_dns_domain::{DnsQuery, DnsResponse};
use hickory_proto::op::Header;
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, info_span, warn, Instrument};

/// Diagnostic returned when a synthesized name cannot be put on the wire.
pub const ENCODE_ERROR: &str = "failed to encode response";

/// Adapter between hickory's server loop and the query use case. Cloned once
/// per transport; clones share the same router.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    fn extract_query(request: &Request) -> DnsQuery {
        match request.queries().first() {
            Some(query) => RecordMapper::query_from_hickory(query.original()),
            None => DnsQuery::without_question(),
        }
    }

    fn encode(query: &DnsQuery, response: &DnsResponse) -> EncodedSections {
        match RecordMapper::encode_sections(response) {
            Ok(sections) => sections,
            Err(e) => {
                warn!(error = %e, domain = %query.qname(), "Response cannot be encoded, sending diagnostic");
                RecordMapper::encode_sections(&txt_error(query, ENCODE_ERROR)).unwrap_or_default()
            }
        }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let query = Self::extract_query(request);
        debug!(
            protocol = ?request.protocol(),
            client = %request.src(),
            id = request.id(),
            "Request decoded"
        );

        let response = self
            .use_case
            .execute(&query, request.src())
            .instrument(info_span!("dns", protocol = %request.protocol()))
            .await;
        let sections = Self::encode(&query, &response);

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = Header::response_from_request(request.header());
        header.set_response_code(RecordMapper::response_code(response.code));

        let message = builder.build(
            header,
            sections.answers.iter(),
            sections.authority.iter(),
            &[] as &[Record],
            sections.additional.iter(),
        );

        match response_handle.send_response(message).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, domain = %query.qname(), "Failed to send response");
                ResponseInfo::from(header)
            }
        }
    }
}
