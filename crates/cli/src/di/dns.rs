use awful_dns_application::use_cases::HandleDnsQueryUseCase;
use awful_dns_application::QueryRouter;
use awful_dns_domain::Config;
use awful_dns_infrastructure::dns::DnsServerHandler;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let router = Arc::new(QueryRouter::for_zone(&config.zone));
        for route in router.routes() {
            info!(
                pattern = route.pattern(),
                handler = route.handler().name(),
                "Route registered"
            );
        }
        info!(handler = router.fallback().name(), "Fallback handler registered");

        Self {
            handler_use_case: Arc::new(HandleDnsQueryUseCase::new(router)),
        }
    }

    pub fn server_handler(&self) -> DnsServerHandler {
        DnsServerHandler::new(self.handler_use_case.clone())
    }
}
