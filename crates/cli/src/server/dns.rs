use awful_dns_domain::config::ServerConfig;
use awful_dns_infrastructure::dns::{DnsListener, DnsServerHandler};
use std::time::Duration;

/// Bind both transports and serve until either listener stops.
///
/// Only returns on failure; a stopped listener is fatal to the process.
pub async fn start_dns_server(
    server: &ServerConfig,
    handler: DnsServerHandler,
) -> anyhow::Result<()> {
    let socket_addr = server.socket_addr()?;
    let tcp_timeout = Duration::from_secs(server.tcp_timeout_secs);

    let listener = DnsListener::bind(socket_addr, handler, tcp_timeout).await?;
    listener.run().await?;
    Ok(())
}
