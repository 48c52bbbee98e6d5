use awful_dns_domain::CliOverrides;
use clap::Parser;
use std::net::Ipv4Addr;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "awful-dns")]
#[command(version = "0.1.0")]
#[command(about = "Awful DNS - adversarial authority for probing recursive resolvers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// IPv4 address handed out as glue in many-cuts referrals
    #[arg(long, value_name = "IP")]
    ip: Option<Ipv4Addr>,

    /// Base domain the pit labels are served under
    #[arg(long, value_name = "DOMAIN")]
    base: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DNS server port (UDP and TCP)
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        base_domain: cli.base,
        advertised_ip: cli.ip,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Awful DNS Server v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::config::log_config_summary(&config);

    let dns_services = di::DnsServices::new(&config);
    let dns_handler = dns_services.server_handler();

    if let Err(e) = server::start_dns_server(&config.server, dns_handler).await {
        error!(error = %e, "DNS server error");
        return Err(e);
    }

    Ok(())
}
