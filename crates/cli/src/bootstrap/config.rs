use awful_dns_domain::{CliOverrides, Config};
use tracing::info;

/// Resolve the configuration file, apply CLI overrides and validate.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Emitted once logging is up, since `load_config` runs before the subscriber exists.
pub fn log_config_summary(config: &Config) {
    info!(
        bind_address = %config.server.bind_address,
        dns_port = config.server.dns_port,
        tcp_timeout_secs = config.server.tcp_timeout_secs,
        base_domain = %config.zone.normalized_base(),
        advertised_ip = %config.zone.advertised_ip,
        "Configuration loaded"
    );
}
