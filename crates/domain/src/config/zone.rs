use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// The synthetic zone this server is delegated in the public DNS.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Domain under which the pit labels (`cnamepit`, `manycuts`, `sleep`)
    /// are served.
    #[serde(default = "default_base_domain")]
    pub base_domain: String,

    /// Address of this server, handed out as glue in many-cuts referrals.
    #[serde(default = "default_advertised_ip")]
    pub advertised_ip: Ipv4Addr,
}

impl ZoneConfig {
    /// Base domain lowercased, without leading or trailing dots.
    pub fn normalized_base(&self) -> String {
        self.base_domain.trim_matches('.').to_ascii_lowercase()
    }

    /// Fully-qualified pattern `<label>.<base>.` for a pit label.
    pub fn pattern_for(&self, label: &str) -> String {
        format!("{}.{}.", label, self.normalized_base())
    }
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            base_domain: default_base_domain(),
            advertised_ip: default_advertised_ip(),
        }
    }
}

fn default_base_domain() -> String {
    "example.com".to_string()
}

fn default_advertised_ip() -> Ipv4Addr {
    Ipv4Addr::LOCALHOST
}
