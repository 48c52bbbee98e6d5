//! Awful DNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{DnsQuery, ROOT_NAME};
pub use dns_record::{RecordClass, RecordData, RecordType, ResponseRecord};
pub use dns_response::{DnsResponse, ResponseCode};
pub use errors::DomainError;
