pub mod listener;
pub mod record_map;
pub mod server;

pub use listener::{DnsListener, ListenerError};
pub use record_map::RecordMapper;
pub use server::DnsServerHandler;
