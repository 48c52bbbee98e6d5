//! Response handlers, one per resolver trap.
//!
//! Every handler starts from [`DnsResponse::success`](awful_dns_domain::DnsResponse::success)
//! and attaches at most one record per section.

pub mod cname_pit;
pub mod many_cuts;
pub mod sleep;
pub mod unknown;

pub use cname_pit::CnamePitHandler;
pub use many_cuts::ManyCutsHandler;
pub use sleep::SleepHandler;
pub use unknown::{txt_error, UnknownHandler};

/// Label prepended to the query name by the CNAME and referral traps.
pub const CHAIN_LABEL: &str = "q";

pub const CNAME_PIT_LABEL: &str = "cnamepit";
pub const MANY_CUTS_LABEL: &str = "manycuts";
pub const SLEEP_LABEL: &str = "sleep";
