use super::{RecordClass, RecordType};
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Type-specific payload of a synthesized record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Cname { target: Arc<str> },
    Ns { nameserver: Arc<str> },
    A { address: Ipv4Addr },
    Txt { text: Vec<String> },
}

/// A record built for exactly one response. TTL is always zero so no
/// resolver keeps it around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRecord {
    pub name: Arc<str>,
    pub class: RecordClass,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResponseRecord {
    fn new(name: impl Into<Arc<str>>, data: RecordData) -> Self {
        Self {
            name: name.into(),
            class: RecordClass::IN,
            ttl: 0,
            data,
        }
    }

    pub fn cname(name: impl Into<Arc<str>>, target: impl Into<Arc<str>>) -> Self {
        Self::new(
            name,
            RecordData::Cname {
                target: target.into(),
            },
        )
    }

    pub fn ns(name: impl Into<Arc<str>>, nameserver: impl Into<Arc<str>>) -> Self {
        Self::new(
            name,
            RecordData::Ns {
                nameserver: nameserver.into(),
            },
        )
    }

    pub fn a(name: impl Into<Arc<str>>, address: Ipv4Addr) -> Self {
        Self::new(name, RecordData::A { address })
    }

    pub fn txt(name: impl Into<Arc<str>>, text: impl Into<String>) -> Self {
        Self::new(
            name,
            RecordData::Txt {
                text: vec![text.into()],
            },
        )
    }

    pub fn record_type(&self) -> RecordType {
        match self.data {
            RecordData::Cname { .. } => RecordType::CNAME,
            RecordData::Ns { .. } => RecordType::NS,
            RecordData::A { .. } => RecordType::A,
            RecordData::Txt { .. } => RecordType::TXT,
        }
    }
}
