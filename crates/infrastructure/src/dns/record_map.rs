//! Conversion between domain query/record types and `hickory_proto` types.
//!
//! Incoming questions are decoded into [`DnsQuery`], synthesized
//! [`ResponseRecord`]s are turned back into hickory `Record`s. Every record
//! is emitted in class IN.

use awful_dns_domain::{
    DnsQuery, DnsResponse, DomainError, RecordClass, RecordData, RecordType, ResponseCode,
    ResponseRecord,
};
use hickory_proto::op::{Query, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::rdata::{A, CNAME, NS, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;

/// Longest name allowed on the wire, in octets.
const MAX_NAME_WIRE_LEN: usize = 255;

/// Records of one response, split by section and ready for the response
/// builder.
#[derive(Debug, Default)]
pub struct EncodedSections {
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
    pub additional: Vec<Record>,
}

pub struct RecordMapper;

impl RecordMapper {
    /// Decode a hickory question, preserving the querier's letter case.
    pub fn query_from_hickory(query: &Query) -> DnsQuery {
        DnsQuery::new(
            query.name().to_string(),
            RecordType::from_u16(u16::from(query.query_type())),
            RecordClass::from_u16(u16::from(query.query_class())),
        )
    }

    pub fn response_code(code: ResponseCode) -> HickoryResponseCode {
        match code {
            ResponseCode::NoError => HickoryResponseCode::NoError,
        }
    }

    pub fn to_hickory(record: &ResponseRecord) -> Result<Record, DomainError> {
        let name = Self::parse_name(&record.name)?;
        let rdata = match &record.data {
            RecordData::Cname { target } => RData::CNAME(CNAME(Self::parse_name(target)?)),
            RecordData::Ns { nameserver } => RData::NS(NS(Self::parse_name(nameserver)?)),
            RecordData::A { address } => RData::A(A(*address)),
            RecordData::Txt { text } => RData::TXT(TXT::new(text.clone())),
        };

        Ok(Record::from_rdata(name, record.ttl, rdata))
    }

    pub fn encode_sections(response: &DnsResponse) -> Result<EncodedSections, DomainError> {
        Ok(EncodedSections {
            answers: Self::encode_all(&response.answers)?,
            authority: Self::encode_all(&response.authority)?,
            additional: Self::encode_all(&response.additional)?,
        })
    }

    fn encode_all(records: &[ResponseRecord]) -> Result<Vec<Record>, DomainError> {
        records.iter().map(Self::to_hickory).collect()
    }

    fn parse_name(name: &str) -> Result<Name, DomainError> {
        let parsed = Name::from_str(name)
            .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))?;

        let wire_len = parsed.iter().map(|label| label.len() + 1).sum::<usize>() + 1;
        if wire_len > MAX_NAME_WIRE_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "{}: {} octets exceeds the {} octet limit",
                name, wire_len, MAX_NAME_WIRE_LEN
            )));
        }

        Ok(parsed)
    }
}
