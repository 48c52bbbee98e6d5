use super::ResponseRecord;

/// Status carried in the response header. Handlers report their own failures
/// inside the answer payload, so success is the only code the core produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseCode {
    #[default]
    NoError,
}

/// A fully synthesized response, ready for the transport layer to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DnsResponse {
    pub code: ResponseCode,
    pub answers: Vec<ResponseRecord>,
    pub authority: Vec<ResponseRecord>,
    pub additional: Vec<ResponseRecord>,
}

impl DnsResponse {
    /// Empty success envelope every handler starts from.
    pub fn success() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, record: ResponseRecord) -> Self {
        self.answers.push(record);
        self
    }

    pub fn with_authority(mut self, record: ResponseRecord) -> Self {
        self.authority.push(record);
        self
    }

    pub fn with_additional(mut self, record: ResponseRecord) -> Self {
        self.additional.push(record);
        self
    }

    /// Success response carrying `message` as a single TXT answer owned by
    /// `name`.
    pub fn diagnostic(name: &str, message: &str) -> Self {
        Self::success().with_answer(ResponseRecord::txt(name, message))
    }

    pub fn record_count(&self) -> usize {
        self.answers.len() + self.authority.len() + self.additional.len()
    }
}
