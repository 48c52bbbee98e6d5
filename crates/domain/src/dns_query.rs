use super::{RecordClass, RecordType};
use std::sync::Arc;

/// Name substituted whenever a query carries no question.
pub const ROOT_NAME: &str = ".";

/// A single inbound question, as decoded by the transport layer.
///
/// `name` is `None` when the message had an empty question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: Option<Arc<str>>,
    pub record_type: RecordType,
    pub record_class: RecordClass,
}

impl DnsQuery {
    pub fn new(
        name: impl Into<Arc<str>>,
        record_type: RecordType,
        record_class: RecordClass,
    ) -> Self {
        Self {
            name: Some(name.into()),
            record_type,
            record_class,
        }
    }

    /// A query whose message held no question at all.
    pub fn without_question() -> Self {
        Self {
            name: None,
            record_type: RecordType::A,
            record_class: RecordClass::IN,
        }
    }

    /// Name of the first question, or the root name when there is none.
    pub fn qname(&self) -> &str {
        self.name.as_deref().unwrap_or(ROOT_NAME)
    }

    pub fn has_question(&self) -> bool {
        self.name.is_some()
    }

    /// Labels of the query name, split on `.`.
    ///
    /// Splitting is literal: `"a.b."` yields `["a", "b", ""]` and the root
    /// name yields `["", ""]`.
    pub fn labels(&self) -> std::str::Split<'_, char> {
        self.qname().split('.')
    }

    pub fn first_label(&self) -> &str {
        self.labels().next().unwrap_or_default()
    }

    /// The query name with `label` prepended, e.g. `q.` + `foo.example.com.`.
    pub fn child_name(&self, label: &str) -> String {
        format!("{}.{}", label, self.qname())
    }
}
