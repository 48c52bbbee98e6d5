pub mod record;
pub mod record_type;

pub use record::{RecordData, ResponseRecord};
pub use record_type::{RecordClass, RecordType};
