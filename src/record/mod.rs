pub mod decoder;
pub mod record;

pub use decoder::{Decoded, DropReason, RecordDecoder, TOKEN_FIELDS};
pub use record::Record;
