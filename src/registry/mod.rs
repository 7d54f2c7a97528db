pub mod contest;
pub mod oier;
pub mod school;

pub use contest::{Contest, ContestDescriptor, ContestRegistry};
pub use oier::{Oier, OierRegistry, OierRow, RowSkip, ROW_FIELDS};
pub use school::{School, SchoolRegistry};
