pub mod build;
pub mod mui;
pub mod reader;
pub mod suffix_array;
pub mod sus;
pub mod types;
pub mod writer;

pub use build::{IndexBuilder, StepOutcome};
pub use reader::IndexReader;
pub use sus::SusIndex;
pub use types::*;
pub use writer::IndexWriter;
