pub mod response;

pub use response::{BatchError, ImportReport, SheetCounts};
