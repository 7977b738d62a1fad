//! Run summary types and helpers.

mod result;
mod run_summary;

pub use result::{ChangeRequestReport, RepositoryOutcome, RepositoryReport};
pub use run_summary::RunSummary;
