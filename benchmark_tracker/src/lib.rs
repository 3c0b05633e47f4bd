//!
//! The benchmark tracker library.
//!

pub mod analysis;
pub mod input;
pub mod output;
pub mod results;
pub mod store;
pub mod util;

pub use crate::input::error::Error as InputError;
pub use crate::input::pytest::case::Case as PytestCase;
pub use crate::input::pytest::stats::Stats as PytestStats;
pub use crate::input::pytest::PytestReport;
pub use crate::input::Report as InputReport;
pub use crate::output::csv::Csv as CsvOutput;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::json::Json as JsonOutput;
pub use crate::output::xlsx::Xlsx as XlsxOutput;
pub use crate::output::Output;
pub use crate::results::Results;
pub use crate::store::commit::Commit;
pub use crate::store::commit::Signature;
pub use crate::store::error::Error as StoreError;
pub use crate::store::error::ValidationError;
pub use crate::store::format::Format as StoreFormat;
pub use crate::store::measurement::Measurement;
pub use crate::store::sample::Sample;
pub use crate::store::Store;
