//!
//! The warmup benchmark summary library.
//!

pub mod diff;
pub mod input;
pub mod model;
pub mod output;
pub mod statistics;
pub mod summary;

pub use crate::diff::benchmark::BenchmarkDiff;
pub use crate::diff::change::Change;
pub use crate::diff::Diff;
pub use crate::input::error::Error as InputError;
pub use crate::input::machine_results::MachineResults;
pub use crate::input::DataSet;
pub use crate::input::Input;
pub use crate::model::category::Category;
pub use crate::model::classification::Classification;
pub use crate::model::detailed_classification::DetailedClassification;
pub use crate::model::key::Key;
pub use crate::model::process_execution::ProcessExecution;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::report::Report;
pub use crate::output::terminal::Terminal as TerminalOutput;
pub use crate::output::Output;
pub use crate::statistics::bootstrap::quality::Quality;
pub use crate::statistics::bootstrap::resampler::Resampler;
pub use crate::statistics::bootstrap::segment_samples::SegmentSamples;
pub use crate::statistics::bootstrap::Estimate;
pub use crate::statistics::bootstrap::Estimator;
pub use crate::statistics::delta::Delta;
pub use crate::summary::benchmark::BenchmarkSummary;
pub use crate::summary::error::Error as SummaryError;
pub use crate::summary::settings::Settings;
pub use crate::summary::Summary;
