//!
//! The warmup data model.
//!

pub mod category;
pub mod classification;
pub mod detailed_classification;
pub mod key;
pub mod process_execution;

#[cfg(test)]
mod tests;
