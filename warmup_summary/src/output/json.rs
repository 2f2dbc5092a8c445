//!
//! JSON summary record output.
//!

use crate::summary::Summary;

///
/// JSON summary record output.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<&Summary> for Json {
    fn from(summary: &Summary) -> Self {
        let content = serde_json::to_string_pretty(summary).expect("Always valid");
        Self { content }
    }
}
