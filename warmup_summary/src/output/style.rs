//!
//! Classification symbols of the markup formats.
//!

use crate::model::category::Category;
use crate::summary::benchmark::BenchmarkSummary;

///
/// Classification symbols of the markup formats.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// LaTeX macros, defined by the document preamble.
    Latex,
    /// HTML entities.
    Html,
}

impl Style {
    ///
    /// Returns the symbol of a category.
    ///
    pub fn symbol(&self, category: Category) -> &'static str {
        match (self, category) {
            (Self::Latex, Category::Flat) => "\\flatc",
            (Self::Latex, Category::Warmup) => "\\warmupc",
            (Self::Latex, Category::Slowdown) => "\\slowdownc",
            (Self::Latex, Category::NoSteadyState) => "\\nosteadystatec",
            (Self::Latex, Category::Timeout) => "\\timeoutc",
            (Self::Latex, Category::Errored) => "\\errorc",
            (Self::Latex, Category::GoodInconsistent) => "\\goodinconsistentc",
            (Self::Latex, Category::BadInconsistent) => "\\badinconsistentc",

            (Self::Html, Category::Flat) => "&#8594;",
            (Self::Html, Category::Warmup) => "&#8600;",
            (Self::Html, Category::Slowdown) => "&#8599;",
            (Self::Html, Category::NoSteadyState) => "&#8669;",
            (Self::Html, Category::Timeout) => "&#8987;",
            (Self::Html, Category::Errored) => "&#10007;",
            (Self::Html, Category::GoodInconsistent) => "&#8801;",
            (Self::Html, Category::BadInconsistent) => "&#8802;",
        }
    }

    ///
    /// Describes the classification of a benchmark.
    ///
    /// Inconsistent benchmarks list their classification counts, most
    /// common first. Consistent benchmarks with failed executions show
    /// how many executions share the classification.
    ///
    pub fn describe(&self, summary: &BenchmarkSummary) -> String {
        let detailed = &summary.detailed_classification;
        if summary.classification.is_inconsistent() {
            let counts = detailed
                .most_common()
                .into_iter()
                .map(|(classification, count)| match self {
                    Self::Latex => format!("${count}${}", self.symbol(classification.into())),
                    Self::Html => format!("{count} {}", self.symbol(classification.into())),
                })
                .collect::<Vec<String>>()
                .join(", ");
            return match self {
                Self::Latex => format!(
                    "{} \\scriptsize({counts})",
                    self.symbol(summary.classification)
                ),
                Self::Html => format!("{} ({counts})", self.symbol(summary.classification)),
            };
        }

        let unanimous = summary
            .classification
            .unanimous()
            .map(|classification| summary.count(classification))
            .unwrap_or_default();
        if unanimous == detailed.total() {
            return self.symbol(summary.classification).to_owned();
        }
        match self {
            Self::Latex => format!(
                " {}\\scriptsize{{(${unanimous}$)}}",
                self.symbol(summary.classification)
            ),
            Self::Html => format!(" {} {unanimous}", self.symbol(summary.classification)),
        }
    }

    ///
    /// Returns the symbol key of every category.
    ///
    pub fn legend(&self) -> String {
        [
            Category::Flat,
            Category::Warmup,
            Category::Slowdown,
            Category::NoSteadyState,
            Category::Timeout,
            Category::Errored,
            Category::GoodInconsistent,
            Category::BadInconsistent,
        ]
        .into_iter()
        .map(|category| format!("{} ({})", category, self.symbol(category)))
        .collect::<Vec<String>>()
        .join(", ")
    }
}
