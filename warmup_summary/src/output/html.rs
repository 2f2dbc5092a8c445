//!
//! HTML page output.
//!

use std::collections::BTreeSet;

use crate::diff::change::Change;
use crate::summary::benchmark::BenchmarkSummary;
use crate::summary::error::Error;

use super::report::Comparison;
use super::report::Report;
use super::style::Style;

///
/// HTML page output.
///
#[derive(Default)]
pub struct Html {
    /// Rendered HTML.
    pub content: String,
}

impl Html {
    /// Page title.
    const TITLE: &'static str = "Summary of benchmark classifications";

    /// Page stylesheet.
    const STYLE: &'static str = r#"
table { border-collapse: collapse; margin-bottom: 2em; }
th, td { border: 1px solid #CCCCCC; padding: 4px 8px; }
th { background-color: #EEF3FF; }
#lightgreen { background-color: #CCFFCC; }
#lightred { background-color: #FFCCCC; }
#lightyellow { background-color: #FFFFCC; }
.tdcenter { text-align: center; }
.tdright { text-align: right; }
"#;

    /// Legend of the diff cell colours.
    const DIFF_LEGEND: &'static str = r#"<p>
<span id="lightgreen">&nbsp;better&nbsp;</span>
<span id="lightred">&nbsp;worse&nbsp;</span>
<span id="lightyellow">&nbsp;different&nbsp;</span>
</p>
"#;

    ///
    /// Escapes HTML special characters.
    ///
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for character in text.chars() {
            match character {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                character => escaped.push(character),
            }
        }
        escaped
    }

    ///
    /// Wraps `text` in a table cell coloured by a change.
    ///
    pub fn colour_cell(change: Option<Change>, text: &str, align: Option<&str>) -> String {
        let colour = match change {
            Some(Change::Better) => " id=\"lightgreen\"",
            Some(Change::Worse) => " id=\"lightred\"",
            Some(Change::Different) => " id=\"lightyellow\"",
            Some(Change::Same) | None => "",
        };
        let align = align
            .map(|align| format!(" style=\"text-align: {align};\""))
            .unwrap_or_default();
        format!("<td{align}{colour}>{text}</td>")
    }

    ///
    /// Renders the row of a benchmark.
    ///
    fn row(
        vm: &str,
        name: &str,
        summary: &BenchmarkSummary,
        comparison: Option<&Comparison>,
    ) -> String {
        let changes = comparison.and_then(|comparison| comparison.diff.get(vm, name));
        let previous = comparison.and_then(|comparison| comparison.previous.benchmark(vm, name));
        let is_changed = |change: Option<Change>| change.is_some_and(|change| change != Change::Same);

        let name_cell = Self::colour_cell(
            changes.map(|changes| changes.intersection),
            Self::escape(name).as_str(),
            None,
        );
        let classification_cell = Self::colour_cell(
            changes.and_then(|changes| changes.classification),
            Style::Html.describe(summary).as_str(),
            None,
        );

        let iteration_change = changes.and_then(|changes| changes.steady_iteration);
        let (iteration_cell, iteration_variation_cell) = match summary
            .steady_state_iteration
            .zip(summary.steady_state_iteration_iqr)
        {
            Some((median, (low, high))) => {
                let delta = previous
                    .and_then(|previous| previous.steady_state_iteration)
                    .filter(|_| is_changed(iteration_change))
                    .map(|previous| format!("<br/><small>&delta;={:.1}</small>", median - previous))
                    .unwrap_or_default();
                let text = format!(
                    "<div class=\"tdcenter\">{median:.1}{delta}<br/><small>({low:.1}, {high:.1})</small></div>"
                );
                let variation_change = changes.and_then(|changes| changes.steady_iteration_variation);
                let variation = match previous.and_then(|previous| previous.steady_state_iteration_iqr) {
                    Some((previous_low, previous_high)) if is_changed(variation_change) => {
                        Self::colour_cell(
                            variation_change,
                            format!("<div class=\"tdcenter\">({low:.1}, {high:.1})<br/><small>was:&nbsp;({previous_low:.1}, {previous_high:.1})</small></div>").as_str(),
                            Some("center"),
                        )
                    }
                    _ => "<td></td>".to_owned(),
                };
                (
                    Self::colour_cell(iteration_change, text.as_str(), Some("center")),
                    variation,
                )
            }
            None => ("<td></td>".to_owned(), "<td></td>".to_owned()),
        };

        let time_to_reach_cell = match summary
            .steady_state_time_to_reach_secs
            .zip(summary.steady_state_time_to_reach_secs_iqr)
        {
            Some((median, (low, high))) => {
                let delta = previous
                    .and_then(|previous| previous.steady_state_time_to_reach_secs)
                    .filter(|_| is_changed(iteration_change))
                    .map(|previous| format!("<br/><small>&delta;={:.3}</small>", median - previous))
                    .unwrap_or_default();
                let text = format!(
                    "<div class=\"tdcenter\">{median:.3}{delta}<br/><small>({low:.3}, {high:.3})</small></div>"
                );
                Self::colour_cell(iteration_change, text.as_str(), Some("center"))
            }
            None => "<td></td>".to_owned(),
        };

        let time_change = changes.and_then(|changes| changes.steady_state_time);
        let (time_cell, time_variation_cell) =
            match summary.steady_state_time.zip(summary.steady_state_time_ci) {
                Some((mean, ci)) => {
                    let delta = previous
                        .and_then(|previous| previous.steady_state_time)
                        .filter(|_| is_changed(time_change))
                        .map(|previous| format!("<br/><small>&delta;={:.5}</small>", mean - previous))
                        .unwrap_or_default();
                    let text = format!(
                        "<div class=\"tdright\">{mean:.5}{delta}<br/><small>&plusmn;{ci:.6}</small></div>"
                    );
                    let variation_change =
                        changes.and_then(|changes| changes.steady_state_time_variation);
                    let variation = match previous.and_then(|previous| previous.steady_state_time_ci) {
                        Some(previous_ci) if is_changed(variation_change) => Self::colour_cell(
                            variation_change,
                            format!("<div class=\"tdcenter\">{ci:.6}<br/><small>was: {previous_ci:.6}</small></div>").as_str(),
                            Some("center"),
                        ),
                        _ => "<td></td>".to_owned(),
                    };
                    (
                        Self::colour_cell(time_change, text.as_str(), Some("right")),
                        variation,
                    )
                }
                None => ("<td></td>".to_owned(), "<td></td>".to_owned()),
            };

        if comparison.is_some() {
            format!("<tr>{name_cell}{classification_cell}{iteration_cell}{iteration_variation_cell}{time_to_reach_cell}{time_cell}{time_variation_cell}</tr>\n")
        } else {
            format!("<tr>{name_cell}{classification_cell}{iteration_cell}{time_to_reach_cell}{time_cell}</tr>\n")
        }
    }

    ///
    /// Renders the row of a benchmark summarized in only one of the runs.
    ///
    fn skipped_row(vm: &str, name: &str, comparison: &Comparison) -> String {
        let name_cell = Self::colour_cell(
            comparison
                .diff
                .get(vm, name)
                .map(|changes| changes.intersection),
            Self::escape(name).as_str(),
            None,
        );
        format!(
            "<tr>{name_cell}<td><em>Skipped</em></td>{}</tr>\n",
            "<td></td>".repeat(5)
        )
    }

    ///
    /// Renders the table header.
    ///
    fn header(vm: &str, is_diff: bool) -> String {
        let columns: &[&str] = if is_diff {
            &[
                "Benchmark",
                "Classification",
                "Steady iteration (#)",
                "Steady iteration variation",
                "Steady iteration (s)",
                "Steady performance (s)",
                "Steady performance variation (s)",
            ]
        } else {
            &[
                "Benchmark",
                "Classification",
                "Steady iteration (#)",
                "Steady iteration (s)",
                "Steady performance (s)",
            ]
        };
        let columns = columns
            .iter()
            .map(|column| format!("<th>{column}</th>"))
            .collect::<Vec<String>>()
            .join("");
        format!(
            "<h2>{}</h2>\n<table>\n<tr>{columns}</tr>\n",
            Self::escape(vm)
        )
    }
}

impl TryFrom<&Report<'_>> for Html {
    type Error = Error;

    fn try_from(report: &Report<'_>) -> Result<Self, Self::Error> {
        let comparison = report.comparison()?;
        let (machine, vms) = report.vms()?;

        let mut body = String::with_capacity(16384);
        body.push_str(format!("<h1>{}</h1>\n", Self::TITLE).as_str());
        body.push_str(
            format!(
                "<p>Machine: {}</p>\n<p>{}</p>\n",
                Self::escape(machine),
                Style::Html.legend()
            )
            .as_str(),
        );
        if comparison.is_some() {
            body.push_str(Self::DIFF_LEGEND);
        }

        for (vm, benchmarks) in vms.into_iter() {
            body.push_str(Self::header(vm, comparison.is_some()).as_str());
            let mut names: BTreeSet<&str> = benchmarks.keys().map(String::as_str).collect();
            if let Some(comparison) = comparison.as_ref() {
                names.extend(
                    comparison
                        .diff
                        .skipped_before
                        .iter()
                        .chain(comparison.diff.skipped_after.iter())
                        .filter(|(_, skipped_vm)| skipped_vm == vm)
                        .map(|(name, _)| name.as_str()),
                );
            }
            for name in names.into_iter() {
                let row = match comparison.as_ref() {
                    Some(comparison) if comparison.diff.is_skipped(vm, name) => {
                        Self::skipped_row(vm, name, comparison)
                    }
                    _ => match benchmarks.get(name) {
                        Some(summary) => Self::row(vm, name, summary, comparison.as_ref()),
                        None => continue,
                    },
                };
                body.push_str(row.as_str());
            }
            body.push_str("</table>\n\n");
        }

        let content = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
            Self::TITLE,
            Self::STYLE
        );
        Ok(Self { content })
    }
}
