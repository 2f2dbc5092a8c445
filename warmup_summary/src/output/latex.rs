//!
//! LaTeX table output.
//!

use crate::diff::change::Change;
use crate::model::category::Category;
use crate::summary::benchmark::BenchmarkSummary;
use crate::summary::error::Error;

use super::report::Comparison;
use super::report::Report;
use super::style::Style;

///
/// LaTeX table output.
///
#[derive(Default)]
pub struct Latex {
    /// Rendered LaTeX.
    pub content: String,
}

impl Latex {
    /// Document title.
    const TITLE: &'static str = "Summary of benchmark classifications";

    /// Column layout of the table.
    const TABLE_FORMAT: &'static str = "ll@{\\hspace{0cm}}ll@{\\hspace{-1cm}}r@{\\hspace{0cm}}r@{\\hspace{0cm}}r";

    /// First header row.
    const HEADINGS_1: &'static str = "\\multicolumn{1}{c}{\\multirow{2}{*}{}}&&&\\multicolumn{1}{c}{} &\\multicolumn{1}{c}{Steady}&\\multicolumn{1}{c}{Steady}&\\multicolumn{1}{c}{Steady}";

    /// Second header row.
    const HEADINGS_2: &'static str = "&&&\\multicolumn{1}{c}{Class.} &\\multicolumn{1}{c}{iter (\\#)} &\\multicolumn{1}{c}{iter (s)}&\\multicolumn{1}{c}{perf (s)}";

    /// Placeholder keeping the height of an empty cell.
    const BLANK_CELL: &'static str = "\\begin{minipage}[c][\\blankheight]{0pt}\\end{minipage}";

    ///
    /// Escapes LaTeX special characters.
    ///
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for character in text.chars() {
            match character {
                '\\' => escaped.push_str("\\textbackslash{}"),
                '~' => escaped.push_str("\\textasciitilde{}"),
                '^' => escaped.push_str("\\textasciicircum{}"),
                '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                    escaped.push('\\');
                    escaped.push(character);
                }
                character => escaped.push(character),
            }
        }
        escaped
    }

    ///
    /// Formats a median with its interquartile range.
    ///
    fn median_iqr(median: f64, iqr: (f64, f64), precision: usize, change: Option<f64>) -> String {
        let change = change
            .map(|change| format!("\\\\[-6pt]\\scriptscriptstyle{{\\delta={change:.precision$}}}"))
            .unwrap_or_default();
        format!(
            "$\\begin{{array}}{{c}}\\scriptstyle{{{median:.precision$}}}\\\\[-6pt]\\scriptscriptstyle{{({:.precision$}, {:.precision$})}}{change}\\end{{array}}$",
            iqr.0, iqr.1,
        )
    }

    ///
    /// Formats a bootstrapped mean with its confidence interval.
    ///
    fn mean_ci(mean: f64, ci: f64, change: Option<f64>) -> String {
        let change = change
            .map(|change| format!("\\\\[-6pt]\\scriptscriptstyle{{\\delta={change:.5}}}"))
            .unwrap_or_default();
        format!(
            "$\\begin{{array}}{{r}}\\scriptstyle{{{mean:.5}}}\\\\[-6pt]\\scriptscriptstyle{{\\pm{ci:.6}}}{change}\\end{{array}}$"
        )
    }

    ///
    /// Returns the cells of a benchmark row after the VM cell.
    ///
    fn cells(
        summary: &BenchmarkSummary,
        previous: Option<&BenchmarkSummary>,
        comparison: Option<&Comparison>,
        vm: &str,
        benchmark: &str,
    ) -> [String; 4] {
        let changes = comparison.and_then(|comparison| comparison.diff.get(vm, benchmark));
        let iteration_changed = changes
            .and_then(|changes| changes.steady_iteration)
            .is_some_and(|change| change != Change::Same);
        let time_changed = changes
            .and_then(|changes| changes.steady_state_time)
            .is_some_and(|change| change != Change::Same);

        let classification = format!(
            "\\multicolumn{{1}}{{l}}{{{}}}",
            Style::Latex.describe(summary)
        );
        let iteration = summary
            .steady_state_iteration
            .zip(summary.steady_state_iteration_iqr)
            .map(|(median, iqr)| {
                let change = previous
                    .and_then(|previous| previous.steady_state_iteration)
                    .filter(|_| iteration_changed)
                    .map(|previous| median - previous);
                Self::median_iqr(median, iqr, 1, change)
            });
        let time_to_reach = summary
            .steady_state_time_to_reach_secs
            .zip(summary.steady_state_time_to_reach_secs_iqr)
            .map(|(median, iqr)| {
                let change = previous
                    .and_then(|previous| previous.steady_state_time_to_reach_secs)
                    .filter(|_| iteration_changed)
                    .map(|previous| median - previous);
                Self::median_iqr(median, iqr, 2, change)
            });
        let time = summary
            .steady_state_time
            .zip(summary.steady_state_time_ci)
            .map(|(mean, ci)| {
                let change = previous
                    .and_then(|previous| previous.steady_state_time)
                    .filter(|_| time_changed)
                    .map(|previous| mean - previous);
                Self::mean_ci(mean, ci, change)
            });

        let is_flat = summary.classification == Category::Flat;
        let blank = || Self::BLANK_CELL.to_owned();
        [
            classification,
            iteration.filter(|_| !is_flat).unwrap_or_else(blank),
            time_to_reach.filter(|_| !is_flat).unwrap_or_else(blank),
            time.unwrap_or_else(blank),
        ]
    }

    ///
    /// Returns the document preamble with the classification macros.
    ///
    fn preamble() -> String {
        let mut preamble = String::with_capacity(2048);
        preamble.push_str("\\documentclass[12pt]{article}\n");
        for package in [
            "amsmath", "amssymb", "booktabs", "graphicx", "longtable", "multirow", "pdflscape",
            "adjustbox",
        ] {
            preamble.push_str(format!("\\usepackage{{{package}}}\n").as_str());
        }
        preamble.push_str("\\newlength{\\blankheight}\n\\setlength{\\blankheight}{2.5ex}\n");
        for (name, definition) in [
            ("flatc", "\\ensuremath{\\rightarrow}"),
            ("warmupc", "\\ensuremath{\\searrow}"),
            ("slowdownc", "\\ensuremath{\\nearrow}"),
            ("nosteadystatec", "\\ensuremath{\\rightsquigarrow}"),
            ("timeoutc", "\\ensuremath{\\circlearrowleft}"),
            ("errorc", "\\ensuremath{\\times}"),
            ("goodinconsistentc", "\\ensuremath{\\equiv}"),
            ("badinconsistentc", "\\ensuremath{\\not\\equiv}"),
        ] {
            preamble.push_str(format!("\\newcommand{{\\{name}}}{{{definition}}}\n").as_str());
        }
        preamble.push_str(format!("\\title{{{}}}\n", Self::TITLE).as_str());
        preamble.push_str("\\begin{document}\n");
        preamble.push_str(format!("\\centering {}\n\n\n", Style::Latex.legend()).as_str());
        preamble
    }
}

impl TryFrom<&Report<'_>> for Latex {
    type Error = Error;

    fn try_from(report: &Report<'_>) -> Result<Self, Self::Error> {
        let comparison = report.comparison()?;
        let (machine, vms) = report.vms()?;
        let benchmark_names = report.benchmark_names()?;
        let previous_vms = match comparison.as_ref() {
            Some(comparison) => Some(comparison.previous.machine()?.1),
            None => None,
        };

        let mut content = String::with_capacity(16384);
        if report.latex_preamble {
            content.push_str(Self::preamble().as_str());
            if !report.latex_longtable {
                content.push_str("\\begin{landscape}\n\\begin{table*}[hptb]\n\\vspace{.8cm}\n");
                content.push_str("\\begin{adjustbox}{totalheight=12.4cm}\n");
            }
        }
        let headings = format!("{}\\\\{}", Self::HEADINGS_1, Self::HEADINGS_2);
        if report.latex_longtable {
            content.push_str(
                format!(
                    "\\begin{{longtable}}{{{}}}\n\\toprule\n{headings}\\\\\n\\midrule\n\\endhead\n",
                    Self::TABLE_FORMAT
                )
                .as_str(),
            );
        } else {
            content.push_str(
                format!(
                    "\\begin{{tabular}}{{{}}}\n\\toprule\n{headings}\\\\\n\\midrule\n",
                    Self::TABLE_FORMAT
                )
                .as_str(),
            );
        }

        let vm_count = vms.len();
        for (vm_index, (vm, benchmarks)) in vms.into_iter().enumerate() {
            let previous_benchmarks = previous_vms.and_then(|previous| previous.get(vm));
            for (benchmark_index, benchmark) in benchmark_names.iter().enumerate() {
                let previous = previous_benchmarks.and_then(|previous| previous.get(*benchmark));
                let summary = benchmarks
                    .get(*benchmark)
                    .filter(|_| comparison.is_none() || previous.is_some());
                let [classification, iteration, time_to_reach, time] = match summary {
                    Some(summary) => {
                        Self::cells(summary, previous, comparison.as_ref(), vm, benchmark)
                    }
                    None => [
                        String::new(),
                        Self::BLANK_CELL.to_owned(),
                        Self::BLANK_CELL.to_owned(),
                        Self::BLANK_CELL.to_owned(),
                    ],
                };
                let vm_cell = if benchmark_index == 0 {
                    format!(
                        "\\multirow{{{}}}{{*}}{{\\rotatebox[origin=c]{{90}}{{{}}}}}",
                        benchmark_names.len(),
                        Self::escape(vm)
                    )
                } else {
                    String::new()
                };
                let row = [
                    Self::escape(benchmark),
                    Self::BLANK_CELL.to_owned(),
                    vm_cell,
                    classification,
                    iteration,
                    time_to_reach,
                    time,
                ];
                content.push_str(row.join("&").as_str());
                if !report.latex_longtable && benchmark_index + 1 < benchmark_names.len() {
                    content.push_str("\\\\[-3pt] \n");
                } else {
                    content.push_str("\\\\ \n");
                }
            }
            if vm_index + 1 < vm_count {
                content.push_str(if report.latex_longtable {
                    "\\hline\n"
                } else {
                    "\\midrule\n"
                });
            }
        }

        if report.latex_longtable {
            content.push_str("\\bottomrule\n\\end{longtable}\n");
        } else {
            content.push_str("\\bottomrule\n\\end{tabular}\n");
        }
        if report.latex_preamble {
            if !report.latex_longtable {
                content.push_str("\\end{adjustbox}\n\\end{table*}\n\\end{landscape}\n");
            }
            content.push_str("\\end{document}\n");
        }
        tracing::debug!("Rendered LaTeX table of {machine}: {vm_count} VMs");

        Ok(Self { content })
    }
}
