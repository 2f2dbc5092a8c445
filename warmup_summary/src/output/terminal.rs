//!
//! Colored terminal report.
//!

use colored::ColoredString;
use colored::Colorize;

use crate::diff::change::Change;
use crate::model::category::Category;
use crate::summary::benchmark::BenchmarkSummary;

use super::report::Report;

///
/// Colored terminal report.
///
#[derive(Debug, Clone, Copy)]
pub struct Terminal<'a> {
    /// The report to print.
    pub report: &'a Report<'a>,
}

impl<'a> Terminal<'a> {
    /// Width of the benchmark name column.
    const NAME_WIDTH: usize = 28;

    /// Width of the box contents.
    const WIDTH: usize = 96;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(report: &'a Report<'a>) -> Self {
        Self { report }
    }

    ///
    /// Prints the report to a writer.
    ///
    pub fn write_all<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        let comparison = self.report.comparison()?;
        let (machine, vms) = self.report.vms()?;

        let title = format!("Warmup summary of {machine}");
        writeln!(
            w,
            "╔═╡ {} ╞{}╗",
            title.bright_white(),
            "═".repeat(Self::WIDTH.saturating_sub(title.chars().count() + 4))
        )?;
        for (vm_index, (vm, benchmarks)) in vms.into_iter().enumerate() {
            if vm_index > 0 {
                writeln!(w, "╟{}╢", "─".repeat(Self::WIDTH))?;
            }
            writeln!(
                w,
                "║ {} {:width$}║",
                vm.bright_white(),
                "",
                width = Self::WIDTH.saturating_sub(vm.chars().count() + 2)
            )?;
            for (name, summary) in benchmarks.iter() {
                let change = comparison
                    .as_ref()
                    .and_then(|comparison| comparison.diff.get(vm, name))
                    .and_then(|changes| changes.steady_state_time);
                let line = format!(
                    "{:name_width$} {:20} {:>18} {:>24}",
                    Self::truncate(name.as_str(), Self::NAME_WIDTH),
                    summary.classification.as_str(),
                    Self::iteration(summary),
                    Self::time(summary),
                    name_width = Self::NAME_WIDTH,
                );
                writeln!(
                    w,
                    "║ {}{:width$} ║",
                    Self::paint(line.as_str(), summary.classification, change),
                    "",
                    width = Self::WIDTH.saturating_sub(line.chars().count() + 2)
                )?;
            }
        }
        writeln!(w, "╚{}╝", "═".repeat(Self::WIDTH))?;

        if let Some(comparison) = comparison {
            for (benchmark, vm) in comparison.diff.skipped_before.iter() {
                writeln!(w, "{} {vm}/{benchmark}: new in this run", "Skipped".yellow())?;
            }
            for (benchmark, vm) in comparison.diff.skipped_after.iter() {
                writeln!(w, "{} {vm}/{benchmark}: missing from this run", "Skipped".yellow())?;
            }
        }
        Ok(())
    }

    ///
    /// Colors a line by the steady-state time change, or by the classification.
    ///
    fn paint(line: &str, classification: Category, change: Option<Change>) -> ColoredString {
        match change {
            Some(Change::Better) => return line.green(),
            Some(Change::Worse) => return line.bright_red(),
            Some(Change::Different) => return line.yellow(),
            Some(Change::Same) | None => {}
        }
        match classification {
            Category::Flat | Category::Warmup | Category::GoodInconsistent => line.normal(),
            Category::Slowdown | Category::BadInconsistent => line.yellow(),
            Category::NoSteadyState | Category::Timeout | Category::Errored => line.bright_red(),
        }
    }

    ///
    /// Formats the steady-state iteration column.
    ///
    fn iteration(summary: &BenchmarkSummary) -> String {
        match summary
            .steady_state_iteration
            .zip(summary.steady_state_time_to_reach_secs)
        {
            Some((iteration, time_to_reach)) => format!("#{iteration:.1} @ {time_to_reach:.3}s"),
            None => String::new(),
        }
    }

    ///
    /// Formats the steady-state time column.
    ///
    fn time(summary: &BenchmarkSummary) -> String {
        match summary.steady_state_time.zip(summary.steady_state_time_ci) {
            Some((time, ci)) => format!("{time:.5}s ±{ci:.6}"),
            None => String::new(),
        }
    }

    ///
    /// Shortens a name to the column width.
    ///
    fn truncate(name: &str, width: usize) -> String {
        if name.chars().count() <= width {
            return name.to_owned();
        }
        let mut truncated: String = name.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}
