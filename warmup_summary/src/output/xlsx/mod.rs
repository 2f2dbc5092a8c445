//!
//! XLSX output format for benchmark summaries.
//!

pub mod worksheet;

use crate::output::report::Report;

use self::worksheet::Worksheet;

///
/// XLSX output format for benchmark summaries.
///
#[derive(Default)]
pub struct Xlsx {
    /// Worksheet with a row per VM and benchmark.
    pub summary_worksheet: Worksheet,
}

impl Xlsx {
    ///
    /// Creates a new XLSX workbook.
    ///
    pub fn new() -> anyhow::Result<Self> {
        let summary_worksheet = Worksheet::new(
            "Summary",
            vec![("VM", 20), ("Benchmark", 30), ("Classification", 20)],
            vec![
                "Steady iteration",
                "Steady iteration IQR low",
                "Steady iteration IQR high",
                "Time to steady (s)",
                "Time to steady IQR low",
                "Time to steady IQR high",
                "Steady time (s)",
                "Steady time CI",
            ],
        )?;
        Ok(Self { summary_worksheet })
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(self.summary_worksheet.into_inner());
        workbook
    }
}

impl TryFrom<&Report<'_>> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(report: &Report<'_>) -> Result<Self, Self::Error> {
        let mut xlsx = Self::new()?;

        let (_, vms) = report.vms()?;
        for (vm, benchmarks) in vms.into_iter() {
            for (name, summary) in benchmarks.iter() {
                let row_index = xlsx.summary_worksheet.benchmark_row(
                    vm,
                    name.as_str(),
                    summary.classification.as_str(),
                )?;
                let iteration_iqr = summary.steady_state_iteration_iqr;
                let time_to_reach_iqr = summary.steady_state_time_to_reach_secs_iqr;
                let values = [
                    summary.steady_state_iteration,
                    iteration_iqr.map(|(low, _)| low),
                    iteration_iqr.map(|(_, high)| high),
                    summary.steady_state_time_to_reach_secs,
                    time_to_reach_iqr.map(|(low, _)| low),
                    time_to_reach_iqr.map(|(_, high)| high),
                    summary.steady_state_time,
                    summary.steady_state_time_ci,
                ];
                for (column_index, value) in values.into_iter().enumerate() {
                    xlsx.summary_worksheet
                        .write_value(row_index, column_index, value)?;
                }
            }
        }
        xlsx.summary_worksheet.set_medians()?;

        Ok(xlsx)
    }
}
