//!
//! Summary report output.
//!

pub mod format;
pub mod html;
pub mod json;
pub mod latex;
pub mod report;
pub mod style;
pub mod terminal;
pub mod xlsx;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use crate::output::format::Format;
use crate::output::html::Html;
use crate::output::json::Json;
use crate::output::latex::Latex;
use crate::output::report::Report;
use crate::output::terminal::Terminal;
use crate::output::xlsx::Xlsx;

///
/// Rendered summary report.
///
pub enum Output {
    /// Report output is a single unnamed file.
    SingleFile(String),
    /// Report output is a single unnamed spreadsheet.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the report to a file.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path.as_path())
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
        }
        tracing::info!("Report written to {path:?}");
        Ok(())
    }
}

impl TryFrom<(&Report<'_>, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((report, output_format): (&Report<'_>, Format)) -> Result<Self, Self::Error> {
        Ok(match output_format {
            Format::Json => {
                report.summary.check_version()?;
                Json::from(report.summary).into()
            }
            Format::Latex => Latex::try_from(report)?.into(),
            Format::Html => Html::try_from(report)?.into(),
            Format::Xlsx => Xlsx::try_from(report)?.into(),
            Format::Terminal => {
                let mut buffer = Vec::with_capacity(4096);
                Terminal::new(report).write_all(&mut buffer)?;
                Output::SingleFile(String::from_utf8_lossy(buffer.as_slice()).into_owned())
            }
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Latex> for Output {
    fn from(value: Latex) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Html> for Output {
    fn from(value: Html) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
