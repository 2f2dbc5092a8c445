//!
//! XLSX worksheet for benchmark summaries.
//!

use std::collections::HashMap;

///
/// XLSX worksheet for benchmark summaries.
///
#[derive(Default)]
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// Benchmark row indexes in the worksheet.
    pub rows: HashMap<String, u32>,
    /// Row header names and their column widths.
    pub headers: Vec<(&'static str, usize)>,
    /// Value column names.
    pub columns: Vec<&'static str>,
}

impl Worksheet {
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 14;

    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(
        name: &str,
        headers: Vec<(&'static str, usize)>,
        columns: Vec<&'static str>,
    ) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name.to_owned(),
                &Self::worksheet_caption_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }
        for (column_index, column_name) in columns.iter().enumerate() {
            let column_index = (headers.len() + column_index) as u16;
            worksheet.set_column_width(column_index, Self::VALUE_COLUMN_WIDTH as f64)?;
            worksheet.write_with_format(
                0,
                column_index,
                column_name.replace(' ', "\n"),
                &Self::column_header_format(),
            )?;
        }

        Ok(Self {
            worksheet,
            rows: HashMap::new(),
            headers,
            columns,
        })
    }

    ///
    /// Adds a new row for a benchmark, or returns the existing one.
    ///
    pub fn benchmark_row(
        &mut self,
        vm: &str,
        benchmark: &str,
        classification: &str,
    ) -> anyhow::Result<u32> {
        let row_identifier = format!("{vm}/{benchmark}");
        if let Some(index) = self.rows.get(row_identifier.as_str()) {
            return Ok(*index);
        }

        let row_index = (self.rows.len() as u32) + 1;
        self.rows.insert(row_identifier, row_index);
        for (column_index, value) in [vm, benchmark, classification].into_iter().enumerate() {
            self.worksheet.write_with_format(
                row_index,
                column_index as u16,
                value.to_owned(),
                &Self::row_header_format(),
            )?;
        }
        Ok(row_index)
    }

    ///
    /// Writes a value of a benchmark row. Undefined values leave the cell empty.
    ///
    pub fn write_value(
        &mut self,
        row_index: u32,
        column_index: usize,
        value: Option<f64>,
    ) -> anyhow::Result<()> {
        let Some(value) = value.filter(|value| value.is_finite()) else {
            return Ok(());
        };
        self.worksheet.write_with_format(
            row_index,
            (self.headers.len() + column_index) as u16,
            value,
            &Self::value_format(),
        )?;
        Ok(())
    }

    ///
    /// Sets medians for each value column in the worksheet.
    ///
    pub fn set_medians(&mut self) -> anyhow::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let last_data_row_index = self.rows.len() + 1;
        let value_row_index = last_data_row_index as u32;

        for column_index in 0..self.headers.len() {
            let caption = if column_index == self.headers.len() - 1 {
                "Median"
            } else {
                ""
            };
            self.worksheet.write_with_format(
                value_row_index,
                column_index as u16,
                caption,
                &Self::row_header_summary_format(),
            )?;
        }

        for column_index in 0..self.columns.len() {
            let column_index = (self.headers.len() + column_index) as u16;
            let column_name = Self::column_identifier(column_index);
            let formula = format!(
                r#"IFERROR(MEDIAN({column_name}2:{column_name}{last_data_row_index}), "")"#
            );
            self.worksheet.write_formula_with_format(
                value_row_index,
                column_index,
                formula.as_str(),
                &Self::value_format(),
            )?;
        }

        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the alphabetical column identifier by its zero-based index.
    ///
    pub fn column_identifier(index: u16) -> String {
        let mut identifier = String::new();
        let mut index = (index as u32) + 1;

        while index > 0 {
            let remainder = (index - 1) % 26;
            identifier.insert(0, (b'A' + remainder as u8) as char);
            index = (index - 1) / 26;
        }

        identifier
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(16)
            .set_font_color("#FFFFFF")
            .set_background_color("#4C6EF5")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_align(rust_xlsxwriter::FormatAlign::VerticalCenter)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#EEF3FF")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_align(rust_xlsxwriter::FormatAlign::Top)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#DDE6FF")
            .set_align(rust_xlsxwriter::FormatAlign::Left)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_summary_format() -> rust_xlsxwriter::Format {
        Self::row_header_format()
            .set_font_size(16)
            .set_bold()
            .set_align(rust_xlsxwriter::FormatAlign::Right)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#000000")
            .set_background_color("#FFFFFF")
            .set_align(rust_xlsxwriter::FormatAlign::Right)
            .set_border(rust_xlsxwriter::FormatBorder::None)
            .set_num_format("0.000000")
    }
}
