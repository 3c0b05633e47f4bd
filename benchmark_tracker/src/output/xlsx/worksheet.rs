//!
//! XLSX worksheet for one suite's history.
//!

use std::collections::HashMap;

///
/// XLSX worksheet for one suite's history.
/// Rows are samples; a value column is allocated for every bench name.
///
#[derive(Default)]
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// Bench column indexes, allocated in order of first appearance.
    pub bench_columns: HashMap<String, u16>,
    /// Header names and their column widths.
    pub headers: Vec<(&'static str, usize)>,
    /// The next free sample row.
    pub next_row: u32,
}

impl Worksheet {
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 14;

    /// Worksheet name length limit imposed by the XLSX format.
    const NAME_LENGTH_LIMIT: usize = 31;

    ///
    /// Creates a new worksheet with the given name.
    /// The name is sanitized and truncated to what the XLSX format allows.
    ///
    pub fn new(name: &str, headers: Vec<(&'static str, usize)>) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        let worksheet_name: String = name
            .chars()
            .map(|character| {
                if matches!(character, '[' | ']' | ':' | '*' | '?' | '/' | '\\') {
                    '_'
                } else {
                    character
                }
            })
            .take(Self::NAME_LENGTH_LIMIT)
            .collect();
        worksheet.set_name(worksheet_name)?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name.to_owned(),
                &Self::caption_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }

        Ok(Self {
            worksheet,
            bench_columns: HashMap::new(),
            headers,
            next_row: 1,
        })
    }

    ///
    /// Allocates a column for a bench name or returns an existing one.
    ///
    pub fn bench_column(&mut self, bench_name: &str) -> anyhow::Result<u16> {
        if let Some(column) = self.bench_columns.get(bench_name) {
            return Ok(*column);
        }

        let column = (self.headers.len() + self.bench_columns.len()) as u16;
        self.bench_columns.insert(bench_name.to_owned(), column);
        self.worksheet
            .set_column_width(column, Self::VALUE_COLUMN_WIDTH as f64)?;
        self.worksheet.write_with_format(
            0,
            column,
            bench_name.to_owned(),
            &Self::caption_format(),
        )?;
        Ok(column)
    }

    ///
    /// Adds a row for a sample and returns its index.
    ///
    pub fn add_sample_row(&mut self, commit_id: &str, date: &str) -> anyhow::Result<u32> {
        let row = self.next_row;
        self.next_row += 1;
        self.worksheet
            .write_with_format(row, 0, commit_id.to_owned(), &Self::row_header_format())?;
        self.worksheet
            .write_with_format(row, 1, date.to_owned(), &Self::row_header_format())?;
        Ok(row)
    }

    ///
    /// Writes one measured value into a sample row.
    ///
    pub fn write_value(&mut self, row: u32, bench_name: &str, value: f64) -> anyhow::Result<()> {
        let column = self.bench_column(bench_name)?;
        self.worksheet
            .write_with_format(row, column, value, &Self::value_format())?;
        Ok(())
    }

    ///
    /// Returns the inner worksheet.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn caption_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(14);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_num_format("0.0000");
        format
    }
}
