//!
//! Benchmark history output.
//!

pub mod csv;
pub mod file;
pub mod format;
pub mod json;
pub mod xlsx;

use std::path::PathBuf;

use crate::store::Store;

use self::csv::Csv;
use self::file::File;
use self::format::Format as OutputFormat;
use self::json::Json;
use self::xlsx::Xlsx;

///
/// Benchmark history prepared for writing to disk.
///
pub enum Output {
    /// The output is a single unnamed file.
    SingleFile(String),
    /// The output is structured as a file tree, relative to some
    /// user-provided output directory.
    MultipleFiles(Vec<File>),
    /// The output is a spreadsheet workbook.
    Workbook(Box<rust_xlsxwriter::Workbook>),
}

impl Output {
    ///
    /// Writes the output to a file or directory.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(contents) => {
                std::fs::write(path.as_path(), contents)
                    .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
            }
            Output::MultipleFiles(files) => {
                if !files.is_empty() {
                    std::fs::create_dir_all(&path)?;
                }
                for File {
                    path: relative_path,
                    contents,
                } in files
                {
                    let file_path = path.join(relative_path);
                    std::fs::write(file_path.as_path(), contents).map_err(|error| {
                        anyhow::anyhow!("Output file {file_path:?} writing: {error}")
                    })?;
                }
            }
            Output::Workbook(mut workbook) => {
                workbook.save(path.as_path()).map_err(|error| {
                    anyhow::anyhow!("Output workbook {path:?} writing: {error}")
                })?;
            }
        }
        Ok(())
    }
}

impl TryFrom<(Store, OutputFormat)> for Output {
    type Error = anyhow::Error;

    fn try_from((store, output_format): (Store, OutputFormat)) -> Result<Self, Self::Error> {
        Ok(match output_format {
            OutputFormat::Json => Json::from(store).into(),
            OutputFormat::Csv => Csv::from(store).into(),
            OutputFormat::Xlsx => Xlsx::try_from(&store)?.into(),
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::MultipleFiles(value.files)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::Workbook(Box::new(value.finalize()))
    }
}
