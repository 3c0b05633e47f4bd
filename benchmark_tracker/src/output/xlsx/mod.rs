//!
//! XLSX output format for suite history.
//!

pub mod worksheet;

use crate::store::Store;
use crate::util;

use self::worksheet::Worksheet;

///
/// XLSX output format for suite history: one worksheet per suite,
/// one row per sample, one value column per bench name.
///
#[derive(Default)]
pub struct Xlsx {
    /// Per-suite worksheets.
    pub worksheets: Vec<Worksheet>,
}

impl Xlsx {
    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for worksheet in self.worksheets.into_iter() {
            workbook.push_worksheet(worksheet.into_inner());
        }
        workbook
    }
}

impl TryFrom<&Store> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(store: &Store) -> Result<Self, Self::Error> {
        let commit_header = ("Commit", 12);
        let date_header = ("Date", 28);

        let mut worksheets = Vec::with_capacity(store.entries.len());
        for (suite_name, samples) in store.entries.iter() {
            let mut worksheet =
                Worksheet::new(suite_name.as_str(), vec![commit_header, date_header])?;
            for sample in samples.iter() {
                let row = worksheet.add_sample_row(
                    util::shorten_commit_id(sample.commit.id.as_str()),
                    sample.date.to_rfc3339().as_str(),
                )?;
                for measurement in sample.benches.iter() {
                    worksheet.write_value(row, measurement.name.as_str(), measurement.value)?;
                }
            }
            worksheets.push(worksheet);
        }

        Ok(Self { worksheets })
    }
}
