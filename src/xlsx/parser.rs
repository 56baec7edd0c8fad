//! XLSX survey parser implementation.

use log::debug;

use crate::container::{XlsxContainer, SHARED_STRINGS_ENTRY};
use crate::error::Result;
use crate::model::{RawRow, SurveyTable};

use std::path::Path;

use super::shared_strings::SharedStrings;
use super::table;
use super::worksheet;

/// Parser for a survey workbook.
///
/// Reads one worksheet (by 1-based index, default 1) and assembles it into a
/// [`SurveyTable`] under the fixed metadata-row convention.
pub struct XlsxParser {
    container: XlsxContainer,
    shared_strings: SharedStrings,
    sheet_index: usize,
}

impl XlsxParser {
    /// Open an XLSX file for parsing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = XlsxContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = XlsxContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    fn from_container(container: XlsxContainer) -> Result<Self> {
        // A workbook without a shared-strings entry gets an empty pool; any
        // cell that then declares a shared-string type fails at resolution.
        let shared_strings = if container.exists(SHARED_STRINGS_ENTRY) {
            SharedStrings::parse(&container.read_xml(SHARED_STRINGS_ENTRY)?)?
        } else {
            SharedStrings::default()
        };
        debug!("shared string pool: {} entries", shared_strings.len());

        Ok(Self {
            container,
            shared_strings,
            sheet_index: 1,
        })
    }

    /// Select the worksheet to parse (1-based index; the default is 1).
    pub fn with_sheet_index(mut self, sheet_index: usize) -> Self {
        self.sheet_index = sheet_index;
        self
    }

    /// Parse the selected worksheet into raw rows.
    pub fn parse_rows(&self) -> Result<Vec<RawRow>> {
        let entry = XlsxContainer::worksheet_entry(self.sheet_index);
        let xml = self.container.read_xml(&entry)?;
        worksheet::parse_worksheet(&xml, &self.shared_strings)
    }

    /// Parse the selected worksheet and assemble the survey table.
    pub fn parse(&self) -> Result<SurveyTable> {
        let rows = self.parse_rows()?;
        table::assemble(&rows)
    }

    /// Get a reference to the underlying container.
    pub fn container(&self) -> &XlsxContainer {
        &self.container
    }

    /// Get a reference to the shared string pool.
    pub fn shared_strings(&self) -> &SharedStrings {
        &self.shared_strings
    }
}
