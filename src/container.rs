//! ZIP container abstraction for XLSX workbooks.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Archive entry holding the shared string pool, when present.
pub const SHARED_STRINGS_ENTRY: &str = "xl/sharedStrings.xml";

/// XLSX package abstraction over a ZIP archive.
///
/// Provides read access to the worksheet and shared-strings entries of a
/// workbook. The archive is fully read into memory on open and is read-only
/// for the duration of a single parse.
pub struct XlsxContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

/// Decode XML bytes from an archive entry as UTF-8, stripping a BOM if present.
fn decode_xml_bytes(bytes: &[u8]) -> String {
    let bytes = match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => rest,
        _ => bytes,
    };
    String::from_utf8_lossy(bytes).into_owned()
}

impl XlsxContainer {
    /// Open an XLSX container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use courserank::container::XlsxContainer;
    ///
    /// let container = XlsxContainer::open("survey.xlsx")?;
    /// # Ok::<(), courserank::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create an XLSX container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if data.len() < ZIP_MAGIC.len() || data[..ZIP_MAGIC.len()] != ZIP_MAGIC {
            return Err(Error::InvalidData(
                "not a ZIP archive (bad magic bytes)".to_string(),
            ));
        }
        let cursor = Cursor::new(data);
        let archive = zip::ZipArchive::new(cursor)?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Create an XLSX container from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Archive entry path for a worksheet, by 1-based sheet index.
    pub fn worksheet_entry(sheet_index: usize) -> String {
        format!("xl/worksheets/sheet{}.xml", sheet_index)
    }

    /// Read an XML entry from the archive as a string.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingEntry(path.to_string()))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        Ok(decode_xml_bytes(&bytes))
    }

    /// Check if an entry exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        let archive = self.archive.borrow();
        let found = archive.file_names().any(|n| n == path);
        found
    }

    /// List all entries in the archive.
    pub fn list_entries(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        archive.file_names().map(String::from).collect()
    }
}

impl std::fmt::Debug for XlsxContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XlsxContainer")
            .field("entries", &self.list_entries().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn archive_with(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, content) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        buffer
    }

    #[test]
    fn test_worksheet_entry_path() {
        assert_eq!(XlsxContainer::worksheet_entry(1), "xl/worksheets/sheet1.xml");
        assert_eq!(XlsxContainer::worksheet_entry(3), "xl/worksheets/sheet3.xml");
    }

    #[test]
    fn test_read_xml_and_exists() {
        let data = archive_with(&[("xl/worksheets/sheet1.xml", "<worksheet/>")]);
        let container = XlsxContainer::from_bytes(data).unwrap();

        assert!(container.exists("xl/worksheets/sheet1.xml"));
        assert!(!container.exists(SHARED_STRINGS_ENTRY));

        let xml = container.read_xml("xl/worksheets/sheet1.xml").unwrap();
        assert_eq!(xml, "<worksheet/>");
    }

    #[test]
    fn test_missing_entry() {
        let data = archive_with(&[("xl/workbook.xml", "<workbook/>")]);
        let container = XlsxContainer::from_bytes(data).unwrap();

        let err = container.read_xml("xl/worksheets/sheet1.xml").unwrap_err();
        assert!(matches!(err, Error::MissingEntry(_)));
    }

    #[test]
    fn test_rejects_non_zip() {
        let err = XlsxContainer::from_bytes(b"this is not a zip".to_vec()).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_bom_stripped() {
        let mut content = Vec::new();
        content.extend_from_slice(&[0xEF, 0xBB, 0xBF]);
        content.extend_from_slice(b"<worksheet/>");
        let decoded = decode_xml_bytes(&content);
        assert_eq!(decoded, "<worksheet/>");
    }
}
