use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::LoaderError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Cell contents treated as missing values.
pub const NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Marker printed for missing values in the plain table rendering.
const PLAIN_NULL: &str = "NaN";

/// Decodes file contents as UTF-8, dropping a leading byte-order mark.
pub(crate) fn decode_utf8(bytes: &[u8]) -> Result<String, LoaderError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    Ok(String::from_utf8(bytes.to_vec())?)
}

fn is_na(value: &str) -> bool {
    value.is_empty() || NA_VALUES.contains(&value)
}

/// Whether the content ends inside a quoted field. The csv reader closes an
/// open quote at end of input silently, which would fold every following row
/// into one cell. Quotes only open a field at its start; `""` inside a quoted
/// field is an escaped quote.
fn has_unterminated_quote(content: &str, delimiter: u8) -> bool {
    let mut in_quotes = false;
    let mut field_start = true;
    let mut bytes = content.bytes().peekable();

    while let Some(b) = bytes.next() {
        if in_quotes {
            if b == b'"' {
                if bytes.peek() == Some(&b'"') {
                    bytes.next();
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }

        match b {
            b'"' if field_start => {
                in_quotes = true;
                field_start = false;
            }
            b'\n' | b'\r' => field_start = true,
            _ if b == delimiter => field_start = true,
            _ => field_start = false,
        }
    }

    in_quotes
}

/// One data row. Values line up with the table headers; `None` is a missing cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<Option<String>>,
}

impl Record {
    pub fn new(values: Vec<Option<String>>) -> Self {
        Self { values }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(|v| v.as_deref())
    }

    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }
}

/// An in-memory delimited table: header names plus rows in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    /// Builds a table, padding short records with missing cells.
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        let width = headers.len();
        let records = records
            .into_iter()
            .map(|mut r| {
                r.values.resize(width, None);
                r
            })
            .collect();

        Self { headers, records }
    }

    /// Parses delimited bytes with a header row. A leading UTF-8 BOM is ignored.
    pub fn from_csv_bytes(bytes: &[u8], delimiter: u8) -> Result<Self, LoaderError> {
        let content = decode_utf8(bytes)?;
        if has_unterminated_quote(&content, delimiter) {
            return Err(LoaderError::UnterminatedQuote);
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(LoaderError::MissingHeader);
        }

        let mut records = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = result?;
            if record.len() > headers.len() {
                return Err(LoaderError::RowTooLong {
                    row: row + 1,
                    expected: headers.len(),
                    found: record.len(),
                });
            }

            let values = record
                .iter()
                .map(|v| if is_na(v) { None } else { Some(v.to_string()) })
                .collect();
            records.push(Record::new(values));
        }

        Ok(Self::new(headers, records))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Value of `column` in `record`, `None` when the cell is missing or the
    /// column does not exist.
    pub fn value<'a>(&self, record: &'a Record, column: &str) -> Option<&'a str> {
        self.column_index(column).and_then(|i| record.get(i))
    }

    /// Renders the whole table row-major: a header line, then one line per
    /// record, every column right-aligned to its widest cell and separated by
    /// a single space. Missing cells print as `NaN`.
    pub fn to_plain_string(&self) -> String {
        let cell = |r: &Record, i: usize| r.get(i).unwrap_or(PLAIN_NULL).to_string();

        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.records
                    .iter()
                    .map(|r| cell(r, i).chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |cells: Vec<String>| {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, &w)| format!("{c:>w$}"))
                .collect::<Vec<_>>()
                .join(" ")
        };

        std::iter::once(line(self.headers.clone()))
            .chain(
                self.records
                    .iter()
                    .map(|r| line((0..self.headers.len()).map(|i| cell(r, i)).collect())),
            )
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Where tables come from. The roster builder and the plain table loader take
/// one of these so the reader can be swapped without touching the rendering.
pub trait TableSource: Send + Sync {
    fn read_table(&self, path: &Path) -> Result<Table, LoaderError>;
}

impl<T> From<T> for Box<dyn TableSource>
where
    T: TableSource + 'static,
{
    fn from(source: T) -> Self {
        Box::new(source)
    }
}

/// Reads comma separated (or other single-byte delimited) files from disk.
#[derive(Debug, Clone)]
pub struct CsvTableSource {
    delimiter: u8,
}

impl CsvTableSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for CsvTableSource {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl TableSource for CsvTableSource {
    fn read_table(&self, path: &Path) -> Result<Table, LoaderError> {
        let bytes = std::fs::read(path)?;
        Table::from_csv_bytes(&bytes, self.delimiter)
    }
}
