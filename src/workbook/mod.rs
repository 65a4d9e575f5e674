//! Workbook loader: fetch and parse the design-options spreadsheet.
//!
//! The workbook carries two sheets: the full option set and the curated
//! exemplar subset that anchors score normalization. Loading is a pure read;
//! the same workbook always parses to the same records in row order.

mod columns;

use std::error::Error;
use std::io::{Cursor, Read, Seek};
use std::path::PathBuf;
use std::time::Duration;

use calamine::{Data, Range, Reader, Xlsx, open_workbook_auto};

use crate::config::WorkbookConfig;
use crate::options::DesignOption;
pub use columns::Column;
use columns::resolve;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the workbook comes from.
#[derive(Debug, Clone)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    /// Human-readable origin for reports and error messages.
    pub fn describe(&self) -> String {
        match self {
            Source::Path(p) => p.display().to_string(),
            Source::Url(u) => u.clone(),
        }
    }
}

/// The two parsed sheets of the source workbook.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Full option set ("Sample dataset" sheet).
    pub options: Vec<DesignOption>,
    /// Curated exemplar subset ("5C" sheet), used for normalization anchors.
    pub subset: Vec<DesignOption>,
}

/// Load both sheets from the configured source.
pub fn load(source: &Source, cfg: &WorkbookConfig) -> Result<Dataset, Box<dyn Error>> {
    match source {
        Source::Path(path) => {
            let mut workbook = open_workbook_auto(path)
                .map_err(|e| format!("cannot open workbook {}: {e}", path.display()))?;
            read_dataset(&mut workbook, cfg)
        }
        Source::Url(url) => {
            let bytes = fetch(url)?;
            let mut workbook = Xlsx::new(Cursor::new(bytes))
                .map_err(|e| format!("cannot parse workbook from {url}: {e}"))?;
            read_dataset(&mut workbook, cfg)
        }
    }
}

/// Fetch the workbook bytes over HTTP(S). Non-2xx responses are errors.
fn fetch(url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("workbook fetch failed ({status}): {url}").into());
    }
    Ok(resp.bytes()?.to_vec())
}

fn read_dataset<RS, R>(workbook: &mut R, cfg: &WorkbookConfig) -> Result<Dataset, Box<dyn Error>>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: Error + 'static,
{
    let options = read_sheet(workbook, &cfg.dataset_sheet)?;
    let subset = read_sheet(workbook, &cfg.subset_sheet)?;
    Ok(Dataset { options, subset })
}

/// Read one named sheet into option records.
pub fn read_sheet<RS, R>(workbook: &mut R, sheet: &str) -> Result<Vec<DesignOption>, Box<dyn Error>>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: Error + 'static,
{
    if !workbook.sheet_names().iter().any(|n| n == sheet) {
        return Err(format!("sheet {sheet:?} not found in workbook").into());
    }
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| format!("cannot read sheet {sheet:?}: {e}"))?;
    parse_range(&range, sheet)
}

/// Parse a cell range: first row is the header, remaining rows are options.
/// Rows with missing or unparsable cells are skipped with a warning; a sheet
/// with only a header parses to an empty set.
pub fn parse_range(range: &Range<Data>, sheet: &str) -> Result<Vec<DesignOption>, Box<dyn Error>> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };

    let mut indices: Vec<(usize, Column)> = Vec::new();
    for (i, cell) in header.iter().enumerate() {
        if let Some(name) = cell_str(cell)
            && let Some(col) = resolve(&name)
        {
            indices.push((i, col));
        }
    }
    for col in Column::ALL {
        if !indices.iter().any(|(_, c)| *c == col) {
            return Err(format!("sheet {sheet:?} is missing column {:?}", col.name()).into());
        }
    }

    let mut options = Vec::new();
    for (row_idx, row) in rows.enumerate() {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        match parse_row(row, &indices) {
            Some(option) => options.push(option),
            None => {
                // Header row index 0 is the sheet's row 1, so +2 here.
                eprintln!("warning: sheet {sheet:?} row {}: skipping unparsable row", row_idx + 2);
            }
        }
    }
    Ok(options)
}

fn parse_row(row: &[Data], indices: &[(usize, Column)]) -> Option<DesignOption> {
    let cell = |col: Column| {
        indices
            .iter()
            .find(|(_, c)| *c == col)
            .and_then(|(i, _)| row.get(*i))
    };

    Some(DesignOption {
        fabric: cell_str(cell(Column::Fabric)?)?,
        orientation: cell_str(cell(Column::Orientation)?)?,
        behaviour: cell_str(cell(Column::Behaviour)?)?,
        cost: cell_f64(cell(Column::Cost)?)?,
        carbon: cell_f64(cell(Column::Carbon)?)?,
        comfort_metric: cell_i64(cell(Column::ComfortMetric)?)?,
        compliance_metric: cell_i64(cell(Column::ComplianceMetric)?)?,
        circularity: cell_f64(cell(Column::Circularity)?)?,
    })
}

/// String content of a cell; numeric cells render without a trailing `.0`.
fn cell_str(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::Float(f) if f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        Data::Float(f) => Some(format!("{f}")),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn cell_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn cell_i64(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.fract() == 0.0 => Some(*f as i64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
