use super::*;
use crate::config::WorkbookConfig;

fn header() -> Vec<Data> {
    [
        "Fabric",
        "Orientation",
        "User behaviour",
        "Cost",
        "Carbon",
        "Comfort - metric",
        "Compliance - metric",
        "Circularity",
    ]
    .iter()
    .map(|h| Data::String(h.to_string()))
    .collect()
}

fn data_row(fabric: &str, cost: f64, carbon: f64, comfort: i64, compliance: i64) -> Vec<Data> {
    vec![
        Data::String(fabric.to_string()),
        Data::String("South".to_string()),
        Data::String("Typical".to_string()),
        Data::Float(cost),
        Data::Float(carbon),
        Data::Int(comfort),
        Data::Int(compliance),
        Data::Float(65.0),
    ]
}

fn build_range(rows: &[Vec<Data>]) -> Range<Data> {
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    if rows.is_empty() || cols == 0 {
        return Range::empty();
    }
    let mut range = Range::new((0, 0), (rows.len() as u32 - 1, cols as u32 - 1));
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            range.set_value((r as u32, c as u32), cell.clone());
        }
    }
    range
}

#[test]
fn parses_rows_in_order() {
    let range = build_range(&[
        header(),
        data_row("Timber frame", 180_000.0, 35_000.0, 0, 4),
        data_row("Masonry", 150_000.0, 48_000.0, 1, 2),
    ]);
    let options = parse_range(&range, "Sample dataset").unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].fabric, "Timber frame");
    assert_eq!(options[0].behaviour, "Typical");
    assert_eq!(options[0].comfort_metric, 0);
    assert_eq!(options[0].compliance_metric, 4);
    assert!((options[0].cost - 180_000.0).abs() < 1e-9);
    assert_eq!(options[1].fabric, "Masonry", "row order must be preserved");
}

#[test]
fn repeated_parses_are_identical() {
    let range = build_range(&[
        header(),
        data_row("Timber frame", 180_000.0, 35_000.0, 0, 4),
        data_row("Masonry", 150_000.0, 48_000.0, 1, 2),
    ]);
    let first = parse_range(&range, "Sample dataset").unwrap();
    let second = parse_range(&range, "Sample dataset").unwrap();
    assert_eq!(first, second, "the loader is a pure read");
}

#[test]
fn missing_column_is_an_error() {
    let mut head = header();
    head.remove(3); // drop "Cost"
    let range = build_range(&[head, data_row("Timber frame", 1.0, 1.0, 0, 1)]);
    let err = parse_range(&range, "Sample dataset").unwrap_err();
    assert!(
        err.to_string().contains("cost"),
        "error should name the missing column, got: {err}"
    );
}

#[test]
fn unparsable_row_is_skipped() {
    let mut bad = data_row("Masonry", 0.0, 0.0, 0, 1);
    bad[3] = Data::String("not a number".to_string());
    let range = build_range(&[
        header(),
        data_row("Timber frame", 180_000.0, 35_000.0, 0, 4),
        bad,
    ]);
    let options = parse_range(&range, "Sample dataset").unwrap();
    assert_eq!(options.len(), 1, "the bad row should be skipped, not fail the sheet");
    assert_eq!(options[0].fabric, "Timber frame");
}

#[test]
fn blank_rows_are_skipped_silently() {
    let blank = vec![Data::Empty; 8];
    let range = build_range(&[
        header(),
        blank,
        data_row("Timber frame", 180_000.0, 35_000.0, 0, 4),
    ]);
    let options = parse_range(&range, "Sample dataset").unwrap();
    assert_eq!(options.len(), 1);
}

#[test]
fn header_only_sheet_is_empty() {
    let range = build_range(&[header()]);
    let options = parse_range(&range, "Sample dataset").unwrap();
    assert!(options.is_empty());
}

#[test]
fn empty_sheet_is_empty() {
    let range: Range<Data> = Range::empty();
    let options = parse_range(&range, "Sample dataset").unwrap();
    assert!(options.is_empty());
}

#[test]
fn extra_columns_are_ignored() {
    let mut head = header();
    head.push(Data::String("Notes".to_string()));
    let mut row = data_row("Timber frame", 180_000.0, 35_000.0, 0, 4);
    row.push(Data::String("ignore me".to_string()));
    let range = build_range(&[head, row]);
    let options = parse_range(&range, "Sample dataset").unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].fabric, "Timber frame");
}

#[test]
fn numeric_descriptor_cells_render_as_text() {
    let mut row = data_row("Timber frame", 180_000.0, 35_000.0, 0, 4);
    row[1] = Data::Float(180.0); // orientation given in degrees
    let range = build_range(&[header(), row]);
    let options = parse_range(&range, "Sample dataset").unwrap();
    assert_eq!(options[0].orientation, "180");
}

#[test]
fn string_metric_cells_parse() {
    let mut row = data_row("Timber frame", 0.0, 35_000.0, 0, 4);
    row[3] = Data::String(" 180000 ".to_string());
    row[5] = Data::String("-1".to_string());
    let range = build_range(&[header(), row]);
    let options = parse_range(&range, "Sample dataset").unwrap();
    assert!((options[0].cost - 180_000.0).abs() < 1e-9);
    assert_eq!(options[0].comfort_metric, -1);
}

#[test]
fn load_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = Source::Path(dir.path().join("missing.xlsx"));
    let err = load(&source, &WorkbookConfig::default()).unwrap_err();
    assert!(
        err.to_string().contains("cannot open workbook"),
        "should report the open failure, got: {err}"
    );
}

#[test]
fn load_garbage_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not-a-workbook.xlsx");
    std::fs::write(&path, b"this is not a spreadsheet").unwrap();
    let source = Source::Path(path);
    assert!(load(&source, &WorkbookConfig::default()).is_err());
}
