use super::*;

#[test]
fn max_label_width_with_labels() {
    let labels = ["Timber frame / South / Typical", "Masonry / North / Frugal"];
    let w = max_label_width(labels.iter().copied(), 4);
    assert_eq!(w, "Timber frame / South / Typical".len());
}

#[test]
fn max_label_width_empty() {
    let labels: Vec<&str> = vec![];
    let w = max_label_width(labels.into_iter(), 4);
    assert_eq!(w, 4);
}

#[test]
fn max_label_width_min_enforced() {
    let w = max_label_width(["a"].into_iter(), 10);
    assert_eq!(w, 10);
}

#[test]
fn max_label_width_counts_cells_not_bytes() {
    // "é" is two bytes but one terminal cell.
    let w = max_label_width(["béton"].into_iter(), 1);
    assert_eq!(w, 5);
}

#[test]
fn separator_width() {
    let s = separator(5);
    // Each ─ is 3 bytes in UTF-8
    assert_eq!(s.chars().count(), 5);
}

#[test]
fn print_json_stdout_works() {
    let data = vec![1, 2, 3];
    print_json_stdout(&data).unwrap();
}

#[test]
fn output_results_truncates() {
    let mut results = vec![1, 2, 3, 4, 5];
    let mut seen = 0;
    output_results(&mut results, 3, false, |_| Ok(()), |r| seen = r.len()).unwrap();
    assert_eq!(seen, 3);
    assert_eq!(results.len(), 3);
}
