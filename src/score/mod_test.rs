use super::*;
use crate::classify::ColorCategory;

fn option(cost: f64, carbon: f64, comfort: i64, compliance: i64, circ: f64) -> DesignOption {
    DesignOption {
        fabric: "Timber frame".to_string(),
        orientation: "South".to_string(),
        behaviour: "Typical".to_string(),
        cost,
        carbon,
        comfort_metric: comfort,
        compliance_metric: compliance,
        circularity: circ,
    }
}

fn anchors() -> Anchors {
    Anchors {
        cost_best: 100.0,
        cost_worst: 1000.0,
        carbon_best: 10.0,
        carbon_worst: 100.0,
    }
}

#[test]
fn score_option_combines_all_dimensions() {
    let s = score_option(&option(500.0, 10.0, 0, 5, 100.0), &anchors());
    assert!((s.cost - 72.2222).abs() < 0.01, "cost 500 should band to ~72.22, got {}", s.cost);
    assert!((s.carbon - 90.0).abs() < 0.01, "best carbon should band to 90, got {}", s.carbon);
    assert!((s.comfort - 90.0).abs() < 0.01);
    assert!((s.compliance - 90.0).abs() < 0.01);
    assert!((s.circularity - 90.0).abs() < 0.01);
}

#[test]
fn score_all_preserves_order_and_length() {
    let opts = vec![
        option(100.0, 10.0, 0, 5, 100.0),
        option(1000.0, 100.0, 2, 1, 0.0),
        option(550.0, 55.0, 1, 3, 50.0),
    ];
    let scored = score_all(&opts, &anchors());
    assert_eq!(scored.len(), 3);
    for (s, o) in scored.iter().zip(&opts) {
        assert_eq!(s.option, *o, "scoring must not reorder or mutate options");
    }
}

#[test]
fn best_exemplar_is_purple() {
    // Best cost/carbon, comfortable, top tier, full circularity: all five at 90.
    let scored = score_all(&[option(100.0, 10.0, 0, 5, 100.0)], &anchors());
    assert_eq!(scored[0].category, ColorCategory::Purple);
}

#[test]
fn floor_scores_are_goldenrod_not_red() {
    // The worst anchors land every dimension at the band floor (50), which
    // the red rule (strictly below 50) must not catch.
    let scored = score_all(&[option(1000.0, 100.0, 2, 1, 0.0)], &anchors());
    assert_ne!(scored[0].category, ColorCategory::Red);
    assert_eq!(scored[0].category, ColorCategory::Goldenrod);
}

#[test]
fn underheating_option_is_blue() {
    let scored = score_all(&[option(100.0, 10.0, -1, 5, 100.0)], &anchors());
    assert_eq!(scored[0].category, ColorCategory::Blue);
}

#[test]
fn category_counts_cover_all_categories() {
    let opts = vec![
        option(100.0, 10.0, 0, 5, 100.0),  // purple
        option(100.0, 10.0, -1, 5, 100.0), // blue
        option(1000.0, 100.0, 2, 1, 0.0),  // goldenrod
    ];
    let scored = score_all(&opts, &anchors());
    let counts = category_counts(&scored);
    assert_eq!(counts.len(), ColorCategory::ALL.len());
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    assert_eq!(total, 3, "every option lands in exactly one category");
    for (cat, n) in counts {
        match cat {
            ColorCategory::Purple | ColorCategory::Blue | ColorCategory::Goldenrod => {
                assert_eq!(n, 1, "{cat} should have one option")
            }
            _ => assert_eq!(n, 0, "{cat} should be empty"),
        }
    }
}

#[test]
fn degenerate_anchors_score_neutral() {
    let a = Anchors {
        cost_best: 500.0,
        cost_worst: 500.0,
        carbon_best: 50.0,
        carbon_worst: 50.0,
    };
    let s = score_option(&option(500.0, 50.0, 0, 3, 50.0), &a);
    assert!((s.cost - 50.0).abs() < 0.01, "flat cost anchors should score 50, got {}", s.cost);
    assert!((s.carbon - 50.0).abs() < 0.01);
}
