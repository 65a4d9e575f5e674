use super::*;

const CONTAINER: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 800.0,
    height: 600.0,
};

const PANEL: Size = Size {
    width: 200.0,
    height: 150.0,
};

fn assert_inside(p: Point, panel: Size, container: Rect) {
    assert!(p.x >= container.x, "panel left edge {} outside container", p.x);
    assert!(p.y >= container.y, "panel top edge {} outside container", p.y);
    assert!(
        p.x + panel.width <= container.right(),
        "panel right edge {} overflows container",
        p.x + panel.width
    );
    assert!(
        p.y + panel.height <= container.bottom(),
        "panel bottom edge {} overflows container",
        p.y + panel.height
    );
}

#[test]
fn default_placement_is_below_right() {
    let p = place(Point { x: 100.0, y: 100.0 }, PANEL, CONTAINER);
    assert!(p.x > 100.0, "panel should sit right of the cursor");
    assert!(p.y > 100.0, "panel should sit below the cursor");
    assert_inside(p, PANEL, CONTAINER);
}

#[test]
fn flips_left_near_right_edge() {
    let p = place(Point { x: 750.0, y: 100.0 }, PANEL, CONTAINER);
    assert!(p.x + PANEL.width <= 750.0, "panel should flip to the left of the cursor");
    assert_inside(p, PANEL, CONTAINER);
}

#[test]
fn flips_above_near_bottom_edge() {
    let p = place(Point { x: 100.0, y: 580.0 }, PANEL, CONTAINER);
    assert!(p.y + PANEL.height <= 580.0, "panel should flip above the cursor");
    assert_inside(p, PANEL, CONTAINER);
}

#[test]
fn flips_both_in_bottom_right_corner() {
    let p = place(Point { x: 790.0, y: 590.0 }, PANEL, CONTAINER);
    assert_inside(p, PANEL, CONTAINER);
    assert!(p.x + PANEL.width <= 790.0);
    assert!(p.y + PANEL.height <= 590.0);
}

#[test]
fn clamps_in_top_left_corner() {
    // Flipping left/above from the corner would push the panel negative;
    // clamping must bring it back inside.
    let container = Rect {
        x: 0.0,
        y: 0.0,
        width: 220.0,
        height: 170.0,
    };
    let p = place(Point { x: 210.0, y: 160.0 }, PANEL, container);
    assert_inside(p, PANEL, container);
}

#[test]
fn oversized_panel_pins_to_origin() {
    let tiny = Rect {
        x: 10.0,
        y: 20.0,
        width: 100.0,
        height: 80.0,
    };
    let p = place(Point { x: 50.0, y: 50.0 }, PANEL, tiny);
    assert_eq!(p.x, tiny.x, "oversized panel should pin to the container's left edge");
    assert_eq!(p.y, tiny.y, "oversized panel should pin to the container's top edge");
}

#[test]
fn container_offset_is_respected() {
    let container = Rect {
        x: 300.0,
        y: 200.0,
        width: 400.0,
        height: 300.0,
    };
    let p = place(Point { x: 320.0, y: 220.0 }, PANEL, container);
    assert_inside(p, PANEL, container);
}

#[test]
fn debouncer_fires_once_per_interval() {
    let mut debouncer = Debouncer::new(Duration::from_millis(10));
    let start = Instant::now();
    assert!(debouncer.ready(start), "first request should fire");
    assert!(!debouncer.ready(start + Duration::from_millis(3)), "burst should be swallowed");
    assert!(!debouncer.ready(start + Duration::from_millis(9)));
    assert!(debouncer.ready(start + Duration::from_millis(11)), "next interval should fire");
    assert!(!debouncer.ready(start + Duration::from_millis(12)));
}
