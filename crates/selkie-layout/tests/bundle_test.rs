use selkie_graph::counter_clockwise_order;
use selkie_graph::fixtures::map1;
use selkie_graph::geom::line;
use selkie_graph::{Point, point};
use selkie_layout::{
    BundleOptions, Error, PathLayout, Slot, bundle_curve, bundle_points, crossing_point, layout,
};

fn assert_near(actual: Point, expected: Point) {
    assert!(
        (actual - expected).length() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn lanes_are_spaced_around_the_centre() {
    let l = line((0.0, 0.0), (10.0, 0.0));
    let xs: Vec<f64> = (0..4)
        .map(|i| crossing_point(&l, i, 4, 0.3).position.x)
        .collect();
    for (x, expected) in xs.iter().zip([4.55, 4.85, 5.15, 5.45]) {
        assert!((x - expected).abs() < 1e-9, "{xs:?}");
    }
    assert_eq!(crossing_point(&l, 0, 4, 0.3).normal, selkie_graph::vector(0.0, 1.0));
}

#[test]
fn short_portals_squeeze_the_bundle() {
    let l = line((0.0, 0.0), (0.0, 0.5));
    let ys: Vec<f64> = (0..4)
        .map(|i| crossing_point(&l, i, 4, 0.3).position.y)
        .collect();
    for w in ys.windows(2) {
        assert!(w[0] < w[1]);
    }
    assert!(ys.iter().all(|&y| (0.0..=0.5).contains(&y)));
}

#[test]
fn one_or_two_lanes_do_not_spread() {
    let l = line((0.0, 0.0), (10.0, 0.0));
    assert_near(crossing_point(&l, 0, 1, 0.3).position, point(5.0, 0.0));
    let a = crossing_point(&l, 0, 2, 0.3).position;
    let b = crossing_point(&l, 1, 2, 0.3).position;
    assert_near(a, b);
    assert_near(a, point(4.85, 0.0));
}

#[test]
fn there_and_back_over_map1_portal_0() {
    let g = map1();
    let ccp = counter_clockwise_order(&g);
    let path = [0, 1];
    let laid = layout(&g, &ccp, &path).unwrap();
    let points = bundle_points(&g, &laid, &path, 0.3).unwrap();

    assert_near(points[0].position, point(3.0, 1.15));
    assert_eq!(points[0].normal, selkie_graph::vector(1.0, 0.0));
    assert_near(points[1].position, point(3.0, 0.85));
    assert_eq!(points[1].normal, selkie_graph::vector(-1.0, 0.0));

    let curve = bundle_curve(&points, &BundleOptions::default()).unwrap();
    assert_near(curve.start, point(3.1, 1.15));
    assert_eq!(curve.segments.len(), 1);
    let seg = curve.segments[0];
    assert_near(seg.from, point(3.1, 1.15));
    assert_near(seg.ctrl1, point(3.4, 1.15));
    assert_near(seg.ctrl2, point(3.4, 0.85));
    assert_near(seg.to, point(3.1, 0.85));
}

#[test]
fn empty_paths_have_no_curve() {
    assert!(bundle_curve(&[], &BundleOptions::default()).is_none());
}

#[test]
fn mismatched_layouts_are_rejected() {
    let g = map1();
    let laid = PathLayout {
        slots: vec![Slot { slot: 0, count: 1 }],
        orders: Vec::new(),
    };
    assert_eq!(
        bundle_points(&g, &laid, &[0, 2], 0.3),
        Err(Error::LayoutMismatch {
            layout_len: 1,
            path_len: 2
        })
    );
    assert!(matches!(
        bundle_points(&g, &laid, &[40], 0.3),
        Err(Error::Graph(_))
    ));
}

#[test]
fn default_options() {
    let o = BundleOptions::default();
    assert_eq!((o.spacing, o.curve_tension, o.deflate), (0.3, 0.3, 0.1));
}
