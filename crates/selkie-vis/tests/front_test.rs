use selkie_graph::fixtures::map1;
use selkie_graph::geom::line;
use selkie_vis::{front_set, portal_front_check};

#[test]
fn front_check_matches_the_half_plane_for_a_right_angle() {
    // Horizontal portal facing +y and a vertical portal entirely below it.
    let a = line((1.0, 4.0), (3.0, 4.0));
    let b = line((3.0, 6.0), (3.0, 5.0));
    assert!(portal_front_check(&a, &b));
    // `a` spans x in [1, 3]: on or behind `b`'s line x = 3, whose normal points to +x.
    assert!(!portal_front_check(&b, &a));
}

#[test]
fn front_check_is_not_symmetric_on_map1() {
    let g = map1();
    assert!(portal_front_check(g.portal(0), g.portal(6)));
    assert!(!portal_front_check(g.portal(6), g.portal(0)));
    assert!(portal_front_check(g.portal(4), g.portal(10)));
    assert!(!portal_front_check(g.portal(10), g.portal(4)));
}

#[test]
fn endpoints_on_the_line_count_as_behind() {
    let a = line((0.0, 0.0), (2.0, 0.0));
    assert!(!portal_front_check(&a, &line((3.0, 0.0), (5.0, 0.0))));
    assert!(!portal_front_check(&a, &a));
    assert!(portal_front_check(&a, &line((3.0, 0.0), (3.0, 0.1))));
}

#[test]
fn front_set_of_map1_portal_0() {
    let g = map1();
    let front = front_set(&g, 0).unwrap();
    assert_eq!(front.to_vec(), vec![2, 3, 6, 7, 8, 9, 12, 13]);
    assert!(front_set(&g, 99).is_err());
}
