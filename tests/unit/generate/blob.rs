use super::*;

#[test]
fn closes_over_a_full_turn() {
    let mut stream = RandomStream::new(42);
    let blob = generate_blob(Point::new(0.5, 0.5), 0.3, 200, 0.15, &mut stream).unwrap();
    let pts = blob.points();
    assert_eq!(pts.len(), 200);

    let c = blob.center();
    let first_angle = (pts[0].y - c.y).atan2(pts[0].x - c.x);
    let last_angle = (pts[199].y - c.y).atan2(pts[199].x - c.x);
    // atan2 folds 2π onto 0: the end point lies on the same ray as the start point.
    assert!(first_angle.abs() < 1e-9);
    assert!(last_angle.abs() < 1e-9);
    assert!(pts[0].y == 0.5 && (pts[199].y - 0.5).abs() < 1e-9);
}

#[test]
fn wobble_bounds_hold_over_many_draws() {
    let radius = 0.3;
    let mut stream = RandomStream::new(2024);
    let blob = generate_blob(Point::new(0.5, 0.5), radius, 1000, 0.2, &mut stream).unwrap();
    for p in blob.points() {
        let d = (p.to_vec2() - blob.center().to_vec2()).hypot();
        assert!(d >= radius * 0.9 - 1e-12, "radius {d} below bound");
        assert!(d <= radius * 1.1 + 1e-12, "radius {d} above bound");
    }
}

#[test]
fn zero_wobble_is_a_circle_and_still_consumes_draws() {
    let mut stream = RandomStream::new(8);
    let blob = generate_blob(Point::new(0.2, 0.7), 0.1, 50, 0.0, &mut stream).unwrap();
    for p in blob.points() {
        let d = (p.to_vec2() - blob.center().to_vec2()).hypot();
        assert!((d - 0.1).abs() < 1e-12);
    }

    let mut expected = RandomStream::new(8);
    for _ in 0..50 {
        expected.next_u64();
    }
    assert_eq!(stream, expected);
}

#[test]
fn path_is_closed_polygon() {
    let mut stream = RandomStream::new(1);
    let blob = generate_blob(Point::new(0.5, 0.5), 0.2, 12, 0.1, &mut stream).unwrap();
    let path = blob.to_path();
    let els = path.elements();
    assert_eq!(els.len(), 12 + 1);
    assert!(matches!(els[0], kurbo::PathEl::MoveTo(_)));
    assert!(matches!(els[12], kurbo::PathEl::ClosePath));
}

#[test]
fn rejects_degenerate_inputs() {
    let mut s = RandomStream::new(0);
    let c = Point::new(0.5, 0.5);
    assert!(generate_blob(c, 0.3, 2, 0.1, &mut s).is_err());
    assert!(generate_blob(c, 0.0, 10, 0.1, &mut s).is_err());
    assert!(generate_blob(c, f64::NAN, 10, 0.1, &mut s).is_err());
    assert!(generate_blob(c, 0.3, 10, -0.1, &mut s).is_err());
    assert!(generate_blob(Point::new(f64::INFINITY, 0.0), 0.3, 10, 0.1, &mut s).is_err());
}
