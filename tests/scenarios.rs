#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use planar::error::{ShapeError, ValidationPhase};
use planar::geometry::{ClosedPolyline, PolygonKind, Segment};
use planar::math::Point2;
use planar::operations::creation::{MakePolygon, MakeRegularPolygon};
use planar::PlanarError;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

#[test]
fn vertical_and_horizontal_segments_intersect() {
    let a = Segment::new(p(0.0, 0.0), p(0.0, 4.0));
    let b = Segment::new(p(0.0, 1.0), p(5.0, 1.0));
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn concave_quadrilateral_is_a_polygon() {
    init_tracing();
    let poly = MakePolygon::new(vec![p(0.0, 0.0), p(2.0, 2.0), p(3.0, 1.0), p(2.0, 1.0)])
        .execute()
        .unwrap();
    assert_eq!(poly.degree(), 4);
    assert!(poly.area() > 0.0);
    assert_eq!(poly.kind().label(), "...");
}

#[test]
fn right_triangle() {
    init_tracing();
    let tri = MakePolygon::triangle(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)])
        .execute()
        .unwrap();
    assert_eq!(tri.degree(), 3);
    assert_eq!(tri.kind(), PolygonKind::Triangle);
    assert_abs_diff_eq!(tri.area(), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(tri.perimeter(), 2.0 + 2.0_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn generated_square() {
    init_tracing();
    let sq = MakeRegularPolygon::new(4, 2.0, p(0.0, 0.0)).execute().unwrap();
    assert_eq!(sq.degree(), 4);
    for edge in sq.edges() {
        assert_abs_diff_eq!(edge.length(), 2.0, epsilon = 1e-12);
    }
    // Consecutive edges are perpendicular.
    let edges: Vec<_> = sq.edges().collect();
    for (a, b) in edges.iter().zip(edges.iter().cycle().skip(1)) {
        assert_abs_diff_eq!(a.dot(b), 0.0, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(sq.area(), 4.0, epsilon = 1e-12);
}

#[test]
fn pair_ring_negative_index() {
    let ring = ClosedPolyline::from_points(&[p(0.0, 0.0), p(7.0, 7.0)]);
    assert_eq!(ring.at(-5).unwrap(), ring.at(1).unwrap());
    assert_eq!(*ring.at(-5).unwrap(), p(7.0, 7.0));
}

#[test]
fn unit_square_is_not_a_trapezoid() {
    init_tracing();
    let err = MakePolygon::trapezoid(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)])
        .execute()
        .unwrap_err();
    assert!(matches!(
        err,
        PlanarError::Shape(ShapeError::ConstraintViolation {
            kind: PolygonKind::Trapezoid,
            ..
        })
    ));
}

#[test]
fn isosceles_trapezoid() {
    let tpz = MakePolygon::trapezoid(vec![p(0.0, 0.0), p(4.0, 0.0), p(3.0, 2.0), p(1.0, 2.0)])
        .execute()
        .unwrap();
    assert_eq!(tpz.kind().label(), "tpz");
    assert_abs_diff_eq!(tpz.area(), 6.0, epsilon = 1e-12);
}

#[test]
fn regular_from_vertices() {
    let sq = MakePolygon::regular(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)])
        .execute()
        .unwrap();
    assert_eq!(sq.kind(), PolygonKind::Regular);

    let err = MakePolygon::regular(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 1.0), p(0.0, 1.0)])
        .execute()
        .unwrap_err();
    assert!(matches!(
        err,
        PlanarError::Shape(ShapeError::ConstraintViolation {
            kind: PolygonKind::Regular,
            ..
        })
    ));
}

#[test]
fn failure_reports_phase_and_indices() {
    init_tracing();
    let err = MakePolygon::new(vec![p(0.0, 1.0), p(1.0, 0.0), p(1.0, 2.0), p(2.0, 1.0)])
        .execute()
        .unwrap_err();
    assert_eq!(
        err,
        PlanarError::Shape(ShapeError::InvalidShape {
            phase: ValidationPhase::Closure,
            vertex: 3,
            edge: 1,
        })
    );
    assert_eq!(
        err.to_string(),
        "points do not form a polygon: closure check failed at vertex 3 (crosses edge 1)"
    );
}

#[test]
fn sort_polygons_by_area() {
    let mut polys = vec![
        MakeRegularPolygon::new(4, 3.0, p(0.0, 0.0)).execute().unwrap(),
        MakeRegularPolygon::new(4, 1.0, p(0.0, 0.0)).execute().unwrap(),
        MakePolygon::triangle(vec![p(0.0, 0.0), p(4.0, 0.0), p(0.0, 1.0)])
            .execute()
            .unwrap(),
    ];
    polys.sort_by(|a, b| a.cmp_area(b).unwrap());
    let areas: Vec<f64> = polys.iter().map(planar::geometry::Polygon::area).collect();
    assert_abs_diff_eq!(areas[0], 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(areas[1], 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(areas[2], 9.0, epsilon = 1e-9);
}
