use super::metrics::{perimeter, radial_distances, signed_area, vertex_centroid};
use super::*;
use crate::error::FormatErrorKind;
use proptest::prelude::*;

fn unit_square() -> CurveComponent {
    CurveComponent::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

fn kind_of(src: &str) -> FormatErrorKind {
    parse_str(src)
        .expect_err("should be rejected")
        .kind()
        .expect("syntax error")
}

#[test]
fn parses_two_components_in_file_order() {
    let src = "2\n3\n0 0\n1 0\n0 1\n1\n  -2.5   3e2  \n";
    let c = parse_str(src).unwrap();
    assert_eq!(c.len(), 2);
    assert_eq!(c.components[0].len(), 3);
    assert_eq!(c.components[1].len(), 1);
    assert_eq!(c.components[0].vertices()[1], Point2::new(1.0, 0.0));
    assert_eq!(c.components[1].vertices()[0], Point2::new(-2.5, 300.0));
}

#[test]
fn zero_components_and_zero_vertices_are_legal() {
    assert!(parse_str("0\n").unwrap().is_empty());
    let c = parse_str("1\n0\n").unwrap();
    assert_eq!(c.len(), 1);
    assert!(c.components[0].is_empty());
}

#[test]
fn trailing_lines_after_last_component_are_ignored() {
    let c = parse_str("1\n1\n0 0\nleftover garbage\n").unwrap();
    assert_eq!(c.vertex_count(), 1);
}

#[test]
fn rejects_malformed_sources() {
    assert_eq!(kind_of(""), FormatErrorKind::Empty);
    assert_eq!(kind_of("x\n"), FormatErrorKind::InvalidCount);
    assert_eq!(kind_of("-1\n"), FormatErrorKind::InvalidCount);
    assert_eq!(kind_of("2\n1\n0 0\n"), FormatErrorKind::UnexpectedEof);
    assert_eq!(kind_of("1\n3\n0 0\n1 1\n"), FormatErrorKind::UnexpectedEof);
    assert_eq!(kind_of("1\n1.5\n"), FormatErrorKind::InvalidCount);
    assert_eq!(kind_of("1\n\n"), FormatErrorKind::InvalidCount);
    assert_eq!(kind_of("1\n1\n0 0 0\n"), FormatErrorKind::InvalidVertex);
    assert_eq!(kind_of("1\n1\n7\n"), FormatErrorKind::InvalidVertex);
    assert_eq!(kind_of("1\n1\n0 abc\n"), FormatErrorKind::InvalidNumber);
    assert_eq!(kind_of("1\n1\nNaN 0\n"), FormatErrorKind::NonFinite);
    assert_eq!(kind_of("1\n1\n0 inf\n"), FormatErrorKind::NonFinite);
}

#[test]
fn error_reports_line_number() {
    let err = parse_str("1\n2\n0 0\n1 oops\n").unwrap_err();
    assert_eq!(err.line(), Some(4));
    let eof = parse_str("1\n2\n0 0\n").unwrap_err();
    assert_eq!(eof.line(), Some(4));
}

#[test]
fn serialize_layout_matches_format() {
    let c = CurveCollection::new(vec![unit_square()]);
    let s = to_vert_string(&c);
    assert_eq!(s, "1\n4\n0 0\n1 0\n1 1\n0 1\n");
    let mut buf = Vec::new();
    write_collection(&c, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), s);
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.vert");
    let c = CurveCollection::new(vec![unit_square(), CurveComponent::from_xy(&[(0.1, 1e-7)])]);
    save_collection(&c, &path).unwrap();
    let back = load_collection(&path).unwrap();
    assert_eq!(back, c);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_collection(dir.path().join("nope.vert")).unwrap_err();
    assert!(matches!(err, crate::FormatError::Io(_)));
    assert!(err.kind().is_none());
}

#[test]
fn replace_vertices_swaps_whole_ring() {
    let mut c = unit_square();
    let old = c.replace_vertices(vec![Point2::new(5.0, 5.0)]);
    assert_eq!(old.len(), 4);
    assert_eq!(c.vertices(), &[Point2::new(5.0, 5.0)]);
}

#[test]
fn square_metrics() {
    let sq = unit_square();
    assert!((perimeter(sq.vertices()) - 4.0).abs() < 1e-12);
    assert!((signed_area(sq.vertices()) - 1.0).abs() < 1e-12);
    let mut cw = sq.vertices().to_vec();
    cw.reverse();
    assert!((signed_area(&cw) + 1.0).abs() < 1e-12);
    let c = vertex_centroid(sq.vertices()).unwrap();
    assert!((c - Point2::new(0.5, 0.5)).norm() < 1e-12);
    for r in radial_distances(sq.vertices()) {
        assert!((r - 0.5f64.sqrt()).abs() < 1e-12);
    }
    assert!(vertex_centroid(&[]).is_none());
}

#[test]
fn perimeter_of_huge_square_is_finite() {
    let side = 1e200;
    let sq = CurveComponent::from_xy(&[(0.0, 0.0), (side, 0.0), (side, side), (0.0, side)]);
    assert!((perimeter(sq.vertices()) / side - 4.0).abs() < 1e-12);
}

#[test]
fn string_and_writer_serializers_agree() {
    let c = CurveCollection::new(vec![
        unit_square(),
        CurveComponent::default(),
        CurveComponent::from_xy(&[(-1.5e-3, 2.25e12)]),
    ]);
    let mut buf = Vec::new();
    write_collection(&c, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), to_vert_string(&c));
    assert_eq!(parse_str(&to_vert_string(&c)).unwrap(), c);
}

fn finite_coord() -> impl Strategy<Value = f64> {
    prop_oneof![-1e6..1e6f64, -1.0..1.0f64, Just(0.0), Just(-0.0)]
}

fn arb_collection() -> impl Strategy<Value = CurveCollection> {
    let component = prop::collection::vec((finite_coord(), finite_coord()), 1..12)
        .prop_map(|xy| CurveComponent::from_xy(&xy));
    prop::collection::vec(component, 1..5).prop_map(CurveCollection::new)
}

proptest! {
    #[test]
    fn parse_inverts_serialize(c in arb_collection()) {
        let back = parse_str(&to_vert_string(&c)).unwrap();
        prop_assert_eq!(back.len(), c.len());
        for (a, b) in back.iter().zip(c.iter()) {
            prop_assert_eq!(a.len(), b.len());
            for (p, q) in a.vertices().iter().zip(b.vertices()) {
                prop_assert!((p - q).norm() <= 1e-9);
            }
        }
    }
}
