//! Geodesic measurement and topological relation operations (§3.1).
//!
//! Measures (`distance`, `length`, `area`) use Karney's geodesic algorithms
//! over the WGS-84 ellipsoid via the `geo` crate's `Geodesic` metric space.
//! Relations (`contains`, `intersects`) are planar/topological, matching
//! `geo`'s own semantics — they operate on the coordinates as given, with no
//! ellipsoidal correction.

use crate::convert::kind_name;
use crate::error::GeometryOpError;
use geo::{Contains, Distance, Geodesic, GeodesicArea, Intersects, Length};
use geo::{Geometry, LineString, MultiLineString, MultiPolygon, Point, Polygon};

fn as_point(g: &Geometry<f64>) -> Result<&Point<f64>, GeometryOpError> {
    match g {
        Geometry::Point(p) => Ok(p),
        other => Err(GeometryOpError::WrongType {
            expected: "Point",
            actual: kind_name(other),
        }),
    }
}

/// Geodesic distance in meters between two point geometries.
///
/// Identical points yield `0.0`. Antipodal points yield the half-circumference
/// of the WGS-84 ellipsoid, roughly 20,015,086 m.
pub fn distance(a: &Geometry<f64>, b: &Geometry<f64>) -> Result<f64, GeometryOpError> {
    let p1 = as_point(a)?;
    let p2 = as_point(b)?;
    Ok(Geodesic.distance(*p1, *p2))
}

/// Geodesic length in meters of a line geometry.
pub fn length(g: &Geometry<f64>) -> Result<f64, GeometryOpError> {
    match g {
        Geometry::LineString(ls) => Ok(line_string_length(ls)),
        Geometry::MultiLineString(mls) => Ok(multi_line_string_length(mls)),
        other => Err(GeometryOpError::WrongType {
            expected: "LineString or MultiLineString",
            actual: kind_name(other),
        }),
    }
}

fn line_string_length(ls: &LineString<f64>) -> f64 {
    Geodesic.length(ls)
}

fn multi_line_string_length(mls: &MultiLineString<f64>) -> f64 {
    mls.0.iter().map(line_string_length).sum()
}

/// Geodesic (unsigned) area in square meters of a polygonal geometry.
pub fn area(g: &Geometry<f64>) -> Result<f64, GeometryOpError> {
    match g {
        Geometry::Polygon(p) => Ok(p.geodesic_area_unsigned()),
        Geometry::MultiPolygon(mp) => Ok(mp.geodesic_area_unsigned()),
        other => Err(GeometryOpError::WrongType {
            expected: "Polygon or MultiPolygon",
            actual: kind_name(other),
        }),
    }
}

/// Whether `container` topologically contains `candidate`.
pub fn contains(container: &Geometry<f64>, candidate: &Geometry<f64>) -> Result<bool, GeometryOpError> {
    match container {
        Geometry::Polygon(poly) => Ok(geometry_contains_polygon(poly, candidate)),
        Geometry::MultiPolygon(mp) => Ok(geometry_contains_multi_polygon(mp, candidate)),
        other => Err(GeometryOpError::WrongType {
            expected: "Polygon or MultiPolygon",
            actual: kind_name(other),
        }),
    }
}

fn geometry_contains_polygon(poly: &Polygon<f64>, candidate: &Geometry<f64>) -> bool {
    match candidate {
        Geometry::Point(p) => poly.contains(p),
        Geometry::LineString(ls) => poly.contains(ls),
        Geometry::Polygon(inner) => poly.contains(inner),
        Geometry::MultiPoint(mp) => poly.contains(mp),
        _ => false,
    }
}

fn geometry_contains_multi_polygon(mp: &MultiPolygon<f64>, candidate: &Geometry<f64>) -> bool {
    match candidate {
        Geometry::Point(p) => mp.contains(p),
        Geometry::LineString(ls) => mp.contains(ls),
        Geometry::Polygon(inner) => mp.contains(inner),
        Geometry::MultiPoint(pts) => mp.contains(pts),
        _ => false,
    }
}

/// Whether `a` and `b` intersect, topologically.
pub fn intersects(a: &Geometry<f64>, b: &Geometry<f64>) -> bool {
    a.intersects(b)
}

/// Whether a point geometry lies within `radius_meters` of another geometry,
/// measured geodesically from the point to the nearest point of `target`.
pub fn within_radius(
    point: &Geometry<f64>,
    target: &Geometry<f64>,
    radius_meters: f64,
) -> Result<bool, GeometryOpError> {
    if radius_meters <= 0.0 {
        return Err(GeometryOpError::NonPositiveRadius);
    }
    let p = as_point(point)?;
    let d = match target {
        Geometry::Point(other) => Geodesic.distance(*p, *other),
        Geometry::LineString(ls) => Geodesic.distance(*p, ls),
        Geometry::Polygon(poly) => Geodesic.distance(*p, poly),
        other => {
            return Err(GeometryOpError::WrongType {
                expected: "Point, LineString, or Polygon",
                actual: kind_name(other),
            })
        }
    };
    Ok(d <= radius_meters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, point, polygon};

    #[test]
    fn identical_points_have_zero_distance() {
        let sf = Geometry::Point(point!(x: -122.4194, y: 37.7749));
        assert_eq!(distance(&sf, &sf).unwrap(), 0.0);
    }

    #[test]
    fn sf_to_nyc_distance_is_in_expected_range() {
        let sf = Geometry::Point(point!(x: -122.4194, y: 37.7749));
        let nyc = Geometry::Point(point!(x: -74.0060, y: 40.7128));
        let d = distance(&sf, &nyc).unwrap();
        assert!(d > 4_100_000.0 && d < 4_200_000.0, "got {d}");
    }

    #[test]
    fn antipodal_points_approach_half_the_ellipsoid_circumference() {
        let a = Geometry::Point(point!(x: 0.0, y: 0.0));
        let b = Geometry::Point(point!(x: 180.0, y: 0.0));
        let d = distance(&a, &b).unwrap();
        assert!(d > 19_900_000.0 && d < 20_100_000.0, "got {d}");
    }

    #[test]
    fn distance_rejects_non_point_operands() {
        let sf = Geometry::Point(point!(x: -122.4194, y: 37.7749));
        let line = Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]);
        assert!(matches!(
            distance(&sf, &line),
            Err(GeometryOpError::WrongType { .. })
        ));
    }

    #[test]
    fn area_rejects_non_polygonal_geometry() {
        let line = Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]);
        assert!(matches!(area(&line), Err(GeometryOpError::WrongType { .. })));
    }

    #[test]
    fn contains_checks_polygon_membership() {
        let poly = Geometry::Polygon(polygon![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 10.0),
            (x: 10.0, y: 10.0),
            (x: 10.0, y: 0.0),
            (x: 0.0, y: 0.0),
        ]);
        let inside = Geometry::Point(point!(x: 5.0, y: 5.0));
        let outside = Geometry::Point(point!(x: 50.0, y: 50.0));
        assert!(contains(&poly, &inside).unwrap());
        assert!(!contains(&poly, &outside).unwrap());
    }

    #[test]
    fn within_radius_rejects_non_positive_radius() {
        let a = Geometry::Point(point!(x: 0.0, y: 0.0));
        let b = Geometry::Point(point!(x: 0.0, y: 0.0));
        assert!(matches!(
            within_radius(&a, &b, 0.0),
            Err(GeometryOpError::NonPositiveRadius)
        ));
    }

    #[test]
    fn intersects_detects_overlapping_lines() {
        let a = Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 10.0)]);
        let b = Geometry::LineString(line_string![(x: 0.0, y: 10.0), (x: 10.0, y: 0.0)]);
        assert!(intersects(&a, &b));
    }
}
