//! GeoJSON geometry: validation per RFC 7946 plus the subset of invariants
//! spec'd for this service (§3.1).

use geojson::{Geometry, PolygonType, Position, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(String),
    #[error("latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(String),
    #[error("position must have at least 2 coordinates")]
    PositionTooShort,
    #[error("LineString must have at least 2 positions")]
    LineStringTooShort,
    #[error("polygon ring must have at least 4 positions")]
    RingTooShort,
    #[error("polygon ring is not closed (first position != last)")]
    RingNotClosed,
    #[error("empty GeometryCollection")]
    EmptyCollection,
}

fn check_position(pos: &Position) -> Result<(), GeometryError> {
    if pos.len() < 2 {
        return Err(GeometryError::PositionTooShort);
    }
    let lon = pos[0];
    let lat = pos[1];
    if !(-180.0..=180.0).contains(&lon) {
        return Err(GeometryError::LongitudeOutOfRange(lon.to_string()));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeometryError::LatitudeOutOfRange(lat.to_string()));
    }
    Ok(())
}

fn check_line_string(positions: &[Position]) -> Result<(), GeometryError> {
    if positions.len() < 2 {
        return Err(GeometryError::LineStringTooShort);
    }
    positions.iter().try_for_each(check_position)
}

fn check_ring(ring: &[Position]) -> Result<(), GeometryError> {
    if ring.len() < 4 {
        return Err(GeometryError::RingTooShort);
    }
    ring.iter().try_for_each(check_position)?;
    let first = &ring[0];
    let last = &ring[ring.len() - 1];
    if first != last {
        return Err(GeometryError::RingNotClosed);
    }
    Ok(())
}

fn check_polygon(rings: &PolygonType) -> Result<(), GeometryError> {
    rings.iter().try_for_each(|ring| check_ring(ring))
}

/// Validate a GeoJSON geometry against the invariants of §3.1. Altitude
/// (a third position element) is accepted and ignored.
pub fn validate(geometry: &Geometry) -> Result<(), GeometryError> {
    match &geometry.value {
        Value::Point(pos) => check_position(pos),
        Value::MultiPoint(positions) => positions.iter().try_for_each(check_position),
        Value::LineString(positions) => check_line_string(positions),
        Value::MultiLineString(lines) => lines.iter().try_for_each(|l| check_line_string(l)),
        Value::Polygon(rings) => check_polygon(rings),
        Value::MultiPolygon(polygons) => polygons.iter().try_for_each(check_polygon),
        Value::GeometryCollection(geometries) => {
            if geometries.is_empty() {
                return Err(GeometryError::EmptyCollection);
            }
            geometries.iter().try_for_each(validate)
        }
    }
}

/// True if the geometry's variant is `Polygon` or `MultiPolygon`.
pub fn is_areal(geometry: &Geometry) -> bool {
    matches!(geometry.value, Value::Polygon(_) | Value::MultiPolygon(_))
}

/// True if the geometry's variant is `LineString` or `MultiLineString`.
pub fn is_linear(geometry: &Geometry) -> bool {
    matches!(
        geometry.value,
        Value::LineString(_) | Value::MultiLineString(_)
    )
}
