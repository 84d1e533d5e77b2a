use crate::error::GeometryOpError;
use geo::Geometry as GeoGeometry;
use geojson::Geometry as GeoJsonGeometry;

/// Converts a validated GeoJSON geometry into the `geo` crate's planar/geodesic
/// representation. Validation (ring closure, coordinate ranges) happens
/// upstream in `astral_models::geometry::validate`; this conversion assumes
/// it already passed.
pub fn to_geo(geometry: &GeoJsonGeometry) -> Result<GeoGeometry<f64>, GeometryOpError> {
    GeoGeometry::<f64>::try_from(geometry.value.clone())
        .map_err(|e| GeometryOpError::Invalid(e.to_string()))
}

/// A short, human-readable kind name used in error messages.
pub fn kind_name(geometry: &GeoGeometry<f64>) -> &'static str {
    match geometry {
        GeoGeometry::Point(_) => "Point",
        GeoGeometry::Line(_) => "Line",
        GeoGeometry::LineString(_) => "LineString",
        GeoGeometry::Polygon(_) => "Polygon",
        GeoGeometry::MultiPoint(_) => "MultiPoint",
        GeoGeometry::MultiLineString(_) => "MultiLineString",
        GeoGeometry::MultiPolygon(_) => "MultiPolygon",
        GeoGeometry::GeometryCollection(_) => "GeometryCollection",
        GeoGeometry::Rect(_) => "Rect",
        GeoGeometry::Triangle(_) => "Triangle",
    }
}
