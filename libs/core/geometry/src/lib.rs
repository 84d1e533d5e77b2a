//! Geodesic geometry backend (§3.1, component C1): conversion from the wire
//! GeoJSON representation into `geo`'s planar/geodesic types, and the six
//! measurement and relation operations the compute pipeline dispatches to.

mod convert;
mod error;
mod ops;

pub use convert::{kind_name, to_geo};
pub use error::GeometryOpError;
pub use ops::{area, contains, distance, intersects, length, within_radius};

pub use geo::Geometry as GeoGeometry;
