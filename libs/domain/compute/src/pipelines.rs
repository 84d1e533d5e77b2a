//! The six compute pipelines (§3.1, §4.4–§4.6). Each takes already-resolved
//! geometry inputs and dispatches to the geodesic backend, translating its
//! typed errors into the domain error taxonomy.

use astral_geometry::{area, contains, distance, intersects, length, to_geo, GeometryOpError};
use astral_models::{DomainError, ResolvedInput};

fn map_geometry_err(e: GeometryOpError) -> DomainError {
    match e {
        GeometryOpError::NonPositiveRadius => DomainError::invalid(e.to_string()),
        _ => DomainError::invalid(e.to_string()),
    }
}

fn exactly<const N: usize>(inputs: &[ResolvedInput]) -> Result<[&ResolvedInput; N], DomainError> {
    if inputs.len() != N {
        return Err(DomainError::invalid(format!(
            "this operation takes exactly {N} input geometries, got {}",
            inputs.len()
        )));
    }
    let mut out: [Option<&ResolvedInput>; N] = [None; N];
    for (slot, input) in out.iter_mut().zip(inputs.iter()) {
        *slot = Some(input);
    }
    Ok(out.map(|o| o.expect("length checked above")))
}

pub fn compute_distance(inputs: &[ResolvedInput]) -> Result<f64, DomainError> {
    let [a, b] = exactly::<2>(inputs)?;
    let ga = to_geo(&a.geometry).map_err(map_geometry_err)?;
    let gb = to_geo(&b.geometry).map_err(map_geometry_err)?;
    distance(&ga, &gb).map_err(map_geometry_err)
}

pub fn compute_length(inputs: &[ResolvedInput]) -> Result<f64, DomainError> {
    let [a] = exactly::<1>(inputs)?;
    let ga = to_geo(&a.geometry).map_err(map_geometry_err)?;
    length(&ga).map_err(map_geometry_err)
}

pub fn compute_area(inputs: &[ResolvedInput]) -> Result<f64, DomainError> {
    let [a] = exactly::<1>(inputs)?;
    let ga = to_geo(&a.geometry).map_err(map_geometry_err)?;
    area(&ga).map_err(map_geometry_err)
}

pub fn compute_contains(inputs: &[ResolvedInput]) -> Result<bool, DomainError> {
    let [container, candidate] = exactly::<2>(inputs)?;
    let gc = to_geo(&container.geometry).map_err(map_geometry_err)?;
    let gd = to_geo(&candidate.geometry).map_err(map_geometry_err)?;
    contains(&gc, &gd).map_err(map_geometry_err)
}

pub fn compute_intersects(inputs: &[ResolvedInput]) -> Result<bool, DomainError> {
    let [a, b] = exactly::<2>(inputs)?;
    let ga = to_geo(&a.geometry).map_err(map_geometry_err)?;
    let gb = to_geo(&b.geometry).map_err(map_geometry_err)?;
    Ok(intersects(&ga, &gb))
}

pub fn compute_within(inputs: &[ResolvedInput], radius_meters: f64) -> Result<bool, DomainError> {
    let [point, target] = exactly::<2>(inputs)?;
    let gp = to_geo(&point.geometry).map_err(map_geometry_err)?;
    let gt = to_geo(&target.geometry).map_err(map_geometry_err)?;
    astral_geometry::within_radius(&gp, &gt, radius_meters).map_err(map_geometry_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use astral_models::ResolvedInput;
    use geojson::{Geometry, Value};

    fn point_input(lon: f64, lat: f64) -> ResolvedInput {
        ResolvedInput {
            geometry: Geometry::new(Value::Point(vec![lon, lat])),
            reference: "0xref".to_string(),
            proof_context: None,
        }
    }

    #[test]
    fn distance_requires_exactly_two_inputs() {
        let inputs = vec![point_input(0.0, 0.0)];
        assert!(compute_distance(&inputs).is_err());
    }

    #[test]
    fn distance_between_identical_points_is_zero() {
        let inputs = vec![point_input(10.0, 10.0), point_input(10.0, 10.0)];
        assert_eq!(compute_distance(&inputs).unwrap(), 0.0);
    }

    #[test]
    fn within_rejects_non_positive_radius() {
        let inputs = vec![point_input(0.0, 0.0), point_input(0.0, 0.0)];
        assert!(compute_within(&inputs, 0.0).is_err());
    }
}
