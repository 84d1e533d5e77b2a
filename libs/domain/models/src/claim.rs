//! `LocationClaim` — an assertion about where/when an event occurred (§3.4).

use geojson::Geometry;
use serde::{Deserialize, Serialize};

/// Either GeoJSON geometry or an opaque location string (e.g. an H3 index).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationValue {
    Geometry(Geometry),
    Opaque(String),
}

impl LocationValue {
    pub fn as_geometry(&self) -> Option<&Geometry> {
        match self {
            LocationValue::Geometry(g) => Some(g),
            LocationValue::Opaque(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

impl TimeRange {
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Fraction of `self` covered by `other`, clamped to [0, 1]. Disjoint
    /// ranges overlap 0; a zero-width claim contained in `other` overlaps 1.
    pub fn overlap_fraction(&self, other: &TimeRange) -> f64 {
        let overlap_start = self.start.max(other.start);
        let overlap_end = self.end.min(other.end);
        let overlap = (overlap_end - overlap_start).max(0) as f64;
        let span = (self.end - self.start) as f64;
        if span <= 0.0 {
            if overlap_start <= self.start && self.start <= overlap_end {
                1.0
            } else {
                0.0
            }
        } else {
            (overlap / span).clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub scheme: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationClaim {
    pub lp_version: String,
    pub location_type: String,
    pub location: LocationValue,
    pub srs: String,
    pub subject: Subject,
    pub radius: f64,
    pub time: TimeRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

impl LocationClaim {
    /// Checks the invariants request validation must enforce (§4.7): LP
    /// version, positive radius, ordered time range.
    pub fn validate(&self) -> Result<(), String> {
        if self.lp_version != "0.2" {
            return Err(format!("unsupported lpVersion: {}", self.lp_version));
        }
        if !(self.radius > 0.0) {
            return Err("radius must be > 0".to_string());
        }
        if !self.time.is_ordered() {
            return Err("time.start must be <= time.end".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_overlap_is_one() {
        let a = TimeRange { start: 10, end: 20 };
        let b = TimeRange { start: 0, end: 30 };
        assert_eq!(a.overlap_fraction(&b), 1.0);
    }

    #[test]
    fn disjoint_is_zero() {
        let a = TimeRange { start: 0, end: 10 };
        let b = TimeRange { start: 20, end: 30 };
        assert_eq!(a.overlap_fraction(&b), 0.0);
    }

    #[test]
    fn partial_overlap() {
        let a = TimeRange { start: 0, end: 10 };
        let b = TimeRange { start: 5, end: 15 };
        assert_eq!(a.overlap_fraction(&b), 0.5);
    }
}
