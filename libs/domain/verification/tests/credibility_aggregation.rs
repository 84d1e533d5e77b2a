//! End-to-end aggregation across multiple stamps from distinct plugins
//! (§3.5–§3.7, §4.7): spatial agreement, plugin diversity, and the
//! distance-sentinel collapse when no stamp carries a usable geometry.

use astral_models::claim::{LocationClaim, LocationValue, Subject, TimeRange};
use astral_models::{
    EvaluationMode, LocationProof, LocationStamp, StampSignature, DISTANCE_SENTINEL_METERS,
};
use astral_verification::{evaluate_proof, PluginRegistry};
use geojson::{Geometry, Value};
use serde_json::Map;

fn point(lon: f64, lat: f64) -> Geometry {
    Geometry::new(Value::Point(vec![lon, lat]))
}

fn device_stamp(lon: f64, lat: f64) -> LocationStamp {
    let mut signals = Map::new();
    signals.insert("provider".to_string(), serde_json::json!("gps"));
    LocationStamp {
        lp_version: "0.2".to_string(),
        location_type: "Point".to_string(),
        location: LocationValue::Geometry(point(lon, lat)),
        srs: "EPSG:4326".to_string(),
        temporal_footprint: TimeRange {
            start: 1_700_000_000,
            end: 1_700_000_050,
        },
        plugin: "device-attestation".to_string(),
        plugin_version: "0.1.0".to_string(),
        signals,
        signatures: vec![StampSignature {
            signer: Subject {
                scheme: "eth-address".to_string(),
                value: "0xabc".to_string(),
            },
            algorithm: "ecdsa".to_string(),
            value: "0xdeadbeef".to_string(),
            timestamp: 1_700_000_000,
        }],
    }
}

fn claim(lon: f64, lat: f64, radius: f64) -> LocationClaim {
    LocationClaim {
        lp_version: "0.2".to_string(),
        location_type: "Point".to_string(),
        location: LocationValue::Geometry(point(lon, lat)),
        srs: "EPSG:4326".to_string(),
        subject: Subject {
            scheme: "eth-address".to_string(),
            value: "0x0".to_string(),
        },
        radius,
        time: TimeRange {
            start: 1_700_000_000,
            end: 1_700_000_100,
        },
        event_type: None,
    }
}

#[tokio::test]
async fn spatial_agreement_favours_the_majority_side_of_the_radius() {
    let nearby = device_stamp(-122.4194, 37.7749);
    let also_nearby = device_stamp(-122.4195, 37.7750);
    let far_away = device_stamp(-74.0060, 40.7128);

    let proof = LocationProof {
        claim: claim(-122.4194, 37.7749, 500.0),
        stamps: vec![nearby, also_nearby, far_away],
    };

    let registry = PluginRegistry::with_builtins();
    let vector = evaluate_proof(&proof, &registry, EvaluationMode::Local, 1_700_000_200).await;

    // 2 of 3 stamps fall within the radius: spatial agreement should be 2/3.
    assert!((vector.independence.spatial_agreement - (2.0 / 3.0)).abs() < 1e-9);
    // Single plugin used by every stamp: unique_plugin_ratio = 1/3.
    assert!((vector.independence.unique_plugin_ratio - (1.0 / 3.0)).abs() < 1e-9);
}

#[tokio::test]
async fn no_stamps_collapses_distance_to_the_sentinel() {
    let proof = LocationProof {
        claim: claim(0.0, 0.0, 10.0),
        stamps: vec![],
    };
    let registry = PluginRegistry::with_builtins();
    let vector = evaluate_proof(&proof, &registry, EvaluationMode::Local, 1_700_000_200).await;

    assert_eq!(vector.spatial.mean_distance_meters, DISTANCE_SENTINEL_METERS);
    assert_eq!(vector.spatial.max_distance_meters, DISTANCE_SENTINEL_METERS);
    assert_eq!(vector.meta.stamp_count, 0);
}
