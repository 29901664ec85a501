use eda_core::Ensemble;
use eda_depth::{DepthConfig, Metric, SelfInclusion};
use eda_report::{ensemble_hash, DepthReport, REPORT_SCHEMA};

fn profiles() -> Ensemble {
    let samples = (0..20)
        .map(|idx| {
            let offset = (idx as f64 - 10.0) * 0.2;
            (0..8).map(|level| level as f64 * 0.5 + offset).collect()
        })
        .collect();
    Ensemble::from_samples(samples).unwrap()
}

#[test]
fn report_records_provenance() {
    let ensemble = profiles();
    let config = DepthConfig {
        metric: Metric::l2(),
        strata: 4,
        ..DepthConfig::default()
    };
    let report = DepthReport::build(&ensemble, &config).unwrap();
    assert_eq!(report.depths.len(), 20);
    assert_eq!(report.provenance.metric, "l2");
    assert_eq!(report.provenance.samples, 20);
    assert_eq!(report.provenance.dimension, 8);
    assert!(report.provenance.self_included);
    assert_eq!(report.provenance.ensemble_hash, ensemble_hash(&ensemble));
    assert_eq!(report.strata.len(), 4);
    assert_eq!(report.representatives.len(), 4);
    assert_eq!(report.summary.count, 20);

    // The outermost profiles fall into the shallowest stratum.
    assert!(report.strata[0].indices.contains(&0));
    assert!(report.strata[0].indices.contains(&19));
}

#[test]
fn identical_runs_hash_identically() {
    let ensemble = profiles();
    let config = DepthConfig {
        metric: Metric::band(32),
        self_inclusion: SelfInclusion::Exclude,
        ..DepthConfig::default()
    };
    let a = DepthReport::build(&ensemble, &config).unwrap();
    let b = DepthReport::build(&ensemble, &config).unwrap();
    assert_eq!(a.stable_hash().unwrap(), b.stable_hash().unwrap());
    assert!(!a.provenance.self_included);
}

#[test]
fn json_round_trip_preserves_structure() {
    let report = DepthReport::build(&profiles(), &DepthConfig::default()).unwrap();
    let bytes = report.to_json().unwrap();
    let decoded = DepthReport::from_json(&bytes).unwrap();
    assert_eq!(decoded.provenance, report.provenance);
    assert_eq!(decoded.strata.len(), report.strata.len());
    for (left, right) in decoded.strata.iter().zip(&report.strata) {
        assert_eq!(left.indices, right.indices);
    }
    for (left, right) in decoded.depths.iter().zip(&report.depths) {
        assert!((left - right).abs() <= 1e-12 * right.abs().max(1.0));
    }
    assert!(report.to_yaml().unwrap().contains("ensemble_hash"));
}

#[test]
fn encoding_is_byte_stable_and_versioned() {
    let report = DepthReport::build(&profiles(), &DepthConfig::default()).unwrap();
    assert_eq!(report.schema, REPORT_SCHEMA);
    let rebuilt = DepthReport::build(&profiles(), &DepthConfig::default()).unwrap();
    assert_eq!(report.to_json().unwrap(), rebuilt.to_json().unwrap());

    let mut future = report.clone();
    future.schema = REPORT_SCHEMA + 1;
    let err = DepthReport::from_json(&future.to_json().unwrap()).unwrap_err();
    assert_eq!(err.info().code, "schema_unsupported");
}

#[test]
fn ensemble_hash_depends_on_values_and_shape() {
    let a = Ensemble::from_row_major(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = Ensemble::from_row_major(4, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let c = Ensemble::from_row_major(2, 2, vec![1.0, 2.0, 3.0, 4.5]).unwrap();
    assert_ne!(ensemble_hash(&a), ensemble_hash(&b));
    assert_ne!(ensemble_hash(&a), ensemble_hash(&c));
    assert_eq!(ensemble_hash(&a), ensemble_hash(&a.clone()));
}

#[test]
fn invalid_ensemble_configuration_surfaces() {
    let tiny = Ensemble::from_samples(vec![vec![0.0], vec![1.0], vec![2.0]]).unwrap();
    let config = DepthConfig {
        metric: Metric::BandExact,
        self_inclusion: SelfInclusion::Exclude,
        ..DepthConfig::default()
    };
    let err = DepthReport::build(&tiny, &config).unwrap_err();
    assert!(err.is_invalid_input());
}
