use eda_report::{depth_quantile, rank_agreement, DepthSummary};

#[test]
fn summary_of_simple_vector() {
    let depths = [0.4, 0.0, 1.0, 0.6, 0.2];
    let summary = DepthSummary::from_depths(&depths, 5).unwrap();
    assert_eq!(summary.count, 5);
    assert_eq!(summary.min, 0.0);
    assert_eq!(summary.max, 1.0);
    assert!((summary.mean - 0.44).abs() < 1e-12);
    assert!((summary.quantiles.q50 - 0.4).abs() < 1e-12);
    assert!((summary.quantiles.q05 - 0.04).abs() < 1e-12);
    assert_eq!(summary.histogram.edges.len(), 6);
    assert_eq!(summary.histogram.counts.iter().sum::<u64>(), 5);
    assert_eq!(summary.histogram.counts[4], 1);
}

#[test]
fn constant_vector_fills_first_bin() {
    let summary = DepthSummary::from_depths(&[1e6; 4], 3).unwrap();
    assert_eq!(summary.histogram.counts, vec![4, 0, 0]);
    assert_eq!(summary.quantiles.q95, 1e6);
}

#[test]
fn summary_rejects_bad_input() {
    assert_eq!(
        DepthSummary::from_depths(&[0.1], 0).unwrap_err().info().code,
        "bins_zero"
    );
    assert!(DepthSummary::from_depths(&[], 3).is_err());
}

#[test]
fn quantile_interpolates_unsorted_depths() {
    let depths = [3.0, 1.0, 4.0, 2.0];
    assert_eq!(depth_quantile(&depths, 0.0).unwrap(), 1.0);
    assert_eq!(depth_quantile(&depths, 1.0).unwrap(), 4.0);
    assert!((depth_quantile(&depths, 0.5).unwrap() - 2.5).abs() < 1e-12);
    assert_eq!(depth_quantile(&[7.0], 0.3).unwrap(), 7.0);
}

#[test]
fn quantile_rejects_bad_input() {
    assert_eq!(depth_quantile(&[], 0.5).unwrap_err().info().code, "depths_empty");
    assert_eq!(
        depth_quantile(&[0.1, f64::NAN], 0.5).unwrap_err().info().code,
        "non_finite_depth"
    );
    for q in [-0.1, 1.5, f64::NAN] {
        let err = depth_quantile(&[0.1, 0.2], q).unwrap_err();
        assert_eq!(err.info().code, "quantile_out_of_range");
    }
}

#[test]
fn tied_depths_share_ranks() {
    let a = [0.2, 0.5, 0.5, 0.9];
    let b = [1.0, 2.0, 2.0, 3.0];
    let agreement = rank_agreement(&a, &b).unwrap();
    assert!((agreement.spearman - 1.0).abs() < 1e-12);
    let flat = rank_agreement(&a, &[0.4; 4]).unwrap();
    assert_eq!(flat.spearman, 0.0);
    assert_eq!(flat.pearson, 0.0);
}

#[test]
fn monotone_transforms_agree_in_rank() {
    let mean_distances = [0.5, 2.0, 1.0, 4.0, 3.0];
    let l2: Vec<f64> = mean_distances.iter().map(|d| 1e6 / (1.0 + d)).collect();
    let other: Vec<f64> = mean_distances.iter().map(|d| (-d).exp()).collect();
    let agreement = rank_agreement(&l2, &other).unwrap();
    assert!((agreement.spearman - 1.0).abs() < 1e-12);
    assert!(agreement.pearson > 0.0);

    let reversed: Vec<f64> = mean_distances.to_vec();
    let agreement = rank_agreement(&l2, &reversed).unwrap();
    assert!((agreement.spearman + 1.0).abs() < 1e-12);
}

#[test]
fn agreement_needs_equal_lengths() {
    let err = rank_agreement(&[0.1, 0.2], &[0.1]).unwrap_err();
    assert_eq!(err.info().code, "length_mismatch");
}
