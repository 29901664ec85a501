use eda_lrd::{block_variance_hurst, triangle_area_hurst, HurstOpts};

#[test]
fn short_series_is_rejected() {
    let err = block_variance_hurst(&[1.0, 2.0, 3.0, 4.0], &HurstOpts::default()).unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err.info().code, "series_too_short");
}

#[test]
fn constant_series_is_degenerate() {
    let series = vec![2.5; 1_000];
    let err = block_variance_hurst(&series, &HurstOpts::default()).unwrap_err();
    assert_eq!(err.info().code, "degenerate_series");
    let err = triangle_area_hurst(&series, &HurstOpts::default()).unwrap_err();
    assert_eq!(err.info().code, "degenerate_series");
}

#[test]
fn non_finite_values_are_rejected() {
    let mut series: Vec<f64> = (0..1_000).map(|i| (i as f64).sin()).collect();
    series[10] = f64::INFINITY;
    let err = triangle_area_hurst(&series, &HurstOpts::default()).unwrap_err();
    assert_eq!(err.info().code, "non_finite_value");
}

#[test]
fn options_are_validated() {
    let series: Vec<f64> = (0..1_000).map(|i| (i as f64 * 0.3).sin()).collect();
    let cases = [
        (HurstOpts { min_scale: 0, ..HurstOpts::default() }, "min_scale_zero"),
        (HurstOpts { num_scales: 2, ..HurstOpts::default() }, "too_few_scales"),
        (HurstOpts { min_blocks: 1, ..HurstOpts::default() }, "too_few_blocks"),
    ];
    for (opts, code) in cases {
        let err = block_variance_hurst(&series, &opts).unwrap_err();
        assert_eq!(err.info().code, code);
    }
}
