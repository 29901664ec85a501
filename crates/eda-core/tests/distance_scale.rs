use eda_core::{euclidean, Separation};

#[test]
fn euclidean_matches_textbook_formula() {
    assert!((euclidean(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-12);
    assert_eq!(euclidean(&[1.5, -2.0], &[1.5, -2.0]), 0.0);
}

#[test]
fn huge_finite_coordinates_do_not_overflow() {
    let d = euclidean(&[1e200], &[1.0]);
    assert!(d.is_finite());
    assert!((d / 1e200 - 1.0).abs() < 1e-12);

    let d = euclidean(&[1e200, 1e200], &[0.0, 0.0]);
    assert!((d / (1e200 * 2f64.sqrt()) - 1.0).abs() < 1e-12);

    let sep = Separation::between(&[1e308], &[-1e308]);
    assert!(sep.scale.is_finite());
    assert!((sep.norm - 1.0).abs() < 1e-12);
    assert!(sep.distance().is_infinite());
}

#[test]
fn unit_components_have_unit_norm() {
    let a = [1e300, -3e299];
    let b = [-2e299, 5e299];
    let sep = Separation::between(&a, &b);
    let len: f64 = a
        .iter()
        .zip(&b)
        .map(|(x, y)| sep.unit_component(*x, *y).powi(2))
        .sum::<f64>()
        .sqrt();
    assert!((len - 1.0).abs() < 1e-12);
}
