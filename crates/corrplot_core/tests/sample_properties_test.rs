use corrplot_core::{
    compute_correlation, generate_sample, NoiseSource, Point, SeededNoise, DEFAULT_SAMPLE_COUNT,
};

/// Always draws zero; generator output is the bare curve.
struct Silent;

impl NoiseSource for Silent {
    fn next_uniform(&mut self) -> f64 {
        0.0
    }
}

/// Replays the given draws in order.
struct Replay(std::vec::IntoIter<f64>);

impl NoiseSource for Replay {
    fn next_uniform(&mut self) -> f64 {
        self.0.next().expect("ran out of scripted draws")
    }
}

fn exponents() -> impl Iterator<Item = f64> {
    (10..=100).step_by(7).map(|tenths| tenths as f64 / 10.0)
}

#[test]
fn test_noise_free_sample_is_exact_curve() {
    for exponent in exponents() {
        for n in [1usize, 2, 17, DEFAULT_SAMPLE_COUNT] {
            let points = generate_sample(exponent, 0.0, n, Silent);
            assert_eq!(points.len(), n);
            for (i, p) in points.iter().enumerate() {
                let x = i as f64 / n as f64;
                assert_eq!(p.x, x);
                assert_eq!(p.ideal_y, libm::pow(x, exponent));
                assert_eq!(p.y, p.ideal_y, "exponent {} point {}", exponent, i);
            }
        }
    }
}

#[test]
fn test_x_strictly_increasing_over_domain() {
    let mut noise = SeededNoise::from_seed(11);
    for n in [2usize, 10, DEFAULT_SAMPLE_COUNT, 1000] {
        let points = generate_sample(4.5, 0.7, n, &mut noise);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[n - 1].x, (n - 1) as f64 / n as f64);
        assert!(points.windows(2).all(|w| w[0].x < w[1].x));
    }
}

#[test]
fn test_replayed_noise_gives_exact_output() {
    let draws = vec![-0.5, 0.0, 0.25, 0.49];
    let points = generate_sample(2.0, 0.4, 4, Replay(draws.clone().into_iter()));

    for (p, u) in points.iter().zip(draws) {
        assert_eq!(p.y, p.ideal_y + 0.4 * u);
    }
}

#[test]
fn test_power_two_four_points() {
    let points = generate_sample(2.0, 0.0, 4, Silent);

    let expected = [
        Point {
            x: 0.0,
            y: 0.0,
            ideal_y: 0.0,
        },
        Point {
            x: 0.25,
            y: 0.0625,
            ideal_y: 0.0625,
        },
        Point {
            x: 0.5,
            y: 0.25,
            ideal_y: 0.25,
        },
        Point {
            x: 0.75,
            y: 0.5625,
            ideal_y: 0.5625,
        },
    ];
    assert_eq!(points, expected);

    // Monotonic but curved: high, not 1.
    let r = compute_correlation(&points);
    assert!((r - 0.958_314_847_5).abs() < 1e-9, "r = {}", r);
    assert!(r < 1.0);
}

#[test]
fn test_single_point_correlation_undefined() {
    let points = generate_sample(3.0, 0.0, 1, Silent);
    assert!(!compute_correlation(&points).is_finite());
}

#[test]
fn test_repeated_x_correlation_undefined() {
    let points: Vec<(f64, f64)> = (0..20).map(|i| (0.5, i as f64)).collect();
    let r = compute_correlation(&points);
    assert!(r.is_nan() || r.is_infinite());
}

#[test]
fn test_correlation_falls_as_exponent_grows() {
    let r: Vec<f64> = [1.0, 2.0, 3.0, 5.0, 10.0]
        .iter()
        .map(|&p| compute_correlation(&generate_sample(p, 0.0, DEFAULT_SAMPLE_COUNT, Silent)))
        .collect();

    assert!((r[0] - 1.0).abs() < 1e-9);
    assert!((r[1] - 0.967_650_310_1).abs() < 1e-9);
    assert!(r.windows(2).all(|w| w[0] > w[1]), "{:?}", r);
}

#[test]
fn test_point_serializes_camel_case() {
    let point = Point {
        x: 0.5,
        y: 0.3,
        ideal_y: 0.25,
    };
    let json = serde_json::to_string(&point).unwrap();
    assert_eq!(json, r#"{"x":0.5,"y":0.3,"idealY":0.25}"#);
}
