//! Synthetic data
//!
//! Seeded generation of small labeled point sets on the 0..10 square the
//! demos plot, for seeding visualizations, tests, and benches.
use crate::data::LabeledPoint;
use rand::rngs::StdRng;
use rand::Rng;

/// Generate `n_per_label` points around a random cluster center for each
/// label, clamped to the 0..10 domain.
pub fn random_clusters(rng: &mut StdRng, n_per_label: usize, labels: &[&str]) -> Vec<LabeledPoint> {
    let mut points = Vec::with_capacity(n_per_label * labels.len());
    for label in labels {
        let center_x: f64 = rng.gen_range(1.5..8.5);
        let center_y: f64 = rng.gen_range(1.5..8.5);
        for _ in 0..n_per_label {
            let x = (center_x + rng.gen_range(-1.5..1.5)).clamp(0.0, 10.0);
            let y = (center_y + rng.gen_range(-1.5..1.5)).clamp(0.0, 10.0);
            points.push(LabeledPoint::new(x, y, *label));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_clusters_counts_and_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = random_clusters(&mut rng, 10, &["A", "B"]);
        assert_eq!(points.len(), 20);
        assert_eq!(points.iter().filter(|p| p.label == "A").count(), 10);
        assert_eq!(points.iter().filter(|p| p.label == "B").count(), 10);
        for p in &points {
            assert!((0.0..=10.0).contains(&p.x));
            assert!((0.0..=10.0).contains(&p.y));
        }
    }

    #[test]
    fn test_same_seed_reproduces_points() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            random_clusters(&mut a, 5, &["A", "B"]),
            random_clusters(&mut b, 5, &["A", "B"])
        );
    }
}
