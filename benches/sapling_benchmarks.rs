use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sapling::knn::classify;
use sapling::synthetic::random_clusters;
use sapling::{find_best_split, gini_impurity, BoundingBox, DecisionTree, Point};

pub fn tree_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let points = random_clusters(&mut rng, 50, &["A", "B"]);

    c.bench_function("gini impurity", |b| b.iter(|| gini_impurity(black_box(&points))));
    c.bench_function("find best split", |b| b.iter(|| find_best_split(black_box(&points))));
    c.bench_function("tree fit", |b| b.iter(|| DecisionTree::fit(black_box(&points), 5)));

    let tree = DecisionTree::fit(&points, 5).unwrap();
    let query = Point::new(5.0, 5.0);
    c.bench_function("tree predict", |b| b.iter(|| tree.predict(black_box(&query))));
    c.bench_function("decision regions", |b| {
        b.iter(|| tree.regions(black_box(BoundingBox::default())))
    });
    c.bench_function("knn classify", |b| {
        b.iter(|| classify(black_box(&points), black_box(&query), 5))
    });
}

criterion_group!(benches, tree_benchmarks);
criterion_main!(benches);
