//! Benchmarks for tree traversal and creation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use reef_vfs::{Node, insert_at, resolve};

/// A chain of `depth` nested directories, each holding `width` files.
fn build_tree(depth: usize, width: usize) -> (Node, String) {
    let mut root = Node::root();
    let mut cwd = String::from("/");
    for d in 0..depth {
        let path = insert_at(&mut root, &cwd, &format!("d{d}"), |n| Node::dir(n, Vec::new())).unwrap();
        for f in 0..width {
            insert_at(&mut root, &path, &format!("file_{f}"), |n| Node::file(n, "x")).unwrap();
        }
        cwd = path;
    }
    (root, cwd)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("vfs_resolve");

    for (depth, width) in [(8, 10), (32, 10), (8, 500)] {
        let (root, deepest) = build_tree(depth, width);
        let label = format!("{depth}x{width}");

        group.bench_function(BenchmarkId::new("absolute", &label), |b| {
            b.iter(|| resolve(&root, "/", &deepest).unwrap());
        });

        let up = vec![".."; depth].join("/");
        group.bench_function(BenchmarkId::new("dotdot", &label), |b| {
            b.iter(|| resolve(&root, &deepest, &up).unwrap());
        });

        let last = format!("{deepest}/file_{}", width - 1);
        group.bench_function(BenchmarkId::new("last_sibling", &label), |b| {
            b.iter(|| resolve(&root, "/", &last).unwrap());
        });
    }

    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("vfs_insert");

    for n_entries in [100, 1_000] {
        let names: Vec<String> = (0..n_entries).map(|i| format!("entry_{i}")).collect();
        group.bench_function(BenchmarkId::new("flat", n_entries), |b| {
            b.iter(|| {
                let mut root = Node::root();
                for name in &names {
                    insert_at(&mut root, "/", name, |n| Node::dir(n, Vec::new())).unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_insert);
criterion_main!(benches);
