// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Rect;
use lodestone_magnet::{ElementHost, HoverRegistry, PointerEventKind};
use lodestone_tween::TweenSpec;

type Registry = HoverRegistry<u32, (u32, PointerEventKind)>;

struct Grid {
    len: u32,
    detached_below: u32,
}

impl ElementHost for Grid {
    type Element = u32;
    type Listener = (u32, PointerEventKind);

    fn marked_elements(&self, _attribute: &str, out: &mut Vec<u32>) {
        out.extend(self.detached_below..self.len);
    }
    fn is_connected(&self, element: &u32) -> bool {
        *element >= self.detached_below && *element < self.len
    }
    fn bounds(&self, element: &u32) -> Option<Rect> {
        let i = f64::from(*element);
        Some(Rect::from_origin_size((i * 10.0, 0.0), (8.0, 8.0)))
    }
    fn corner_radius(&self, _element: &u32) -> f64 {
        0.0
    }
    fn attribute(&self, _element: &u32, _name: &str) -> Option<String> {
        None
    }
    fn attach(&mut self, element: &u32, kind: PointerEventKind) -> (u32, PointerEventKind) {
        (*element, kind)
    }
    fn detach(&mut self, _element: &u32, _listener: (u32, PointerEventKind)) {}
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/scan");

    for len in [64_u32, 512, 4_096] {
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_with_input(BenchmarkId::new("cold", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    (
                        Grid {
                            len,
                            detached_below: 0,
                        },
                        Registry::new(TweenSpec::default()),
                    )
                },
                |(mut grid, mut registry)| {
                    black_box(registry.scan(&mut grid, "data-magnetic"));
                    black_box(registry);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("rescan", len), &len, |b, &len| {
            let mut grid = Grid {
                len,
                detached_below: 0,
            };
            let mut registry = Registry::new(TweenSpec::default());
            registry.scan(&mut grid, "data-magnetic");
            b.iter(|| black_box(registry.scan(&mut grid, "data-magnetic")));
        });
    }

    group.finish();
}

fn bench_prune(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/prune_half");

    for len in [64_u32, 512, 4_096] {
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut grid = Grid {
                        len,
                        detached_below: 0,
                    };
                    let mut registry = Registry::new(TweenSpec::default());
                    registry.scan(&mut grid, "data-magnetic");
                    grid.detached_below = len / 2;
                    (grid, registry)
                },
                |(mut grid, mut registry)| {
                    black_box(registry.prune(&mut grid));
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scan, bench_prune);
criterion_main!(benches);
