// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use lodestone::{
    CursorConfig, CursorHost, ElementEvent, ElementHost, MagneticCursor, MediaFeatures,
    PointerEventKind,
};

struct Page {
    len: u32,
}

impl ElementHost for Page {
    type Element = u32;
    type Listener = PointerEventKind;

    fn marked_elements(&self, _attribute: &str, out: &mut Vec<u32>) {
        out.extend(0..self.len);
    }
    fn is_connected(&self, element: &u32) -> bool {
        *element < self.len
    }
    fn bounds(&self, element: &u32) -> Option<Rect> {
        let i = f64::from(*element % 64);
        Some(Rect::from_origin_size((i * 12.0, 40.0), (10.0, 10.0)))
    }
    fn corner_radius(&self, _element: &u32) -> f64 {
        4.0
    }
    fn attribute(&self, _element: &u32, _name: &str) -> Option<String> {
        None
    }
    fn attach(&mut self, _element: &u32, kind: PointerEventKind) -> PointerEventKind {
        kind
    }
    fn detach(&mut self, _element: &u32, _listener: PointerEventKind) {}
}

impl CursorHost for Page {
    type FrameSubscription = ();
    type MutationObserver = ();

    fn media_features(&self) -> MediaFeatures {
        MediaFeatures::empty()
    }
    fn viewport(&self) -> Size {
        Size::new(1280.0, 800.0)
    }
    fn request_frames(&mut self) {}
    fn cancel_frames(&mut self, _subscription: ()) {}
    fn observe_mutations(&mut self) {}
    fn disconnect_mutations(&mut self, _observer: ()) {}
    fn set_native_cursor_hidden(&mut self, _hidden: bool) {}
}

fn mount(len: u32) -> MagneticCursor<Page> {
    match MagneticCursor::mount(CursorConfig::default(), Page { len }) {
        Ok(cursor) => cursor,
        Err(err) => panic!("default config rejected: {err}"),
    }
}

fn bench_free_roam(c: &mut Criterion) {
    let mut cursor = mount(0);
    let mut t = 0.0_f64;
    c.bench_function("frame/free_roam", |b| {
        b.iter(|| {
            t += 0.05;
            cursor.pointer_move(Point::new(640.0 + 300.0 * t.cos(), 400.0 + 200.0 * t.sin()));
            cursor.advance_frame(1.0 / 60.0);
            black_box(cursor.frame());
        });
    });
}

fn bench_hovered(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/hovered");

    for len in [16_u32, 256, 2_048] {
        let mut cursor = mount(len);
        cursor.pointer_move(Point::new(20.0, 45.0));
        cursor.element_event(&1, ElementEvent::Enter);
        let mut x = 0.0_f64;
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| {
                x = (x + 1.0) % 10.0;
                cursor.element_event(&1, ElementEvent::Move(Point::new(12.0 + x, 45.0)));
                cursor.advance_frame(1.0 / 60.0);
                black_box(cursor.element_translation(&1));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_free_roam, bench_hovered);
criterion_main!(benches);
