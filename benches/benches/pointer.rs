// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use tactile::{
    EventKind, Gestures, Hoverable, ManualClock, MouseInput, RawEvent, Scrollable,
};
use tactile_coords::{CoordinateMapper, PointerSample, ScaleGeometry};

/// Elements laid out on a grid; every tenth one is a scaled frame.
struct Grid {
    columns: u32,
}

impl ScaleGeometry<u32> for Grid {
    fn bounding_box(&self, element: u32) -> Rect {
        let (x, y) = (element % self.columns, element / self.columns);
        Rect::from_origin_size(
            Point::new(f64::from(x) * 40.0, f64::from(y) * 40.0),
            (40.0, 40.0),
        )
    }

    fn scale_frame(&self, element: u32) -> Option<u32> {
        Some(element - element % 10)
    }

    fn frame_scale(&self, frame: u32) -> Vec2 {
        let s = 1.0 + f64::from(frame % 3) * 0.5;
        Vec2::new(s, s)
    }
}

impl Scrollable<u32> for Grid {
    fn scroll_offset(&self, _: u32) -> Vec2 {
        Vec2::ZERO
    }
}

impl Hoverable<u32> for Grid {
    fn element_at(&self, point: Point) -> Option<u32> {
        let (x, y) = ((point.x / 40.0) as u32, (point.y / 40.0) as u32);
        Some(y * self.columns + x)
    }
}

fn bench_mapper(c: &mut Criterion) {
    let mut group = c.benchmark_group("coords/pointer_offset");
    let grid = Grid { columns: 32 };

    for n in [64_u32, 1_024] {
        let sample = PointerSample::new(u32::MAX, Point::new(300.0, 200.0));
        group.bench_with_input(BenchmarkId::new("cold", n), &n, |b, &n| {
            b.iter_batched(
                CoordinateMapper::<u32>::new,
                |mut mapper| {
                    for element in 0..n {
                        black_box(mapper.pointer_offset(&grid, &sample, element));
                    }
                    black_box(mapper);
                },
                BatchSize::SmallInput,
            );
        });

        let mut warm = CoordinateMapper::new();
        for element in 0..n {
            warm.scale(&grid, element);
        }
        group.bench_with_input(BenchmarkId::new("cached", n), &n, |b, &n| {
            b.iter(|| {
                for element in 0..n {
                    black_box(warm.pointer_offset(&grid, &sample, element));
                }
            });
        });
    }

    group.finish();
}

/// Hover hit tests run for every tracked element on every move.
fn bench_hover_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures/mouse_move");
    let grid = Grid { columns: 32 };

    for tracked in [16_u32, 256] {
        let mut gestures: Gestures<u32, ManualClock> = Gestures::new(ManualClock::new());
        for element in 0..tracked {
            gestures.on(element, EventKind::PointerOver, |e| {
                black_box(e);
            });
        }
        let mut step = 0_u32;
        group.bench_function(BenchmarkId::new("hover", tracked), |b| {
            b.iter(|| {
                step = step.wrapping_add(7);
                let point = Point::new(f64::from(step % 1_280), f64::from(step % 640));
                let event = RawEvent::MouseMove(MouseInput::new(0, point));
                black_box(gestures.dispatch(&grid, &event));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mapper, bench_hover_moves);
criterion_main!(benches);
