// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use trellis_input::{MouseButton, MouseEvent, MouseMoveEvent};
use trellis_layout::{
    HorizontalAlign, Layout, PositionType, RecordingSurface, VerticalAlign, Widget,
};

/// A screen-sized column of `rows` rows, each holding `cells` fixed cells
/// separated by expanding gaps.
fn build_grid(rows: u32, cells: u32) -> Layout {
    let mut root = Layout::new(PositionType::Vertical);
    root.set_size(1280, 720);
    root.set_horizontal_align(HorizontalAlign::Center);

    for _ in 0..rows {
        let row = root.add_layout(PositionType::Horizontal);
        row.set_size(1200, 0);
        row.set_vertical_align(VerticalAlign::Middle);
        for cell in 0..cells {
            if cell > 0 {
                row.add_spacer_dynamic();
            }
            row.add_spacer_static(24, 16);
        }
        root.add_spacer_dynamic();
    }

    root
}

/// Pointer positions sweeping the screen diagonally.
fn sweep(steps: i32) -> impl Iterator<Item = (i32, i32)> {
    (0..steps).map(move |i| (i * 1280 / steps, i * 720 / steps))
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("trellis_layout");
    group.sample_size(50);

    for &(rows, cells) in &[(8_u32, 8_u32), (32, 16), (64, 32)] {
        group.bench_function(format!("adjust_placement(rows={rows},cells={cells})"), |b| {
            let mut root = build_grid(rows, cells);
            b.iter(|| {
                root.adjust_placement();
                black_box(root.entries().len());
            });
        });

        group.bench_function(format!("render(rows={rows},cells={cells})"), |b| {
            let mut root = build_grid(rows, cells);
            b.iter_batched(
                RecordingSurface::new,
                |mut surface| {
                    root.render(&mut surface).expect("spacers always render");
                    black_box(surface);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("pointer_sweep(rows={rows},cells={cells})"), |b| {
            let mut root = build_grid(rows, cells);
            b.iter(|| {
                for (x, y) in sweep(64) {
                    black_box(root.on_mouse_move(&MouseMoveEvent::at(x, y)));
                }
            });
        });

        group.bench_function(format!("click(rows={rows},cells={cells})"), |b| {
            let mut root = build_grid(rows, cells);
            b.iter(|| {
                let down = MouseEvent::at(40, 12, MouseButton::Left);
                black_box(root.on_mouse_button_down(&down));
                black_box(root.on_mouse_button_up(&down));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
