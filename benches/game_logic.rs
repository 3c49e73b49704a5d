use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{GameSnapshot, GameState, PowerUpSpawner, SimpleRng};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::BASE_STEP_MS;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
        })
    });
}

fn bench_full_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_step_interval", |b| {
        b.iter(|| {
            state.tick(black_box(BASE_STEP_MS));
        })
    });
}

fn bench_power_up_spawn(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut spawner = PowerUpSpawner::new();

    c.bench_function("spawn_power_up", |b| {
        b.iter(|| {
            black_box(spawner.spawn(&mut rng));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let view = GameView::default();
    let viewport = Viewport::new(100, 30);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    state.snapshot_into(&mut snap);

    c.bench_function("render_frame_100x30", |b| {
        b.iter(|| {
            view.render_into(&snap, viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_full_step,
    bench_power_up_spawn,
    bench_snapshot,
    bench_render_frame
);
criterion_main!(benches);
