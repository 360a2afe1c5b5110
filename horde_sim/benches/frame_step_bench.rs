//! フレームステップのベンチマーク: 敵数ごとのステップ時間

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use horde_core::enemy::EnemyKind;
use horde_sim::{frame_step, start_wave, GameWorldInner};

fn setup_world(n: usize) -> GameWorldInner {
    let mut w = GameWorldInner::new(42);
    start_wave(&mut w, 1);
    for i in 0..n {
        let angle = i as f32 / n as f32 * std::f32::consts::TAU;
        let dist = 10.0 + (i % 25) as f32;
        w.spawn_enemy(EnemyKind::Basic, angle.cos() * dist, angle.sin() * dist);
    }
    w.player.firing = true;
    w.drain_frame_events();
    w
}

fn bench_frame_step(c: &mut Criterion) {
    let dt = 1000.0 / 60.0;

    for &n in &[50usize, 500] {
        c.bench_function(&format!("frame_step_{n}_enemies"), |b| {
            b.iter_batched(
                || setup_world(n),
                |mut w| {
                    frame_step(&mut w, dt);
                    w
                },
                BatchSize::PerIteration,
            )
        });
    }
}

criterion_group!(benches, bench_frame_step);
criterion_main!(benches);
