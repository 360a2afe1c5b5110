//! Path: horde_sim/src/game_logic/systems/spawn.rs
//! Summary: ウェーブスポーン（間隔駆動・外周リング・タイプ抽選）

use crate::world::GameWorldInner;
use horde_core::enemy::EnemyKind;

/// スポーンタイマーを進め、間隔が満ちるたびに 1 体ずつスポーンする。
/// ウェーブの総数に達したらスポーンを停止する。
pub(crate) fn update_wave_spawning(w: &mut GameWorldInner, dt: f32) {
    if !w.wave.spawning {
        return;
    }
    w.wave.spawn_timer_ms += dt as f64 * 1000.0;
    while w.wave.spawning && w.wave.spawn_timer_ms >= w.wave.spawn_interval_ms {
        w.wave.spawn_timer_ms -= w.wave.spawn_interval_ms;
        spawn_one(w);
    }
}

fn spawn_one(w: &mut GameWorldInner) {
    // 外周リングから一様ランダムに地点を選ぶ
    let point_index = w.rng.pick_index(w.spawn_points.len());
    let (x, z) = w.spawn_points[point_index];

    // タイプ抽選はスポーンごとに独立した 1 回のロール
    let roll = w.rng.unit_f32();
    let first_of_wave = w.wave.spawned == 0;
    let kind = EnemyKind::for_spawn(w.wave.current_wave, first_of_wave, roll);

    w.spawn_enemy(kind, x, z);
    w.wave.spawned += 1;
    if w.wave.spawned >= w.wave.total_to_spawn {
        w.wave.spawning = false;
    }
}
