//! ウェーブ進行（スポーン数・完了判定・アンロック）の結合テスト

use horde_core::enemy::EnemyKind;
use horde_sim::{frame_step, start_wave, FrameEvent, GameWorldInner};

const FRAME_MS: f64 = 100.0;

fn run_frames(w: &mut GameWorldInner, frames: u32) -> Vec<FrameEvent> {
    let mut events = Vec::new();
    for _ in 0..frames {
        frame_step(w, FRAME_MS);
        events.extend(w.drain_frame_events());
    }
    events
}

fn spawned_kinds(events: &[FrameEvent]) -> Vec<EnemyKind> {
    events
        .iter()
        .filter_map(|ev| match ev {
            FrameEvent::EnemySpawned { kind, .. } => Some(*kind),
            _ => None,
        })
        .collect()
}

#[test]
fn wave_one_spawns_exactly_five_enemies() {
    let mut w = GameWorldInner::new(7);
    start_wave(&mut w, 1);
    w.drain_frame_events();

    // 2 秒間隔 x 5 体 = 10 秒。余裕をみて 15 秒回す。
    let events = run_frames(&mut w, 150);
    let kinds = spawned_kinds(&events);
    assert_eq!(kinds.len(), 5);
    assert!(!w.wave.spawning);
    // ウェーブ 1 は全員 Basic
    assert!(kinds.iter().all(|&k| k == EnemyKind::Basic));
    // 敵は生存しているのでウェーブは未完了
    assert_eq!(w.enemies.count, 5);
    assert!(!w.wave.is_complete(w.enemies.count));
}

#[test]
fn first_spawn_waits_one_full_interval() {
    let mut w = GameWorldInner::new(7);
    start_wave(&mut w, 1);
    w.drain_frame_events();

    // 1900ms まではスポーンしない
    let events = run_frames(&mut w, 19);
    assert!(spawned_kinds(&events).is_empty());
    // 2000ms ちょうどで 1 体目
    let events = run_frames(&mut w, 1);
    assert_eq!(spawned_kinds(&events).len(), 1);
}

#[test]
fn clearing_a_wave_advances_and_unlocks_shotgun() {
    let mut w = GameWorldInner::new(7);
    start_wave(&mut w, 1);

    // スポーンが完了するまで回す
    run_frames(&mut w, 110);
    assert!(!w.wave.spawning);
    assert_eq!(w.enemies.count, 5);

    // 全滅させる
    for i in 0..w.enemies.len() {
        if w.enemies.is_active(i) {
            w.enemies.take_damage(i, 10_000.0);
        }
    }
    let events = run_frames(&mut w, 1);

    // ウェーブ 1 完了 → ウェーブ 2 開始、8 体が予定される
    assert!(events.contains(&FrameEvent::WaveCompleted { wave: 1 }));
    assert!(events.contains(&FrameEvent::WaveStarted { wave: 2 }));
    assert_eq!(w.wave.current_wave, 2);
    assert_eq!(w.wave.total_to_spawn, 8);

    // ウェーブ 2 でショットガンが解放され、自動装備される
    assert!(events
        .iter()
        .any(|ev| matches!(ev, FrameEvent::WeaponUnlocked { .. })));
    assert!(w.player.is_weapon_unlocked(1));
    assert_eq!(w.player.current_weapon, 1);
    assert_eq!(w.current_weapon().kind.name(), "Shotgun");
}

#[test]
fn boss_wave_opens_with_a_boss() {
    let mut w = GameWorldInner::new(11);
    start_wave(&mut w, 5);
    w.drain_frame_events();

    // ウェーブ 5 の間隔は 1200ms
    let events = run_frames(&mut w, 13);
    let kinds = spawned_kinds(&events);
    assert_eq!(kinds.len(), 1);
    assert_eq!(kinds[0], EnemyKind::Boss);
    assert_eq!(w.wave.total_to_spawn, 17);
}

#[test]
fn spawn_interval_shrinks_with_wave_number() {
    let mut w = GameWorldInner::new(3);
    start_wave(&mut w, 9);
    // max(500, 2000 - 200 * 8) = 500ms
    assert!((w.wave.spawn_interval_ms - 500.0).abs() < 0.001);
    w.drain_frame_events();

    // 1 秒で 2 体
    let events = run_frames(&mut w, 10);
    assert_eq!(spawned_kinds(&events).len(), 2);
}

#[test]
fn delta_time_is_capped_against_stalls() {
    let mut w = GameWorldInner::new(5);
    start_wave(&mut w, 1);

    // 5 秒のストールが来ても 1 フレームぶんは 100ms まで
    frame_step(&mut w, 5000.0);
    assert!((w.clock_ms - 100.0).abs() < 1e-3);
    assert!((w.wave.spawn_timer_ms - 100.0).abs() < 1e-3);
}

#[test]
fn wave_not_complete_while_spawning_even_with_no_live_enemies() {
    let mut w = GameWorldInner::new(5);
    start_wave(&mut w, 1);
    w.drain_frame_events();

    // 1 体目をスポーンさせて即殺す（スポーンは継続中）
    run_frames(&mut w, 20);
    assert_eq!(w.enemies.count, 1);
    for i in 0..w.enemies.len() {
        if w.enemies.is_active(i) {
            w.enemies.take_damage(i, 10_000.0);
        }
    }
    let events = run_frames(&mut w, 1);
    assert_eq!(w.enemies.count, 0);
    assert!(w.wave.spawning);
    assert!(!events.contains(&FrameEvent::WaveCompleted { wave: 1 }));
    assert_eq!(w.wave.current_wave, 1);
}
