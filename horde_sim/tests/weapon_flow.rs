//! 武器の発射・リロードフローの結合テスト（フレームループ駆動）

use horde_core::enemy::EnemyKind;
use horde_sim::{
    fire_current_weapon, frame_step, reload_current_weapon, switch_weapon, FrameEvent,
    GameWorldInner,
};

const FRAME_MS: f64 = 100.0;

fn run_frames(w: &mut GameWorldInner, frames: u32) {
    for _ in 0..frames {
        frame_step(w, FRAME_MS);
    }
}

#[test]
fn pistol_fire_rate_rejects_second_shot_within_interval() {
    let mut w = GameWorldInner::new(1);

    // 1 発目は撃てる
    assert!(fire_current_weapon(&mut w));
    assert_eq!(w.weapons[0].current_ammo, 11);

    // 400ms 後: 2 発/秒 = 500ms 間隔なので拒否、弾薬は減らない
    w.clock_ms = 400.0;
    assert!(!fire_current_weapon(&mut w));
    assert_eq!(w.weapons[0].current_ammo, 11);

    // 500ms 後は撃てる
    w.clock_ms = 500.0;
    assert!(fire_current_weapon(&mut w));
    assert_eq!(w.weapons[0].current_ammo, 10);
}

#[test]
fn emptying_magazine_starts_auto_reload_and_completes_on_schedule() {
    let mut w = GameWorldInner::new(1);
    let rocket = 3;
    w.player.unlock_weapon(rocket);
    assert!(switch_weapon(&mut w, rocket));

    // マガジン 2 発を撃ち尽くす（クールダウン 2000ms）
    assert!(fire_current_weapon(&mut w));
    w.clock_ms = 2000.0;
    assert!(fire_current_weapon(&mut w));
    assert!(w.weapons[rocket].reloading);
    let events = w.drain_frame_events();
    assert!(events.contains(&FrameEvent::ReloadStarted {
        weapon: w.weapons[rocket].kind
    }));

    // リロード中は撃てない
    w.clock_ms = 3000.0;
    assert!(!fire_current_weapon(&mut w));

    // リロード時間 3 秒が経過するまでフレームを回す（clock 2000 → 5000+）
    run_frames(&mut w, 31);
    assert!(!w.weapons[rocket].reloading);
    assert_eq!(w.weapons[rocket].current_ammo, 2);
    assert_eq!(w.weapons[rocket].reserve_ammo, 10);
    let events = w.drain_frame_events();
    assert!(events.contains(&FrameEvent::ReloadFinished {
        weapon: w.weapons[rocket].kind
    }));
}

#[test]
fn reload_accounting_after_completion() {
    let mut w = GameWorldInner::new(1);
    w.weapons[0].current_ammo = 3;
    w.weapons[0].reserve_ammo = 5;

    assert!(reload_current_weapon(&mut w));
    // 1.5 秒のリロードを待つ
    run_frames(&mut w, 16);

    // ammo_after = min(magazine, before + reserve), reserve は差分だけ減る
    assert_eq!(w.weapons[0].current_ammo, 8);
    assert_eq!(w.weapons[0].reserve_ammo, 0);
}

#[test]
fn empty_magazine_without_reserve_never_reloads() {
    let mut w = GameWorldInner::new(1);
    w.weapons[0].current_ammo = 0;
    w.weapons[0].reserve_ammo = 0;

    assert!(!fire_current_weapon(&mut w));
    assert!(!w.weapons[0].reloading);
    let events = w.drain_frame_events();
    assert!(events
        .iter()
        .any(|ev| matches!(ev, FrameEvent::MagazineEmpty { .. })));

    // 500ms 以内の再試行ではクリック音イベントは出ない
    w.clock_ms = 200.0;
    assert!(!fire_current_weapon(&mut w));
    assert!(w.drain_frame_events().is_empty());
}

#[test]
fn shotgun_fires_primary_ray_plus_spread_pellets() {
    let mut w = GameWorldInner::new(1);
    w.player.unlock_weapon(1);
    assert!(switch_weapon(&mut w, 1));

    assert!(fire_current_weapon(&mut w));
    // 本体レイ 1 + 拡散 5 = 6 本のトレーサー
    assert_eq!(w.bullets.count, 6);
}

#[test]
fn tracer_lifetime_is_cut_at_raycast_hit() {
    let mut w = GameWorldInner::new(1);
    // 正面 20 ユニットに敵を置き、照準を合わせる
    w.spawn_enemy(EnemyKind::Basic, 0.0, -20.0);
    w.player.set_aim(0.0, -0.9, -20.0);

    assert!(fire_current_weapon(&mut w));
    let i = (0..w.bullets.len()).find(|&i| w.bullets.alive[i]).unwrap();
    // 射程いっぱい（1.0 秒）ではなくヒット距離で切れている
    assert!(w.bullets.lifetime[i] < 0.5);
    assert!(w.bullets.lifetime[i] > 0.3);
}

#[test]
fn switch_to_locked_weapon_is_rejected() {
    let mut w = GameWorldInner::new(1);
    assert!(!switch_weapon(&mut w, 4));
    assert_eq!(w.player.current_weapon, 0);
    assert!(w.drain_frame_events().is_empty());
}
