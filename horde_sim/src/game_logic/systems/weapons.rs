//! Path: horde_sim/src/game_logic/systems/weapons.rs
//! Summary: 発射ディスパッチ（ヒットスキャン・散弾・ロケット）と切り替え

use crate::world::{FireOutcome, FrameEvent, GameWorldInner, ScheduledEffect};
use horde_core::constants::{
    BULLET_HIT_RADIUS, ENEMY_CENTER_HEIGHT, PLAYER_EYE_HEIGHT, ROCKET_LIFETIME, ROCKET_SPEED,
    SHOTGUN_EXTRA_PELLETS, SHOTGUN_SPREAD, TRACER_LIFETIME, TRACER_SPEED,
};
use horde_core::weapon::WeaponKind;

/// 現在の武器で発射を試みる。実際に弾が出たときだけ true。
pub fn fire_current_weapon(w: &mut GameWorldInner) -> bool {
    let wi = w.player.current_weapon;
    let now = w.clock_ms;
    match w.weapons[wi].try_fire(now) {
        FireOutcome::Fired { emptied } => {
            let kind = w.weapons[wi].kind;
            w.frame_events.push(FrameEvent::ShotFired { weapon: kind });
            if kind.is_hitscan() {
                resolve_hitscan_fire(w, kind);
            } else {
                spawn_rocket(w, kind);
            }
            // 最後の 1 発でマガジンが空になったら即座にリロード開始
            if emptied {
                begin_reload(w, wi);
            }
            true
        }
        FireOutcome::Empty { cue, reserve_left } => {
            if cue {
                let kind = w.weapons[wi].kind;
                w.frame_events.push(FrameEvent::MagazineEmpty { weapon: kind });
            }
            if reserve_left {
                begin_reload(w, wi);
            }
            false
        }
        FireOutcome::Reloading | FireOutcome::OnCooldown => false,
    }
}

/// 指定スロットのリロードを開始し、完了タイマーをスケジュールする
pub(crate) fn begin_reload(w: &mut GameWorldInner, weapon_index: usize) -> bool {
    let now = w.clock_ms;
    if !w.weapons[weapon_index].start_reload(now) {
        return false;
    }
    let kind = w.weapons[weapon_index].kind;
    w.frame_events.push(FrameEvent::ReloadStarted { weapon: kind });
    w.timers.schedule(
        now + kind.reload_secs() as f64 * 1000.0,
        ScheduledEffect::ReloadComplete { weapon: weapon_index },
    );
    true
}

/// 現在の武器を手動リロードする
pub fn reload_current_weapon(w: &mut GameWorldInner) -> bool {
    begin_reload(w, w.player.current_weapon)
}

/// 解放済み武器へ切り替える。ロック中は no-op で false。
pub fn switch_weapon(w: &mut GameWorldInner, index: usize) -> bool {
    if w.player.switch_weapon(index) {
        let kind = w.weapons[index].kind;
        w.frame_events.push(FrameEvent::WeaponSwitched { weapon: kind });
        true
    } else {
        false
    }
}

/// 次/前の解放済み武器へ巡回切り替え
pub fn cycle_weapon(w: &mut GameWorldInner, dir: i32) -> bool {
    if w.player.cycle_weapon(dir) {
        let kind = w.weapons[w.player.current_weapon].kind;
        w.frame_events.push(FrameEvent::WeaponSwitched { weapon: kind });
        true
    } else {
        false
    }
}

/// ヒットスキャン解決: 視線レイを敵球とレイキャストし、ヒット地点
/// （外れなら最大射程）までのトレーサー弾を生成する。ダメージ自体は
/// トレーサーの衝突判定で与える。散弾銃は角度ブレ付きの追加レイを撃つ。
fn resolve_hitscan_fire(w: &mut GameWorldInner, kind: WeaponKind) {
    let aim = (w.player.aim_x, w.player.aim_y, w.player.aim_z);
    fire_ray(w, kind, aim);

    if kind == WeaponKind::Shotgun {
        for _ in 0..SHOTGUN_EXTRA_PELLETS {
            let dx = aim.0 + w.rng.spread(SHOTGUN_SPREAD);
            let dy = aim.1 + w.rng.spread(SHOTGUN_SPREAD);
            let dz = aim.2 + w.rng.spread(SHOTGUN_SPREAD);
            fire_ray(w, kind, (dx, dy, dz));
        }
    }
}

fn fire_ray(w: &mut GameWorldInner, kind: WeaponKind, dir: (f32, f32, f32)) {
    let len = (dir.0 * dir.0 + dir.1 * dir.1 + dir.2 * dir.2).sqrt().max(0.001);
    let dir = (dir.0 / len, dir.1 / len, dir.2 / len);
    let origin = (w.player.x, PLAYER_EYE_HEIGHT, w.player.z);
    let range = kind.range();

    // トレーサーの寿命をヒット地点（外れなら最大射程）で切る。
    // 判定球を通過し切るまでの余裕を足して、飛行中に的が近づいても
    // 衝突前に寿命が切れないようにする。
    let hit_dist = raycast_enemies(w, origin, dir, range).unwrap_or(range);
    let lifetime = ((hit_dist + 2.0 * BULLET_HIT_RADIUS) / TRACER_SPEED).min(TRACER_LIFETIME);

    w.bullets.spawn(
        origin.0, origin.1, origin.2,
        dir.0, dir.1, dir.2,
        TRACER_SPEED,
        lifetime,
        kind.damage(),
        false,
    );
}

fn spawn_rocket(w: &mut GameWorldInner, kind: WeaponKind) {
    w.bullets.spawn(
        w.player.x, PLAYER_EYE_HEIGHT, w.player.z,
        w.player.aim_x, w.player.aim_y, w.player.aim_z,
        ROCKET_SPEED,
        ROCKET_LIFETIME,
        kind.damage(),
        true,
    );
}

/// レイ vs 敵球の最近接ヒット距離。`max_dist` を超えるヒットは無視。
fn raycast_enemies(
    w: &GameWorldInner,
    origin: (f32, f32, f32),
    dir: (f32, f32, f32),
    max_dist: f32,
) -> Option<f32> {
    let mut nearest: Option<f32> = None;
    for i in 0..w.enemies.len() {
        if !w.enemies.is_active(i) {
            continue;
        }
        let cx = w.enemies.positions_x[i] - origin.0;
        let cy = ENEMY_CENTER_HEIGHT - origin.1;
        let cz = w.enemies.positions_z[i] - origin.2;

        // レイ上の最近接点までの距離 t
        let t = cx * dir.0 + cy * dir.1 + cz * dir.2;
        if t < 0.0 || t > max_dist {
            continue;
        }
        let closest_sq = (cx * cx + cy * cy + cz * cz) - t * t;
        if closest_sq > BULLET_HIT_RADIUS * BULLET_HIT_RADIUS {
            continue;
        }
        let hit_t = t - (BULLET_HIT_RADIUS * BULLET_HIT_RADIUS - closest_sq).sqrt();
        let hit_t = hit_t.max(0.0);
        if nearest.map_or(true, |best| hit_t < best) {
            nearest = Some(hit_t);
        }
    }
    nearest
}
