//! Path: horde_sim/src/game_logic/systems/enemies.rs
//! Summary: 敵の操舵 AI・変種別フック・死亡掃除

use crate::world::{FrameEvent, GameWorldInner, ScheduledEffect};
use horde_core::constants::{
    BOSS_ATTACK_INTERVAL, BOSS_ATTACK_RANGE, BOSS_WARNING_MS, ENEMY_SEPARATION_FORCE,
    ENEMY_SEPARATION_RADIUS, EXPLODER_FUSE_MS, EXPLODER_TRIGGER_RANGE, LUNGE_CHANCE,
    LUNGE_SPEED_FACTOR,
};
use horde_core::enemy::EnemyKind;
use horde_core::physics::separation::apply_separation;
use rayon::prelude::*;

/// 敵更新: 突進抽選 → 操舵 → 変種別フック → 分離パス → 死亡掃除。
/// 移動は衝突解決より前に行う（この順序はフレーム内で固定）。
pub(crate) fn update_enemies(w: &mut GameWorldInner, dt: f32) {
    let px = w.player.x;
    let pz = w.player.z;

    roll_lunges(w);
    steer_towards_player(w, px, pz, dt);
    update_variant_behavior(w, px, pz, dt);

    // 敵同士の重なりを解消する分離パス（起爆中の個体は動かさない）
    {
        let enemies = &mut w.enemies;
        let len = enemies.len();
        enemies.active_mask.resize(len, false);
        for i in 0..len {
            enemies.active_mask[i] =
                enemies.alive[i] && !enemies.dying[i] && !enemies.exploding[i];
        }
        // 借用を分けるため一時的にバッファを取り出す
        let mut sep_x = std::mem::take(&mut enemies.sep_x);
        let mut sep_z = std::mem::take(&mut enemies.sep_z);
        let active = std::mem::take(&mut enemies.active_mask);
        apply_separation(
            &mut enemies.positions_x,
            &mut enemies.positions_z,
            &active,
            &mut sep_x,
            &mut sep_z,
            ENEMY_SEPARATION_RADIUS,
            ENEMY_SEPARATION_FORCE,
            dt,
        );
        enemies.sep_x = sep_x;
        enemies.sep_z = sep_z;
        enemies.active_mask = active;
    }

    // 死亡掃除: このフレームで die 済み、または HP 0 のスロットを
    // 同一更新パス内で破棄する（死んだ敵がウェーブ完了を塞がない）
    for i in 0..w.enemies.len() {
        if w.enemies.alive[i] && (w.enemies.dying[i] || w.enemies.is_dead(i)) {
            w.destroy_enemy(i);
        }
    }
}

/// Fast の突進抽選（1%/frame）。当たった個体はこのフレームの通常操舵が
/// 突進インパルスに置き換わる。RNG を使うため直列パス。
fn roll_lunges(w: &mut GameWorldInner) {
    let len = w.enemies.len();
    w.enemies.lunge_mask.resize(len, false);
    for i in 0..len {
        let lunging = w.enemies.alive[i]
            && !w.enemies.dying[i]
            && w.enemies.kinds[i] == EnemyKind::Fast
            && w.rng.chance(LUNGE_CHANCE);
        w.enemies.lunge_mask[i] = lunging;
    }
}

/// 操舵: プレイヤー方向へ加速し、水平速度を変種の最高速度でクランプする。
/// 敵は地面を離れない（垂直成分は存在しない）。
/// 突進フレームの Fast は通常操舵の代わりに速度インパルスで跳ぶ
/// （翌フレームのクランプで通常速度へ戻る）。
fn steer_towards_player(w: &mut GameWorldInner, px: f32, pz: f32, dt: f32) {
    let enemies = &mut w.enemies;
    let len = enemies.len();
    let positions_x  = &mut enemies.positions_x[..len];
    let positions_z  = &mut enemies.positions_z[..len];
    let velocities_x = &mut enemies.velocities_x[..len];
    let velocities_z = &mut enemies.velocities_z[..len];
    let kinds        = &enemies.kinds[..len];
    let alive        = &enemies.alive[..len];
    let dying        = &enemies.dying[..len];
    let exploding    = &enemies.exploding[..len];
    let lunges       = &enemies.lunge_mask[..len];

    (
        positions_x,
        positions_z,
        velocities_x,
        velocities_z,
        kinds,
        alive,
        dying,
        exploding,
        lunges,
    )
        .into_par_iter()
        .for_each(|(x, z, vx, vz, kind, is_alive, is_dying, is_exploding, is_lunging)| {
            if !*is_alive || *is_dying {
                return;
            }
            if *is_exploding {
                // 起爆シーケンス中は移動凍結
                *vx = 0.0;
                *vz = 0.0;
                return;
            }
            let speed = kind.speed();
            let dx = px - *x;
            let dz = pz - *z;
            let dist = (dx * dx + dz * dz).sqrt().max(0.001);

            if *is_lunging {
                // 突進: 通常操舵を置き換える瞬発的なインパルス
                *vx = (dx / dist) * speed * LUNGE_SPEED_FACTOR;
                *vz = (dz / dist) * speed * LUNGE_SPEED_FACTOR;
                *x += *vx * dt;
                *z += *vz * dt;
                return;
            }

            // 有界の加速度で向きを変え、最高速度でクランプ
            let accel = speed * 10.0;
            *vx += (dx / dist) * accel * dt;
            *vz += (dz / dist) * accel * dt;
            let v = (*vx * *vx + *vz * *vz).sqrt();
            if v > speed {
                let factor = speed / v;
                *vx *= factor;
                *vz *= factor;
            }
            *x += *vx * dt;
            *z += *vz * dt;
        });
}

/// 変種別フック（RNG・タイマーを使うため直列パス）
fn update_variant_behavior(w: &mut GameWorldInner, px: f32, pz: f32, dt: f32) {
    for i in 0..w.enemies.len() {
        if !w.enemies.is_active(i) {
            continue;
        }
        let ex = w.enemies.positions_x[i];
        let ez = w.enemies.positions_z[i];
        let dx = px - ex;
        let dz = pz - ez;
        let dist = (dx * dx + dz * dz).sqrt().max(0.001);

        match w.enemies.kinds[i] {
            EnemyKind::Exploding => {
                if !w.enemies.exploding[i] && dist < EXPLODER_TRIGGER_RANGE {
                    // 起爆シーケンス開始: 移動凍結、フューズをスケジュール
                    w.enemies.exploding[i] = true;
                    w.enemies.velocities_x[i] = 0.0;
                    w.enemies.velocities_z[i] = 0.0;
                    let id = w.enemies.ids[i];
                    w.timers.schedule(
                        w.clock_ms + EXPLODER_FUSE_MS,
                        ScheduledEffect::ExplosionFuse { enemy_id: id },
                    );
                }
            }
            EnemyKind::Boss => {
                if w.enemies.attack_cooldown[i] > 0.0 {
                    w.enemies.attack_cooldown[i] =
                        (w.enemies.attack_cooldown[i] - dt).max(0.0);
                }
                if w.enemies.attack_cooldown[i] <= 0.0 && dist < BOSS_ATTACK_RANGE {
                    // 予兆を出し、1 秒後の衝撃波をスケジュール
                    let id = w.enemies.ids[i];
                    w.frame_events.push(FrameEvent::BossAttackWarning { id });
                    w.timers.schedule(
                        w.clock_ms + BOSS_WARNING_MS,
                        ScheduledEffect::BossShockwave { enemy_id: id },
                    );
                    w.enemies.attack_cooldown[i] = BOSS_ATTACK_INTERVAL;
                }
            }
            // Fast の突進は操舵パスで処理済み
            EnemyKind::Basic | EnemyKind::Fast => {}
        }
    }
}
