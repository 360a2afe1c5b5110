//! Path: horde_sim/src/game_logic/systems/projectiles.rs
//! Summary: 弾丸の移動・寿命・弾丸 vs 敵の衝突解決

use crate::world::{FrameEvent, GameWorldInner};
use horde_core::constants::{BULLET_HIT_RADIUS, ENEMY_CENTER_HEIGHT, ROCKET_EXPLOSION_RADIUS};
use horde_core::util::explosion_damage;

/// 弾丸を移動・寿命更新し、敵との衝突を解決する。
/// 1 発の弾丸は 1 フレームに 1 体まで（最初のヒットで消滅）。
/// 寿命切れは単に消えるだけで、ロケットでも爆発しない。
pub(crate) fn update_projectiles(w: &mut GameWorldInner, dt: f32) {
    // 移動 + 寿命
    let bullet_len = w.bullets.len();
    for i in 0..bullet_len {
        if !w.bullets.alive[i] {
            continue;
        }
        let step = w.bullets.speeds[i] * dt;
        w.bullets.positions_x[i] += w.bullets.dirs_x[i] * step;
        w.bullets.positions_y[i] += w.bullets.dirs_y[i] * step;
        w.bullets.positions_z[i] += w.bullets.dirs_z[i] * step;
        w.bullets.lifetime[i] -= dt;
        if w.bullets.lifetime[i] <= 0.0 {
            w.bullets.kill(i);
        }
    }

    // 弾丸 vs 敵
    let query_radius = BULLET_HIT_RADIUS + 1.0;
    for bi in 0..bullet_len {
        if !w.bullets.alive[bi] {
            continue;
        }
        let bx = w.bullets.positions_x[bi];
        let by = w.bullets.positions_y[bi];
        let bz = w.bullets.positions_z[bi];

        let mut candidates = std::mem::take(&mut w.enemies.query_buf);
        w.collision.query_nearby_into(bx, bz, query_radius, &mut candidates);
        let mut hit = None;
        for &ei in &candidates {
            if !w.enemies.is_active(ei) {
                continue;
            }
            let dx = bx - w.enemies.positions_x[ei];
            let dy = by - ENEMY_CENTER_HEIGHT;
            let dz = bz - w.enemies.positions_z[ei];
            if dx * dx + dy * dy + dz * dz < BULLET_HIT_RADIUS * BULLET_HIT_RADIUS {
                hit = Some(ei);
                break;
            }
        }
        w.enemies.query_buf = candidates;

        if let Some(ei) = hit {
            let damage = w.bullets.damage[bi];
            if w.bullets.explosive[bi] {
                w.bullets.kill(bi);
                explode_rocket(w, bx, by, bz, damage);
            } else {
                let died = w.enemies.take_damage(ei, damage as f32);
                if died {
                    w.register_kill(ei, true);
                } else {
                    let kind = w.enemies.kinds[ei];
                    w.frame_events.push(FrameEvent::EnemyHit { kind });
                }
                w.bullets.kill(bi);
            }
        }
    }
}

/// ロケットの範囲ダメージ: 半径内の全敵に線形減衰ダメージ
pub(crate) fn explode_rocket(w: &mut GameWorldInner, x: f32, y: f32, z: f32, max_damage: i32) {
    w.frame_events.push(FrameEvent::RocketExploded { x, z });

    for ei in 0..w.enemies.len() {
        if !w.enemies.is_active(ei) {
            continue;
        }
        let dx = w.enemies.positions_x[ei] - x;
        let dy = ENEMY_CENTER_HEIGHT - y;
        let dz = w.enemies.positions_z[ei] - z;
        let dist = (dx * dx + dy * dy + dz * dz).sqrt();
        let damage = explosion_damage(max_damage, dist, ROCKET_EXPLOSION_RADIUS);
        if damage > 0 && w.enemies.take_damage(ei, damage as f32) {
            w.register_kill(ei, true);
        }
    }
}
