//! Path: horde_sim/src/game_logic/systems/combat.rs
//! Summary: 敵 vs プレイヤーの接触ダメージと自爆ゾンビの継続ダメージ

use crate::world::{FrameEvent, GameWorldInner};
use horde_core::constants::{
    ENEMY_CONTACT_RADIUS, EXPLODER_DAMAGE, EXPLODER_RADIUS, EXPLODER_TICK_FRACTION,
    INVINCIBLE_DURATION,
};
use horde_core::util::direction_bucket;

/// 敵 vs プレイヤーの衝突解決。
/// 接触ダメージは無敵時間でゲートし、被弾方向を 8 方向バケットで通知する。
pub(crate) fn resolve_player_contacts(w: &mut GameWorldInner, _dt: f32) {
    let px = w.player.x;
    let pz = w.player.z;

    // 接触ダメージ
    let mut candidates = std::mem::take(&mut w.enemies.query_buf);
    w.collision
        .query_nearby_into(px, pz, ENEMY_CONTACT_RADIUS + 1.0, &mut candidates);
    for &ei in &candidates {
        if !w.enemies.is_active(ei) {
            continue;
        }
        let ex = w.enemies.positions_x[ei];
        let ez = w.enemies.positions_z[ei];
        let dx = px - ex;
        let dz = pz - ez;
        if dx * dx + dz * dz >= ENEMY_CONTACT_RADIUS * ENEMY_CONTACT_RADIUS {
            continue;
        }
        let damage = w.enemies.kinds[ei].contact_damage();
        if damage <= 0.0 {
            continue;
        }
        if !w.player.is_invulnerable() && w.player.hp > 0.0 {
            w.player.take_damage(damage);
            w.player.invincible_timer = INVINCIBLE_DURATION;
            w.frame_events.push(FrameEvent::PlayerDamaged {
                damage,
                direction: direction_bucket(dx, dz),
            });
        }
    }
    w.enemies.query_buf = candidates;

    // 起爆シーケンス中の自爆ゾンビ: 半径内にいる間は毎フレーム
    // explosionDamage の 5% を継続的に受ける（無敵時間は消費しない）
    for ei in 0..w.enemies.len() {
        if !w.enemies.is_active(ei) || !w.enemies.exploding[ei] {
            continue;
        }
        let dx = px - w.enemies.positions_x[ei];
        let dz = pz - w.enemies.positions_z[ei];
        if dx * dx + dz * dz <= EXPLODER_RADIUS * EXPLODER_RADIUS
            && !w.player.is_invulnerable()
            && w.player.hp > 0.0
        {
            w.player
                .take_damage(EXPLODER_DAMAGE as f32 * EXPLODER_TICK_FRACTION);
        }
    }
}

/// 自爆ゾンビの起爆: プレイヤーと周囲の敵へ線形減衰の範囲ダメージを与え、
/// 本体は自壊する（得点なし）。フューズタイマーから呼ばれる。
pub(crate) fn detonate_exploder(w: &mut GameWorldInner, slot: usize) {
    use horde_core::util::explosion_damage;

    let ex = w.enemies.positions_x[slot];
    let ez = w.enemies.positions_z[slot];
    w.frame_events.push(FrameEvent::ZombieExploded { x: ex, z: ez });

    // プレイヤーへのダメージ
    let dx = w.player.x - ex;
    let dz = w.player.z - ez;
    let dist = (dx * dx + dz * dz).sqrt();
    let damage = explosion_damage(EXPLODER_DAMAGE, dist, EXPLODER_RADIUS);
    if damage > 0 && !w.player.is_invulnerable() && w.player.hp > 0.0 {
        w.player.take_damage(damage as f32);
        w.player.invincible_timer = INVINCIBLE_DURATION;
        w.frame_events.push(FrameEvent::PlayerDamaged {
            damage: damage as f32,
            direction: direction_bucket(dx, dz),
        });
    }

    // 周囲の敵も巻き込む（誘爆あり、得点なし）
    for ei in 0..w.enemies.len() {
        if ei == slot || !w.enemies.is_active(ei) {
            continue;
        }
        let ddx = w.enemies.positions_x[ei] - ex;
        let ddz = w.enemies.positions_z[ei] - ez;
        let d = (ddx * ddx + ddz * ddz).sqrt();
        let splash = explosion_damage(EXPLODER_DAMAGE, d, EXPLODER_RADIUS);
        if splash > 0 && w.enemies.take_damage(ei, splash as f32) {
            w.register_kill(ei, false);
        }
    }

    // 本体は自壊（得点なし）
    w.enemies.die(slot);
    w.register_kill(slot, false);
}
