//! Path: horde_sim/src/game_logic/frame_step.rs
//! Summary: フレームステップ本体（順序固定のオーケストレータ）

use super::systems::combat::{detonate_exploder, resolve_player_contacts};
use super::systems::enemies::update_enemies;
use super::systems::projectiles::update_projectiles;
use super::systems::spawn::update_wave_spawning;
use super::systems::waves::check_wave_completion;
use super::systems::weapons::fire_current_weapon;
use crate::world::{FrameEvent, GameWorldInner, ScheduledEffect};
use horde_core::constants::{ARENA_BOUND, FRAME_BUDGET_MS, MAX_DELTA_SECS, PLAYER_SPEED};

/// ゲームを 1 フレーム進める。
///
/// フレーム内の順序は固定: タイマー効果 → プレイヤー移動/発射 →
/// スポーン → 敵移動（死亡掃除込み） → 弾丸と衝突 → 敵 vs プレイヤー →
/// ウェーブ完了チェック。この順序により、このフレームで死んだ敵が
/// ウェーブ完了を塞ぐことはない。
pub fn frame_step(w: &mut GameWorldInner, delta_ms: f64) {
    // trace にしておき、RUST_LOG=trace のときだけ毎フレーム出力
    log::trace!("frame_step: delta={}ms frame_id={}", delta_ms, w.frame_id);
    if w.game_over {
        return;
    }
    let t_start = std::time::Instant::now();

    w.frame_id += 1;
    // ストール後の大ジャンプを防ぐため delta をキャップする
    let dt = ((delta_ms / 1000.0) as f32).clamp(0.0, MAX_DELTA_SECS);
    w.clock_ms += dt as f64 * 1000.0;

    // 無敵タイマーを更新
    if w.player.invincible_timer > 0.0 {
        w.player.invincible_timer = (w.player.invincible_timer - dt).max(0.0);
    }

    // 保留中のタイマー効果（リロード完了・起爆・ボス衝撃波）
    apply_due_timers(w);

    // プレイヤー移動（斜め移動を正規化して速度を一定に保つ）
    let dx = w.player.input_dx;
    let dz = w.player.input_dz;
    let len = (dx * dx + dz * dz).sqrt();
    if len > 0.001 {
        w.player.x += (dx / len) * PLAYER_SPEED * dt;
        w.player.z += (dz / len) * PLAYER_SPEED * dt;
        // アリーナ境界内に制限
        let r = (w.player.x * w.player.x + w.player.z * w.player.z).sqrt();
        if r > ARENA_BOUND {
            let factor = ARENA_BOUND / r;
            w.player.x *= factor;
            w.player.z *= factor;
        }
    }

    // トリガー保持中なら発射を試みる（レート制限は武器側が判断）
    if w.player.firing {
        fire_current_weapon(w);
    }

    update_wave_spawning(w, dt);
    update_enemies(w, dt);

    // 衝突判定は移動後の位置で行う
    w.rebuild_collision();

    update_projectiles(w, dt);
    resolve_player_contacts(w, dt);

    check_wave_completion(w);

    if w.player.hp <= 0.0 {
        w.game_over = true;
        w.frame_events.push(FrameEvent::GameOver {
            score: w.score,
            wave: w.wave.current_wave,
        });
    }

    let elapsed_ms = t_start.elapsed().as_secs_f64() * 1000.0;
    w.last_frame_time_ms = elapsed_ms;
    if elapsed_ms > FRAME_BUDGET_MS {
        log::warn!(
            "frame budget exceeded: {:.2}ms (enemies: {}, bullets: {})",
            elapsed_ms,
            w.enemies.count,
            w.bullets.count
        );
    }
}

/// 発火時刻に達したタイマー効果を適用する。エンティティ宛ての効果は
/// レジストリで生存確認し、破棄済みなら silent no-op。
fn apply_due_timers(w: &mut GameWorldInner) {
    let due = w.timers.drain_due(w.clock_ms);
    for ev in due {
        match ev.effect {
            ScheduledEffect::ReloadComplete { weapon } => {
                if w.weapons[weapon].reloading {
                    w.weapons[weapon].finish_reload();
                    let kind = w.weapons[weapon].kind;
                    w.frame_events.push(FrameEvent::ReloadFinished { weapon: kind });
                }
            }
            ScheduledEffect::ExplosionFuse { enemy_id } => {
                if let Some(slot) = w.enemy_slot(enemy_id) {
                    if w.enemies.is_active(slot) && w.enemies.exploding[slot] {
                        detonate_exploder(w, slot);
                    }
                }
            }
            ScheduledEffect::BossShockwave { enemy_id } => {
                // 衝撃波はビジュアルのみのフックポイント
                if w.enemy_slot(enemy_id).is_some() {
                    w.frame_events.push(FrameEvent::BossShockwave { id: enemy_id });
                }
            }
        }
    }
}
