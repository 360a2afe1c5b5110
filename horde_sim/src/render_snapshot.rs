//! Path: horde_sim/src/render_snapshot.rs
//! Summary: GameWorld から描画・HUD 用スナップショットを構築
//!
//! 描画スレッド内で world.read() を保持する時間を最小化するため、
//! 必要なデータを RenderFrame にコピーしてからロックを解放する。
//! コアが描画側に公開するのはこの面だけで、メッシュ等は一切持たない。

use crate::world::GameWorldInner;

/// 描画スプライトの kind 値
pub const RENDER_KIND_PLAYER: u8 = 0;
pub const RENDER_KIND_BULLET: u8 = 8;
pub const RENDER_KIND_ROCKET: u8 = 9;

#[derive(Clone, Copy, Debug)]
pub struct SpriteData {
    pub x:    f32,
    pub z:    f32,
    pub kind: u8,
    /// 起爆中の自爆ゾンビなど、点滅表示すべきか
    pub flashing: bool,
}

#[derive(Clone, Debug)]
pub struct HudData {
    pub score:           u32,
    pub wave:            u32,
    pub kill_count:      u32,
    pub hp:              f32,
    pub max_hp:          f32,
    pub ammo:            u32,
    pub reserve:         u32,
    pub weapon_name:     &'static str,
    pub reloading:       bool,
    pub reload_progress: f32,
    pub game_over:       bool,
}

#[derive(Clone, Debug)]
pub struct RenderFrame {
    pub sprites: Vec<SpriteData>,
    pub hud:     HudData,
}

/// GameWorldInner から描画スナップショットを構築する
pub fn build_render_frame(w: &GameWorldInner) -> RenderFrame {
    let mut sprites = Vec::with_capacity(1 + w.enemies.count + w.bullets.count);

    sprites.push(SpriteData {
        x: w.player.x,
        z: w.player.z,
        kind: RENDER_KIND_PLAYER,
        flashing: w.player.is_invulnerable(),
    });

    for i in 0..w.enemies.len() {
        if w.enemies.alive[i] {
            sprites.push(SpriteData {
                x: w.enemies.positions_x[i],
                z: w.enemies.positions_z[i],
                kind: w.enemies.kinds[i].render_kind(),
                flashing: w.enemies.exploding[i],
            });
        }
    }

    for i in 0..w.bullets.len() {
        if w.bullets.alive[i] {
            sprites.push(SpriteData {
                x: w.bullets.positions_x[i],
                z: w.bullets.positions_z[i],
                kind: if w.bullets.explosive[i] {
                    RENDER_KIND_ROCKET
                } else {
                    RENDER_KIND_BULLET
                },
                flashing: false,
            });
        }
    }

    let weapon = w.current_weapon();
    RenderFrame {
        sprites,
        hud: HudData {
            score:           w.score,
            wave:            w.wave.current_wave,
            kill_count:      w.kill_count,
            hp:              w.player.hp,
            max_hp:          w.player.max_hp,
            ammo:            weapon.current_ammo,
            reserve:         weapon.reserve_ammo,
            weapon_name:     weapon.kind.name(),
            reloading:       weapon.reloading,
            reload_progress: weapon.reload_progress(w.clock_ms),
            game_over:       w.game_over,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::enemy::EnemyKind;

    #[test]
    fn snapshot_contains_player_enemies_and_hud() {
        let mut w = GameWorldInner::new(1);
        w.spawn_enemy(EnemyKind::Basic, 10.0, 0.0);
        w.spawn_enemy(EnemyKind::Boss, -10.0, 0.0);
        w.score = 300;

        let frame = build_render_frame(&w);
        assert_eq!(frame.sprites.len(), 3);
        assert_eq!(frame.sprites[0].kind, RENDER_KIND_PLAYER);
        assert_eq!(frame.hud.score, 300);
        assert_eq!(frame.hud.weapon_name, "Pistol");
        assert_eq!(frame.hud.ammo, 12);
    }
}
