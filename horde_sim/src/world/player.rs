//! Path: horde_sim/src/world/player.rs
//! Summary: プレイヤー状態（座標・照準・HP・無敵タイマー・武器スロット選択）

use horde_core::constants::PLAYER_MAX_HP;
use horde_core::weapon::WEAPON_SLOT_COUNT;

/// プレイヤー状態。
///
/// コアから見たプレイヤーは capability surface であり、移動入力・照準・
/// 発射意図を受け取り、位置と HP と武器選択を公開する。
pub struct PlayerState {
    pub x:                f32,
    pub z:                f32,
    pub input_dx:         f32,
    pub input_dz:         f32,
    /// 視線方向（単位ベクトル）。ヒットスキャンのレイ方向になる。
    pub aim_x:            f32,
    pub aim_y:            f32,
    pub aim_z:            f32,
    /// トリガー保持フラグ（毎フレーム発射を試みる）
    pub firing:           bool,
    pub hp:               f32,
    pub max_hp:           f32,
    pub invincible_timer: f32,
    pub current_weapon:   usize,
    /// スロットごとの解放状態。初期状態はピストルのみ。
    pub unlocked:         [bool; WEAPON_SLOT_COUNT],
}

impl PlayerState {
    pub fn new() -> Self {
        let mut unlocked = [false; WEAPON_SLOT_COUNT];
        unlocked[0] = true;
        Self {
            x:                0.0,
            z:                0.0,
            input_dx:         0.0,
            input_dz:         0.0,
            aim_x:            0.0,
            aim_y:            0.0,
            aim_z:            -1.0,
            firing:           false,
            hp:               PLAYER_MAX_HP,
            max_hp:           PLAYER_MAX_HP,
            invincible_timer: 0.0,
            current_weapon:   0,
            unlocked,
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invincible_timer > 0.0
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.hp = (self.hp - amount).max(0.0);
    }

    pub fn heal(&mut self, amount: f32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// 照準を設定する。零ベクトルは無視、その他は正規化して保持する。
    pub fn set_aim(&mut self, dx: f32, dy: f32, dz: f32) {
        let len = (dx * dx + dy * dy + dz * dz).sqrt();
        if len > 0.001 {
            self.aim_x = dx / len;
            self.aim_y = dy / len;
            self.aim_z = dz / len;
        }
    }

    pub fn unlock_weapon(&mut self, index: usize) -> bool {
        match self.unlocked.get_mut(index) {
            Some(slot) => {
                *slot = true;
                true
            }
            None => false,
        }
    }

    pub fn is_weapon_unlocked(&self, index: usize) -> bool {
        self.unlocked.get(index).copied().unwrap_or(false)
    }

    /// 解放済み武器への切り替え。ロック中・範囲外は no-op で false。
    pub fn switch_weapon(&mut self, index: usize) -> bool {
        if self.is_weapon_unlocked(index) {
            self.current_weapon = index;
            true
        } else {
            false
        }
    }

    /// 次（dir=+1）/ 前（dir=-1）の解放済み武器へ巡回切り替え。
    /// 解放済みが現在の武器だけなら何もしない。
    pub fn cycle_weapon(&mut self, dir: i32) -> bool {
        let count = WEAPON_SLOT_COUNT as i32;
        let mut index = self.current_weapon as i32;
        for _ in 0..WEAPON_SLOT_COUNT {
            index = (index + dir).rem_euclid(count);
            if index as usize == self.current_weapon {
                break;
            }
            if self.unlocked[index as usize] {
                self.current_weapon = index as usize;
                return true;
            }
        }
        false
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
