//! Path: horde_sim/src/world/wave.rs
//! Summary: ウェーブ進行状態（スポーン数・間隔・完了判定）

use horde_core::util::{enemies_for_wave, spawn_interval_ms};

/// ウェーブスケジューラの状態。
///
/// 1 ウェーブで正確に `5 + 3 * (n - 1)` 体をスポーンし、全滅かつスポーン
/// 完了でウェーブクリアになる。
pub struct WaveState {
    /// 現在のウェーブ番号（0 = 未開始）
    pub current_wave:      u32,
    pub total_to_spawn:    u32,
    pub spawned:           u32,
    pub spawn_interval_ms: f64,
    /// スポーン間隔の累積タイマー（ミリ秒）
    pub spawn_timer_ms:    f64,
    pub spawning:          bool,
}

impl WaveState {
    pub fn new() -> Self {
        Self {
            current_wave:      0,
            total_to_spawn:    0,
            spawned:           0,
            spawn_interval_ms: 0.0,
            spawn_timer_ms:    0.0,
            spawning:          false,
        }
    }

    pub fn start(&mut self, wave: u32) {
        self.current_wave = wave;
        self.total_to_spawn = enemies_for_wave(wave);
        self.spawned = 0;
        self.spawn_interval_ms = spawn_interval_ms(wave);
        self.spawn_timer_ms = 0.0;
        self.spawning = true;
    }

    /// ウェーブ完了: スポーンが終わり、生存敵がいない
    pub fn is_complete(&self, live_enemies: usize) -> bool {
        !self.spawning && live_enemies == 0
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
