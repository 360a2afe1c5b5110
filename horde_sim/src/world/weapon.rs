//! Path: horde_sim/src/world/weapon.rs
//! Summary: 武器スロットの弾薬・発射レート・リロード状態機械

use horde_core::constants::EMPTY_CUE_COOLDOWN_MS;
use horde_core::weapon::WeaponKind;

/// try_fire の結果。例外は投げず、弾の出なかった理由を区別して返す。
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FireOutcome {
    /// 実際に 1 発発射された。`emptied` はこの射撃でマガジンが空になり、
    /// かつリザーブが残っている（自動リロードを開始すべき）ことを示す。
    Fired { emptied: bool },
    /// リロード中は発射できない
    Reloading,
    /// 発射レート制限内（弾薬は減らない）
    OnCooldown,
    /// マガジンが空。`cue` はクリック音を鳴らすべきか（500ms レート制限済み）、
    /// `reserve_left` はリザーブが残っているか。
    Empty { cue: bool, reserve_left: bool },
}

/// 武器スロットごとの状態。タイムスタンプはすべてシミュレーション時計
/// （ミリ秒）に対して比較する。
pub struct WeaponState {
    pub kind:          WeaponKind,
    pub current_ammo:  u32,
    pub reserve_ammo:  u32,
    pub reloading:     bool,
    reload_started_ms: f64,
    last_fire_ms:      f64,
    last_empty_cue_ms: f64,
}

impl WeaponState {
    pub fn new(kind: WeaponKind) -> Self {
        Self {
            kind,
            current_ammo:      kind.magazine_size(),
            reserve_ammo:      kind.initial_reserve(),
            reloading:         false,
            reload_started_ms: 0.0,
            last_fire_ms:      f64::NEG_INFINITY,
            last_empty_cue_ms: f64::NEG_INFINITY,
        }
    }

    /// 発射を試みる。状態変化は Fired のときの弾薬減とタイムスタンプ更新、
    /// および Empty クリック音のレート制限記録のみ。
    pub fn try_fire(&mut self, now_ms: f64) -> FireOutcome {
        if self.reloading {
            return FireOutcome::Reloading;
        }
        if self.current_ammo == 0 {
            let cue = now_ms - self.last_empty_cue_ms >= EMPTY_CUE_COOLDOWN_MS;
            if cue {
                self.last_empty_cue_ms = now_ms;
            }
            return FireOutcome::Empty {
                cue,
                reserve_left: self.reserve_ammo > 0,
            };
        }
        if now_ms - self.last_fire_ms < self.kind.cooldown_ms() {
            return FireOutcome::OnCooldown;
        }

        self.current_ammo -= 1;
        self.last_fire_ms = now_ms;
        FireOutcome::Fired {
            emptied: self.current_ammo == 0 && self.reserve_ammo > 0,
        }
    }

    /// リロード開始。既にリロード中・マガジン満タン・リザーブ 0 は no-op で
    /// false を返す。完了はタイマーキュー経由で finish_reload が呼ばれる。
    pub fn start_reload(&mut self, now_ms: f64) -> bool {
        if self.reloading
            || self.current_ammo == self.kind.magazine_size()
            || self.reserve_ammo == 0
        {
            return false;
        }
        self.reloading = true;
        self.reload_started_ms = now_ms;
        true
    }

    /// リロード完了: リザーブからマガジンへ弾薬を移す
    pub fn finish_reload(&mut self) {
        if !self.reloading {
            return;
        }
        let needed = self.kind.magazine_size() - self.current_ammo;
        let to_add = needed.min(self.reserve_ammo);
        self.current_ammo += to_add;
        self.reserve_ammo -= to_add;
        self.reloading = false;
    }

    /// リロードの進捗 [0, 1]。リロード中でなければ 0。
    pub fn reload_progress(&self, now_ms: f64) -> f32 {
        if !self.reloading {
            return 0.0;
        }
        let duration_ms = self.kind.reload_secs() as f64 * 1000.0;
        (((now_ms - self.reload_started_ms) / duration_ms) as f32).clamp(0.0, 1.0)
    }

    /// 弾薬拾得（リザーブへ加算）
    pub fn add_reserve(&mut self, amount: u32) {
        self.reserve_ammo += amount;
    }

    /// マガジンを満タンに戻し、リロード・発射レートのタイマーをクリアする。
    /// リザーブ弾数には触れない（完全リセットはワールド側のリスタートが
    /// スロットごと作り直す）。
    pub fn reset(&mut self) {
        self.current_ammo = self.kind.magazine_size();
        self.reloading = false;
        self.last_fire_ms = f64::NEG_INFINITY;
        self.last_empty_cue_ms = f64::NEG_INFINITY;
    }
}
