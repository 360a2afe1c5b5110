//! Path: horde_sim/src/game_logic/systems/waves.rs
//! Summary: ウェーブ開始・完了判定・武器アンロック進行

use crate::world::{FrameEvent, GameWorldInner};
use horde_core::weapon::WeaponKind;

/// ウェーブを開始する（ラン開始時はウェーブ 1）
pub fn start_wave(w: &mut GameWorldInner, wave: u32) {
    w.wave.start(wave);
    w.frame_events.push(FrameEvent::WaveStarted { wave });
}

/// ウェーブ完了チェック: スポーン完了かつ敵全滅なら次ウェーブへ進め、
/// アンロックテーブルに該当があれば解放して自動装備する。
pub(crate) fn check_wave_completion(w: &mut GameWorldInner) {
    if w.wave.current_wave == 0 {
        return;
    }
    if !w.wave.is_complete(w.enemies.count) {
        return;
    }

    let finished = w.wave.current_wave;
    w.frame_events.push(FrameEvent::WaveCompleted { wave: finished });

    let next = finished + 1;
    if let Some(kind) = WeaponKind::unlocked_by_wave(next) {
        let index = kind as usize;
        w.player.unlock_weapon(index);
        // 解放時はマガジンを満タンにしておく
        w.weapons[index].reset();
        w.frame_events.push(FrameEvent::WeaponUnlocked { weapon: kind });
        if w.player.switch_weapon(index) {
            w.frame_events.push(FrameEvent::WeaponSwitched { weapon: kind });
        }
    }

    start_wave(w, next);
}
