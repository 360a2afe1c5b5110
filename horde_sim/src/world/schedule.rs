//! Path: horde_sim/src/world/schedule.rs
//! Summary: 遅延効果のタイマーキュー（毎 tick ポーリング・キャンセル可能）

/// 遅延実行される効果。エンティティを参照するものは ID で持ち、発火側が
/// 適用前に生存確認する（破棄済みエンティティへの stale タイマーは no-op）。
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ScheduledEffect {
    /// リロード完了（武器スロット添字）
    ReloadComplete { weapon: usize },
    /// 自爆ゾンビの起爆
    ExplosionFuse { enemy_id: u32 },
    /// ボスの予兆後の衝撃波
    BossShockwave { enemy_id: u32 },
}

#[derive(Clone, Copy, Debug)]
pub struct ScheduledEvent {
    pub fire_at_ms: f64,
    pub effect:     ScheduledEffect,
}

/// シミュレーション時計に対する遅延効果キュー。
///
/// setTimeout 的なコールバックの代わりに、フレームループが毎 tick
/// `drain_due` をポーリングする。フレームを止めない（non-blocking）。
#[derive(Default)]
pub struct TimerQueue {
    pending: Vec<ScheduledEvent>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    pub fn schedule(&mut self, fire_at_ms: f64, effect: ScheduledEffect) {
        self.pending.push(ScheduledEvent { fire_at_ms, effect });
    }

    /// `now_ms` までに発火すべき効果を発火時刻順に取り出す
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<ScheduledEvent> {
        let mut due = Vec::new();
        self.pending.retain(|ev| {
            if ev.fire_at_ms <= now_ms {
                due.push(*ev);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| {
            a.fire_at_ms
                .partial_cmp(&b.fire_at_ms)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        due
    }

    /// 指定エンティティ宛ての保留効果をすべて取り消す
    /// （起爆カウントダウン中に倒された自爆ゾンビ等）
    pub fn cancel_enemy(&mut self, enemy_id: u32) {
        self.pending.retain(|ev| match ev.effect {
            ScheduledEffect::ExplosionFuse { enemy_id: id }
            | ScheduledEffect::BossShockwave { enemy_id: id } => id != enemy_id,
            ScheduledEffect::ReloadComplete { .. } => true,
        });
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
