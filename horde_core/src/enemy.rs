//! Path: horde_core/src/enemy.rs
//! Summary: 敵種類・HP・速度・スポーン選択ロジックの共通定義

use crate::constants::BOSS_WAVE_INTERVAL;

/// 敵の種類
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum EnemyKind {
    #[default]
    Basic     = 0,
    Fast      = 1,
    /// 接近すると起爆シーケンスに入る自爆型
    Exploding = 2,
    /// ウェーブ 5 の倍数の先頭にのみ出現
    Boss      = 3,
}

impl EnemyKind {
    /// スポーンデータからの復元用。未知の ID は None。
    pub fn from_u8(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Basic),
            1 => Some(Self::Fast),
            2 => Some(Self::Exploding),
            3 => Some(Self::Boss),
            _ => None,
        }
    }

    pub fn max_hp(&self) -> f32 {
        match self {
            Self::Basic => 100.0,
            Self::Fast => 60.0,
            Self::Exploding => 40.0,
            Self::Boss => 500.0,
        }
    }

    /// 接触ダメージ（Exploding は接触では削らない）
    pub fn contact_damage(&self) -> f32 {
        match self {
            Self::Basic => 10.0,
            Self::Fast => 3.0,
            Self::Exploding => 0.0,
            Self::Boss => 25.0,
        }
    }

    pub fn speed(&self) -> f32 {
        match self {
            Self::Basic => 2.0,
            Self::Fast => 3.0,
            Self::Exploding => 2.0,
            Self::Boss => 1.5,
        }
    }

    pub fn score_value(&self) -> u32 {
        match self {
            Self::Basic => 100,
            Self::Fast => 150,
            Self::Exploding => 200,
            Self::Boss => 1000,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "zombie",
            Self::Fast => "runner",
            Self::Exploding => "boomer",
            Self::Boss => "brute",
        }
    }

    /// レンダラーに渡す kind 値（0=player, 1..=敵）
    pub fn render_kind(&self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Fast => 2,
            Self::Exploding => 3,
            Self::Boss => 4,
        }
    }

    /// ウェーブ番号とロール値に応じた敵タイプ選択。
    ///
    /// ロールは 1 回のみ行い、ネストした閾値と比較する:
    /// ウェーブ 3 以降は roll < 0.10 で Exploding、
    /// ウェーブ 2 以降は roll < 0.30 で Fast（実効 20%）、残りは Basic。
    /// ウェーブが 5 の倍数なら先頭スポーンは必ず Boss。
    pub fn for_spawn(wave: u32, first_of_wave: bool, roll: f32) -> Self {
        if wave % BOSS_WAVE_INTERVAL == 0 && first_of_wave {
            Self::Boss
        } else if wave >= 3 && roll < 0.10 {
            Self::Exploding
        } else if wave >= 2 && roll < 0.30 {
            Self::Fast
        } else {
            Self::Basic
        }
    }
}
