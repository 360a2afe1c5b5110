//! Path: horde_sim/src/world/frame_event.rs
//! Summary: フレーム内で発生したゲームイベント（UI / オーディオへの出力面）

use horde_core::enemy::EnemyKind;
use horde_core::weapon::WeaponKind;

/// フレーム内で発生したゲームイベント。
///
/// UI とオーディオはこれを drain するだけの pure sink で、コア状態への
/// フィードバックは持たない。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameEvent {
    WaveStarted       { wave: u32 },
    WaveCompleted     { wave: u32 },
    EnemySpawned      { id: u32, kind: EnemyKind },
    /// 弾丸ヒット（非致死）
    EnemyHit          { kind: EnemyKind },
    /// `score` は加算された得点。自爆・誘爆による死亡は 0。
    EnemyKilled       { kind: EnemyKind, score: u32 },
    /// `direction` は敵→プレイヤーベクトルの 8 方向バケット
    PlayerDamaged     { damage: f32, direction: u8 },
    ShotFired         { weapon: WeaponKind },
    MagazineEmpty     { weapon: WeaponKind },
    ReloadStarted     { weapon: WeaponKind },
    ReloadFinished    { weapon: WeaponKind },
    WeaponUnlocked    { weapon: WeaponKind },
    WeaponSwitched    { weapon: WeaponKind },
    RocketExploded    { x: f32, z: f32 },
    ZombieExploded    { x: f32, z: f32 },
    /// ボス特殊攻撃の予兆（1 秒後に衝撃波）
    BossAttackWarning { id: u32 },
    /// 衝撃波本体。ビジュアルのみのフックポイント。
    BossShockwave     { id: u32 },
    GameOver          { score: u32, wave: u32 },
}
