//! Path: horde_sim/src/lib.rs
//! Summary: モジュール宣言と公開面（ウェーブサバイバルFPSのシミュレーションコア）

pub mod audio;
pub mod game_logic;
pub mod render_snapshot;
pub mod world;

pub use game_logic::{
    cycle_weapon, fire_current_weapon, frame_step, reload_current_weapon, start_wave,
    switch_weapon,
};
pub use render_snapshot::{build_render_frame, HudData, RenderFrame, SpriteData};
pub use world::{
    BulletWorld, EnemyWorld, FireOutcome, FrameEvent, GameWorld, GameWorldInner, PlayerState,
    ScheduledEffect, ScheduledEvent, TimerQueue, WaveState, WeaponState,
};
