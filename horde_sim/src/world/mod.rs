//! Path: horde_sim/src/world/mod.rs
//! Summary: ワールド型（PlayerState, EnemyWorld, BulletWorld, WeaponState, WaveState, GameWorld）

mod bullet;
mod enemy;
mod frame_event;
mod game_world;
mod player;
mod schedule;
mod wave;
mod weapon;

pub use bullet::BulletWorld;
pub use enemy::EnemyWorld;
pub use frame_event::FrameEvent;
pub use game_world::{GameWorld, GameWorldInner};
pub use player::PlayerState;
pub use schedule::{ScheduledEffect, ScheduledEvent, TimerQueue};
pub use wave::WaveState;
pub use weapon::{FireOutcome, WeaponState};
