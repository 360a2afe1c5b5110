//! Path: horde_sim/src/game_logic/mod.rs
//! Summary: フレームステップと外部から呼べる操作の公開面

mod frame_step;
mod systems;

pub use frame_step::frame_step;
pub use systems::waves::start_wave;
pub use systems::weapons::{
    cycle_weapon, fire_current_weapon, reload_current_weapon, switch_weapon,
};
