/// Headless demo binary.
/// Runs the full combat loop in pure Rust without a renderer: an aim-bot
/// player stands in the arena center and shoots the nearest zombie until
/// the run ends. Used for soak-testing the simulation and log inspection.
use horde_core::constants::{DEFAULT_RNG_SEED, ENEMY_CENTER_HEIGHT, PLAYER_EYE_HEIGHT};
use horde_sim::{frame_step, start_wave, FrameEvent, GameWorldInner};

const FRAME_MS: f64 = 1000.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 60 * 10; // 10 分で打ち切り

fn main() {
    let _ = env_logger::Builder::from_default_env().try_init();

    let mut w = GameWorldInner::new(DEFAULT_RNG_SEED);
    start_wave(&mut w, 1);
    w.player.firing = true;

    let mut frames = 0u32;
    while !w.game_over && frames < MAX_FRAMES {
        aim_at_nearest_enemy(&mut w);
        frame_step(&mut w, FRAME_MS);

        for ev in w.drain_frame_events() {
            match ev {
                FrameEvent::WaveStarted { wave } => log::info!("wave {} started", wave),
                FrameEvent::WaveCompleted { wave } => log::info!("wave {} cleared", wave),
                FrameEvent::WeaponUnlocked { weapon } => {
                    log::info!("weapon unlocked: {}", weapon.name())
                }
                FrameEvent::GameOver { score, wave } => {
                    log::info!("game over at wave {} with score {}", wave, score)
                }
                _ => {}
            }
        }
        frames += 1;
    }

    println!(
        "run finished: score={} wave={} kills={} frames={}",
        w.score, w.wave.current_wave, w.kill_count, frames
    );
}

/// 最寄りの敵へ照準を合わせる簡易ボット
fn aim_at_nearest_enemy(w: &mut GameWorldInner) {
    let px = w.player.x;
    let pz = w.player.z;
    let mut nearest: Option<(f32, usize)> = None;
    for i in 0..w.enemies.len() {
        if !w.enemies.is_active(i) {
            continue;
        }
        let dx = w.enemies.positions_x[i] - px;
        let dz = w.enemies.positions_z[i] - pz;
        let dist_sq = dx * dx + dz * dz;
        if nearest.map_or(true, |(best, _)| dist_sq < best) {
            nearest = Some((dist_sq, i));
        }
    }
    if let Some((_, i)) = nearest {
        w.player.set_aim(
            w.enemies.positions_x[i] - px,
            ENEMY_CENTER_HEIGHT - PLAYER_EYE_HEIGHT,
            w.enemies.positions_z[i] - pz,
        );
    }
}
