//! Path: horde_core/src/constants.rs
//! Summary: アリーナ・衝突半径・ウェーブ・タイマーなどの定数定義

// Arena spawn ring (enemies enter from a circle around the perimeter)
pub const SPAWN_RING_RADIUS: f32 = 40.0;
pub const SPAWN_POINT_COUNT: usize = 16;

// Player
pub const PLAYER_MAX_HP: f32 = 100.0;
pub const PLAYER_EYE_HEIGHT: f32 = 1.8;
pub const PLAYER_SPEED: f32 = 5.0;
pub const INVINCIBLE_DURATION: f32 = 0.5;
// プレイヤーが移動できる半径（スポーンリングの少し内側ではなく外周まで）
pub const ARENA_BOUND: f32 = 45.0;

// Frame stepping
// delta-time はこの値でキャップする（ストール後の大ジャンプ防止）
pub const MAX_DELTA_SECS: f32 = 0.1;
pub const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

// Collision radii
// 弾丸は見た目より大きい半径で判定する（当てやすさ優先）
pub const BULLET_HIT_RADIUS: f32 = 1.0;
pub const ENEMY_CONTACT_RADIUS: f32 = 1.5;
pub const ENEMY_CENTER_HEIGHT: f32 = 0.9;

// Enemy separation: 敵同士が重ならないための押し出し半径・強さ
pub const ENEMY_SEPARATION_RADIUS: f32 = 1.2;
pub const ENEMY_SEPARATION_FORCE: f32 = 3.0;

// Arena grid cell size (world units; the arena is ~80 across)
pub const CELL_SIZE: f32 = 8.0;

// Hitscan tracer / rocket projectile
pub const TRACER_SPEED: f32 = 50.0;
pub const TRACER_LIFETIME: f32 = 1.0;
pub const ROCKET_SPEED: f32 = 20.0;
pub const ROCKET_LIFETIME: f32 = 3.0;
pub const ROCKET_EXPLOSION_RADIUS: f32 = 8.0;

// Shotgun spread pellets (in addition to the primary ray)
pub const SHOTGUN_EXTRA_PELLETS: usize = 5;
pub const SHOTGUN_SPREAD: f32 = 0.1;

// Weapon timing
pub const AUTOMATIC_FIRE_RATE: f32 = 8.0;
// 空撃ちクリック音のクールダウン（連打でスパムしない）
pub const EMPTY_CUE_COOLDOWN_MS: f64 = 500.0;

// Wave schedule: enemies = BASE + PER_WAVE * (wave - 1),
// interval = max(MIN, BASE - STEP * (wave - 1))
pub const WAVE_BASE_ENEMIES: u32 = 5;
pub const WAVE_ENEMIES_PER_WAVE: u32 = 3;
pub const BASE_SPAWN_DELAY_MS: f64 = 2000.0;
pub const MIN_SPAWN_DELAY_MS: f64 = 500.0;
pub const SPAWN_DELAY_STEP_MS: f64 = 200.0;
pub const BOSS_WAVE_INTERVAL: u32 = 5;

// Fast zombie lunge: 1% / frame, short burst of extra speed
pub const LUNGE_CHANCE: f32 = 0.01;
pub const LUNGE_SPEED_FACTOR: f32 = 3.0;

// Exploding zombie
pub const EXPLODER_TRIGGER_RANGE: f32 = 3.0;
pub const EXPLODER_FUSE_MS: f64 = 2000.0;
pub const EXPLODER_RADIUS: f32 = 5.0;
pub const EXPLODER_DAMAGE: i32 = 30;
// isExploding 中、半径内のプレイヤーへ毎フレームこの割合の継続ダメージ
pub const EXPLODER_TICK_FRACTION: f32 = 0.05;

// Boss special attack
pub const BOSS_ATTACK_INTERVAL: f32 = 3.0;
pub const BOSS_ATTACK_RANGE: f32 = 15.0;
pub const BOSS_WARNING_MS: f64 = 1000.0;

/// ワールド RNG シード（デモバイナリ / ベンチ共通のデフォルト）
pub const DEFAULT_RNG_SEED: u64 = 12345;
