//! Path: horde_sim/src/world/game_world.rs
//! Summary: ゲームワールド（GameWorldInner, GameWorld）

use super::{BulletWorld, EnemyWorld, FrameEvent, PlayerState, TimerQueue, WaveState, WeaponState};
use horde_core::constants::{CELL_SIZE, SPAWN_POINT_COUNT, SPAWN_RING_RADIUS};
use horde_core::enemy::EnemyKind;
use horde_core::physics::grid::ArenaGrid;
use horde_core::physics::rng::GameRng;
use horde_core::util::spawn_ring;
use horde_core::weapon::ALL_WEAPONS;
use rustc_hash::FxHashMap;
use std::sync::RwLock;

/// ゲームワールド内部状態
pub struct GameWorldInner {
    pub frame_id:           u32,
    /// シミュレーション時計（ミリ秒）。キャップ済み delta の累積。
    /// 発射レート・リロード・起爆などのタイムスタンプ比較はすべてこれ。
    pub clock_ms:           f64,
    pub player:             PlayerState,
    pub enemies:            EnemyWorld,
    /// 敵 ID → スロット添字のレジストリ。タイマー効果の生存確認に使う。
    pub enemy_index:        FxHashMap<u32, usize>,
    next_enemy_id:          u32,
    pub bullets:            BulletWorld,
    /// 武器スロット（スロット添字 = WeaponKind の並び）
    pub weapons:            Vec<WeaponState>,
    pub wave:               WaveState,
    pub timers:             TimerQueue,
    pub collision:          ArenaGrid,
    /// アリーナ外周のスポーン地点リング
    pub spawn_points:       Vec<(f32, f32)>,
    pub rng:                GameRng,
    pub score:              u32,
    pub kill_count:         u32,
    pub game_over:          bool,
    /// このフレームで発生したイベント（ホストが毎フレーム drain する）
    pub frame_events:       Vec<FrameEvent>,
    /// 直近フレームのステップ処理時間（ミリ秒）
    pub last_frame_time_ms: f64,
}

impl GameWorldInner {
    pub fn new(seed: u64) -> Self {
        Self {
            frame_id:           0,
            clock_ms:           0.0,
            player:             PlayerState::new(),
            enemies:            EnemyWorld::new(),
            enemy_index:        FxHashMap::default(),
            next_enemy_id:      0,
            bullets:            BulletWorld::new(),
            weapons:            ALL_WEAPONS.iter().map(|&k| WeaponState::new(k)).collect(),
            wave:               WaveState::new(),
            timers:             TimerQueue::new(),
            collision:          ArenaGrid::new(CELL_SIZE),
            spawn_points:       spawn_ring(SPAWN_POINT_COUNT, SPAWN_RING_RADIUS),
            rng:                GameRng::new(seed),
            score:              0,
            kill_count:         0,
            game_over:          false,
            frame_events:       Vec::new(),
            last_frame_time_ms: 0.0,
        }
    }

    pub fn current_weapon(&self) -> &WeaponState {
        &self.weapons[self.player.current_weapon]
    }

    pub fn current_weapon_mut(&mut self) -> &mut WeaponState {
        &mut self.weapons[self.player.current_weapon]
    }

    /// 敵を生成してレジストリに登録し、新しい ID を返す
    pub fn spawn_enemy(&mut self, kind: EnemyKind, x: f32, z: f32) -> u32 {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        let slot = self.enemies.spawn(id, kind, x, z);
        self.enemy_index.insert(id, slot);
        self.frame_events.push(FrameEvent::EnemySpawned { id, kind });
        id
    }

    /// スロットの敵を破棄する: レジストリ解除・保留タイマー取り消し・
    /// スロット返却。
    pub fn destroy_enemy(&mut self, slot: usize) {
        if !self.enemies.alive[slot] {
            return;
        }
        let id = self.enemies.ids[slot];
        self.enemy_index.remove(&id);
        self.timers.cancel_enemy(id);
        self.enemies.destroy(slot);
    }

    /// ID から生存スロットを引く。破棄済みなら None（stale タイマー対策）。
    pub fn enemy_slot(&self, id: u32) -> Option<usize> {
        self.enemy_index
            .get(&id)
            .copied()
            .filter(|&slot| self.enemies.alive[slot])
    }

    /// 敵の死亡を確定させる: イベント発行・スコア加算・スロット破棄。
    /// `award_score` が false の死（自爆・誘爆）は得点 0 で記録される。
    pub(crate) fn register_kill(&mut self, slot: usize, award_score: bool) {
        let kind = self.enemies.kinds[slot];
        let score = if award_score { kind.score_value() } else { 0 };
        self.score += score;
        self.kill_count += 1;
        self.frame_events.push(FrameEvent::EnemyKilled { kind, score });
        self.destroy_enemy(slot);
    }

    /// 衝突判定用の Spatial Hash を再構築する（生存中の敵のみ）
    pub(crate) fn rebuild_collision(&mut self) {
        self.collision.clear();
        for i in 0..self.enemies.len() {
            if self.enemies.is_active(i) {
                self.collision
                    .insert(i, self.enemies.positions_x[i], self.enemies.positions_z[i]);
            }
        }
    }

    pub fn drain_frame_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.frame_events)
    }

    /// ランのリスタート。武器はスロットごと作り直す（リザーブ弾数も初期値に
    /// 戻る。これは武器単体の reset() とは意図的に非対称）。RNG は引き継ぐ。
    pub fn reset(&mut self) {
        self.frame_id = 0;
        self.clock_ms = 0.0;
        self.player.reset();
        self.enemies = EnemyWorld::new();
        self.enemy_index.clear();
        self.next_enemy_id = 0;
        self.bullets = BulletWorld::new();
        self.weapons = ALL_WEAPONS.iter().map(|&k| WeaponState::new(k)).collect();
        self.wave.reset();
        self.timers.clear();
        self.collision.clear();
        self.score = 0;
        self.kill_count = 0;
        self.game_over = false;
        self.frame_events.clear();
        self.last_frame_time_ms = 0.0;
    }
}

/// ゲームワールド（RwLock で保護された内部状態）。
/// 書き込みはゲームループのみ、描画スレッドは read でスナップショットを取る。
pub struct GameWorld(pub RwLock<GameWorldInner>);

impl GameWorld {
    pub fn new(seed: u64) -> Self {
        Self(RwLock::new(GameWorldInner::new(seed)))
    }
}
