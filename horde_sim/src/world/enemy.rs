//! Path: horde_sim/src/world/enemy.rs
//! Summary: 敵 SoA（EnemyWorld）と Alive→Dying→Destroyed 遷移

use horde_core::enemy::EnemyKind;

/// 敵 SoA（Structure of Arrays）
///
/// スロットはフリーリストで O(1) に再利用される。外部参照は添字ではなく
/// `ids` の世代なし ID（単調増加）で行い、ID→スロットの対応はワールド側の
/// レジストリが持つ。解放済みスロットに古いタイマーが届いても、レジストリに
/// ID が無いため silent no-op になる。
pub struct EnemyWorld {
    pub ids:             Vec<u32>,
    pub kinds:           Vec<EnemyKind>,
    pub positions_x:     Vec<f32>,
    pub positions_z:     Vec<f32>,
    pub velocities_x:    Vec<f32>,
    pub velocities_z:    Vec<f32>,
    pub hp:              Vec<f32>,
    pub alive:           Vec<bool>,
    /// die() 済みフラグ。ダメージ・移動・衝突から除外され、同一パス内で
    /// destroy される（at-most-once-death の再入ガード）。
    pub dying:           Vec<bool>,
    /// Exploding 変種: 起爆シーケンス中（移動凍結）
    pub exploding:       Vec<bool>,
    /// Boss 変種: 特殊攻撃の残りクールダウン（秒）
    pub attack_cooldown: Vec<f32>,
    /// 生存スロット数
    pub count:           usize,
    /// 分離パス用の作業バッファ（毎フレーム再利用してアロケーションを回避）
    pub sep_x:           Vec<f32>,
    pub sep_z:           Vec<f32>,
    pub active_mask:     Vec<bool>,
    /// このフレームで突進する Fast 個体（毎フレーム抽選し直す）
    pub lunge_mask:      Vec<bool>,
    /// 近隣クエリ結果の再利用バッファ
    pub query_buf:       Vec<usize>,
    free_list:           Vec<usize>,
}

impl EnemyWorld {
    pub fn new() -> Self {
        Self {
            ids:             Vec::new(),
            kinds:           Vec::new(),
            positions_x:     Vec::new(),
            positions_z:     Vec::new(),
            velocities_x:    Vec::new(),
            velocities_z:    Vec::new(),
            hp:              Vec::new(),
            alive:           Vec::new(),
            dying:           Vec::new(),
            exploding:       Vec::new(),
            attack_cooldown: Vec::new(),
            count:           0,
            sep_x:           Vec::new(),
            sep_z:           Vec::new(),
            active_mask:     Vec::new(),
            lunge_mask:      Vec::new(),
            query_buf:       Vec::new(),
            free_list:       Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// ID `id` の敵を (x, z) にスポーンしてスロット添字を返す
    pub fn spawn(&mut self, id: u32, kind: EnemyKind, x: f32, z: f32) -> usize {
        let hp = kind.max_hp();
        if let Some(i) = self.free_list.pop() {
            // O(1): フリーリストから再利用
            self.ids[i]             = id;
            self.kinds[i]           = kind;
            self.positions_x[i]     = x;
            self.positions_z[i]     = z;
            self.velocities_x[i]    = 0.0;
            self.velocities_z[i]    = 0.0;
            self.hp[i]              = hp;
            self.alive[i]           = true;
            self.dying[i]           = false;
            self.exploding[i]       = false;
            self.attack_cooldown[i] = 0.0;
            self.count += 1;
            i
        } else {
            self.ids.push(id);
            self.kinds.push(kind);
            self.positions_x.push(x);
            self.positions_z.push(z);
            self.velocities_x.push(0.0);
            self.velocities_z.push(0.0);
            self.hp.push(hp);
            self.alive.push(true);
            self.dying.push(false);
            self.exploding.push(false);
            self.attack_cooldown.push(0.0);
            self.sep_x.push(0.0);
            self.sep_z.push(0.0);
            self.active_mask.push(false);
            self.lunge_mask.push(false);
            self.count += 1;
            self.len() - 1
        }
    }

    /// HP が 0 に達したかどうか
    pub fn is_dead(&self, i: usize) -> bool {
        self.hp[i] <= 0.0
    }

    /// 移動・衝突・被ダメージの対象となるスロットか
    pub fn is_active(&self, i: usize) -> bool {
        self.alive[i] && !self.dying[i]
    }

    /// ダメージ適用。HP が 0 に達した呼び出しでのみ true を返し、die() を
    /// 一度だけ発火させる。Dying/解放済みスロットへの呼び出しは no-op。
    pub fn take_damage(&mut self, i: usize, amount: f32) -> bool {
        if !self.is_active(i) {
            return false;
        }
        self.hp[i] = (self.hp[i] - amount).max(0.0);
        if self.hp[i] <= 0.0 {
            self.die(i);
            return true;
        }
        false
    }

    /// Alive → Dying 遷移。再入は no-op。
    pub fn die(&mut self, i: usize) {
        if !self.alive[i] || self.dying[i] {
            return;
        }
        self.dying[i] = true;
        self.velocities_x[i] = 0.0;
        self.velocities_z[i] = 0.0;
    }

    /// Dying → Destroyed 遷移。スロットを解放する。冪等。
    pub fn destroy(&mut self, i: usize) {
        if self.alive[i] {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }
}
