//! Path: horde_sim/src/world/bullet.rs
//! Summary: 弾丸 SoA（BulletWorld）

/// 弾丸 SoA（Structure of Arrays）
///
/// ヒットスキャンのトレーサーもロケットも同じプールに入る。違いは
/// `explosive` フラグと速度・寿命のみ。
pub struct BulletWorld {
    pub positions_x: Vec<f32>,
    pub positions_y: Vec<f32>,
    pub positions_z: Vec<f32>,
    /// 進行方向（単位ベクトル）
    pub dirs_x:      Vec<f32>,
    pub dirs_y:      Vec<f32>,
    pub dirs_z:      Vec<f32>,
    pub speeds:      Vec<f32>,
    pub damage:      Vec<i32>,
    /// 残り寿命（秒）。0 以下で expire。
    pub lifetime:    Vec<f32>,
    /// true ならロケット弾: 着弾時に範囲ダメージ
    pub explosive:   Vec<bool>,
    pub alive:       Vec<bool>,
    pub count:       usize,
    /// 空きスロットのインデックススタック — O(1) でスロットを取得・返却
    free_list:       Vec<usize>,
}

impl BulletWorld {
    pub fn new() -> Self {
        Self {
            positions_x: Vec::new(),
            positions_y: Vec::new(),
            positions_z: Vec::new(),
            dirs_x:      Vec::new(),
            dirs_y:      Vec::new(),
            dirs_z:      Vec::new(),
            speeds:      Vec::new(),
            damage:      Vec::new(),
            lifetime:    Vec::new(),
            explosive:   Vec::new(),
            alive:       Vec::new(),
            count:       0,
            free_list:   Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        &mut self,
        x: f32, y: f32, z: f32,
        dx: f32, dy: f32, dz: f32,
        speed: f32,
        lifetime: f32,
        damage: i32,
        explosive: bool,
    ) {
        // 方向は正規化して保持する
        let len = (dx * dx + dy * dy + dz * dz).sqrt().max(0.001);
        let (dx, dy, dz) = (dx / len, dy / len, dz / len);

        if let Some(i) = self.free_list.pop() {
            self.positions_x[i] = x;
            self.positions_y[i] = y;
            self.positions_z[i] = z;
            self.dirs_x[i]      = dx;
            self.dirs_y[i]      = dy;
            self.dirs_z[i]      = dz;
            self.speeds[i]      = speed;
            self.damage[i]      = damage;
            self.lifetime[i]    = lifetime;
            self.explosive[i]   = explosive;
            self.alive[i]       = true;
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.positions_z.push(z);
            self.dirs_x.push(dx);
            self.dirs_y.push(dy);
            self.dirs_z.push(dz);
            self.speeds.push(speed);
            self.damage.push(damage);
            self.lifetime.push(lifetime);
            self.explosive.push(explosive);
            self.alive.push(true);
        }
        self.count += 1;
    }

    /// 弾丸を破棄してスロットを返却する。冪等。
    pub fn kill(&mut self, i: usize) {
        if self.alive[i] {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_normalizes_direction() {
        let mut bullets = BulletWorld::new();
        bullets.spawn(0.0, 1.8, 0.0, 0.0, 0.0, -3.0, 50.0, 1.0, 20, false);
        assert!((bullets.dirs_z[0] + 1.0).abs() < 1e-6);
        assert_eq!(bullets.dirs_x[0], 0.0);
    }

    #[test]
    fn kill_is_idempotent_and_reuses_slot() {
        let mut bullets = BulletWorld::new();
        bullets.spawn(0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 50.0, 1.0, 20, false);
        bullets.kill(0);
        bullets.kill(0);
        assert_eq!(bullets.count, 0);

        bullets.spawn(5.0, 0.0, 0.0, 1.0, 0.0, 0.0, 20.0, 3.0, 150, true);
        assert_eq!(bullets.len(), 1);
        assert!(bullets.explosive[0]);
        assert_eq!(bullets.positions_x[0], 5.0);
    }
}
