//! Path: horde_core/src/util.rs
//! Summary: 範囲ダメージ減衰・スポーンリング・ウェーブ計算などの共通ユーティリティ

use crate::constants::{
    BASE_SPAWN_DELAY_MS, MIN_SPAWN_DELAY_MS, SPAWN_DELAY_STEP_MS, WAVE_BASE_ENEMIES,
    WAVE_ENEMIES_PER_WAVE,
};

/// 爆発中心から `distance` 離れた対象へのダメージ（線形減衰・切り捨て）。
/// 半径の外は 0。
pub fn explosion_damage(max_damage: i32, distance: f32, radius: f32) -> i32 {
    if distance > radius || radius <= 0.0 {
        return 0;
    }
    let falloff = 1.0 - distance / radius;
    (max_damage as f32 * falloff).floor() as i32
}

/// アリーナ外周の円周上に等間隔のスポーン地点を生成する (x, z)
pub fn spawn_ring(count: usize, radius: f32) -> Vec<(f32, f32)> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * std::f32::consts::TAU;
            (angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

/// 被弾方向インジケータ用の 8 方向バケット（0 = +x、反時計回り）
pub fn direction_bucket(dx: f32, dz: f32) -> u8 {
    let angle = dz.atan2(dx);
    let tau = std::f32::consts::TAU;
    let normalized = (angle + tau) % tau;
    // 各バケット中心に ±22.5 度を割り当てるため半バケットずらして丸める
    (((normalized + tau / 16.0) / (tau / 8.0)).floor() as u8) % 8
}

/// ウェーブ n の総スポーン数: 5 + 3 * (n - 1)
pub fn enemies_for_wave(wave: u32) -> u32 {
    WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_WAVE * wave.saturating_sub(1)
}

/// ウェーブ n のスポーン間隔（ミリ秒）: max(500, 2000 - 200 * (n - 1))
pub fn spawn_interval_ms(wave: u32) -> f64 {
    let stepped = BASE_SPAWN_DELAY_MS - SPAWN_DELAY_STEP_MS * wave.saturating_sub(1) as f64;
    stepped.max(MIN_SPAWN_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explosion_damage_linear_falloff() {
        // 中心で最大、半径ちょうどで 0、外側も 0
        assert_eq!(explosion_damage(150, 0.0, 8.0), 150);
        assert_eq!(explosion_damage(150, 4.0, 8.0), 75);
        assert_eq!(explosion_damage(150, 8.0, 8.0), 0);
        assert_eq!(explosion_damage(150, 9.0, 8.0), 0);
    }

    #[test]
    fn explosion_damage_floors() {
        // 30 * (1 - 1/5) = 24, 30 * (1 - 2/3...) は切り捨て
        assert_eq!(explosion_damage(30, 1.0, 5.0), 24);
        assert_eq!(explosion_damage(100, 2.5, 8.0), 68); // 100 * 0.6875
    }

    #[test]
    fn spawn_ring_layout() {
        let points = spawn_ring(16, 40.0);
        assert_eq!(points.len(), 16);
        for (x, z) in &points {
            let dist = (x * x + z * z).sqrt();
            assert!((dist - 40.0).abs() < 0.01);
        }
        // 先頭は +x 方向
        assert!((points[0].0 - 40.0).abs() < 0.01);
    }

    #[test]
    fn direction_buckets_cover_cardinals() {
        assert_eq!(direction_bucket(1.0, 0.0), 0);
        assert_eq!(direction_bucket(0.0, 1.0), 2);
        assert_eq!(direction_bucket(-1.0, 0.0), 4);
        assert_eq!(direction_bucket(0.0, -1.0), 6);
        // 斜め
        assert_eq!(direction_bucket(1.0, 1.0), 1);
        assert_eq!(direction_bucket(-1.0, -1.0), 5);
    }

    #[test]
    fn wave_enemy_counts() {
        assert_eq!(enemies_for_wave(1), 5);
        assert_eq!(enemies_for_wave(2), 8);
        assert_eq!(enemies_for_wave(5), 17);
        assert_eq!(enemies_for_wave(10), 32);
    }

    #[test]
    fn wave_spawn_intervals_clamp_at_minimum() {
        assert!((spawn_interval_ms(1) - 2000.0).abs() < 0.001);
        assert!((spawn_interval_ms(2) - 1800.0).abs() < 0.001);
        assert!((spawn_interval_ms(8) - 600.0).abs() < 0.001);
        assert!((spawn_interval_ms(9) - 500.0).abs() < 0.001);
        assert!((spawn_interval_ms(50) - 500.0).abs() < 0.001);
    }
}
