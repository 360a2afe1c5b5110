//! Path: horde_core/src/physics/grid.rs
//! Summary: 境界つきアリーナ専用の固定セル近傍グリッド（地面平面 x, z）

/// グリッドが覆う片側の範囲。アリーナ境界（45）+ 弾丸のはみ出しぶん。
pub const GRID_EXTENT: f32 = 64.0;

/// アリーナが有界であることを前提にした密なバケットグリッド。
///
/// オープンワールド向けのハッシュではなく、固定範囲をセルに区切った
/// `Vec` のバケット列。毎フレーム `clear` + `insert` で敵スロットから
/// 再構築され、`clear` はバケット容量を保持するので再確保が起きない。
/// 範囲外の座標は境界セルにクランプされる。エンティティはアリーナ内に
/// しか存在しないため、範囲外から radius 以内に掛かるクエリも境界セル
/// 経由で正しく候補を返す（厳密な距離判定は呼び出し側が行う）。
pub struct ArenaGrid {
    cell_size:      f32,
    cells_per_axis: usize,
    cells:          Vec<Vec<usize>>,
}

impl ArenaGrid {
    pub fn new(cell_size: f32) -> Self {
        let cells_per_axis = ((GRID_EXTENT * 2.0) / cell_size).ceil() as usize;
        let cells = (0..cells_per_axis * cells_per_axis)
            .map(|_| Vec::new())
            .collect();
        Self {
            cell_size,
            cells_per_axis,
            cells,
        }
    }

    /// 全バケットを空にする。容量は保持する。
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    fn axis_cell(&self, v: f32) -> usize {
        let cell = ((v + GRID_EXTENT) / self.cell_size).floor() as isize;
        cell.clamp(0, self.cells_per_axis as isize - 1) as usize
    }

    pub fn insert(&mut self, slot: usize, x: f32, z: f32) {
        let index = self.axis_cell(x) * self.cells_per_axis + self.axis_cell(z);
        self.cells[index].push(slot);
    }

    /// 指定円に掛かるセルのスロットを `buf` に集める（アロケーションなし）。
    /// 呼び出し前に `buf` をクリアする必要はない（内部で `clear()` する）。
    pub fn query_nearby_into(&self, x: f32, z: f32, radius: f32, buf: &mut Vec<usize>) {
        buf.clear();
        let x0 = self.axis_cell(x - radius);
        let x1 = self.axis_cell(x + radius);
        let z0 = self.axis_cell(z - radius);
        let z1 = self.axis_cell(z + radius);
        for cx in x0..=x1 {
            for cz in z0..=z1 {
                buf.extend_from_slice(&self.cells[cx * self.cells_per_axis + cz]);
            }
        }
    }

    pub fn query_nearby(&self, x: f32, z: f32, radius: f32) -> Vec<usize> {
        let mut buf = Vec::new();
        self.query_nearby_into(x, z, radius, &mut buf);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_finds_inserted_neighbors() {
        let mut grid = ArenaGrid::new(8.0);
        grid.insert(0, 0.0, 0.0);
        grid.insert(1, 3.0, 3.0);
        grid.insert(2, 40.0, 40.0);

        let near = grid.query_nearby(0.0, 0.0, 5.0);
        assert!(near.contains(&0));
        assert!(near.contains(&1));
        assert!(!near.contains(&2));
    }

    #[test]
    fn clear_keeps_grid_usable() {
        let mut grid = ArenaGrid::new(8.0);
        grid.insert(0, 1.0, 1.0);
        grid.clear();
        assert!(grid.query_nearby(1.0, 1.0, 10.0).is_empty());

        grid.insert(5, 1.0, 1.0);
        assert_eq!(grid.query_nearby(1.0, 1.0, 2.0), vec![5]);
    }

    #[test]
    fn query_into_reuses_buffer() {
        let mut grid = ArenaGrid::new(8.0);
        grid.insert(7, -4.0, -4.0);
        let mut buf = vec![99, 98];
        grid.query_nearby_into(-4.0, -4.0, 2.0, &mut buf);
        assert_eq!(buf, vec![7]);
    }

    #[test]
    fn out_of_extent_coordinates_clamp_to_boundary_cells() {
        let mut grid = ArenaGrid::new(8.0);
        // 境界ぎわのエンティティは、範囲外からのクエリでも見つかる
        grid.insert(0, 63.0, 0.0);
        let near = grid.query_nearby(100.0, 0.0, 2.0);
        assert!(near.contains(&0));

        // クランプでパニックしない
        grid.insert(1, -500.0, 500.0);
        assert!(grid.query_nearby(-500.0, 500.0, 1.0).contains(&1));
    }

    #[test]
    fn corners_of_the_arena_are_covered() {
        let mut grid = ArenaGrid::new(8.0);
        grid.insert(0, -45.0, -45.0);
        grid.insert(1, 45.0, 45.0);
        assert_eq!(grid.query_nearby(-45.0, -45.0, 1.0), vec![0]);
        assert_eq!(grid.query_nearby(45.0, 45.0, 1.0), vec![1]);
    }
}
