use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

type Bucket = SmallVec<[usize; 8]>;

/// Uniform hash grid keyed by integer cell coordinates.
///
/// With `cell_size` equal to the query distance, every pair closer than that
/// distance lies in the same or an adjacent cell, so only the 3x3
/// neighbourhood needs checking.
pub struct SpatialGrid {
    cell_size: f32,
    cells: FnvHashMap<(i32, i32), Bucket>,
}

impl SpatialGrid {
    pub fn build(positions: &[Vec2], cell_size: f32) -> Self {
        let mut cells: FnvHashMap<(i32, i32), Bucket> = FnvHashMap::default();
        for (i, p) in positions.iter().enumerate() {
            cells.entry(cell_of(*p, cell_size)).or_default().push(i);
        }
        Self { cell_size, cells }
    }

    /// Calls `f(i, j)` with `i < j` for every pair strictly closer than
    /// `max_dist`. Each pair is visited exactly once.
    pub fn for_each_pair_within(
        &self,
        positions: &[Vec2],
        max_dist: f32,
        mut f: impl FnMut(usize, usize),
    ) {
        debug_assert!(max_dist <= self.cell_size);
        for (i, p) in positions.iter().enumerate() {
            let (cx, cy) = cell_of(*p, self.cell_size);
            for ny in cy.saturating_sub(1)..=cy.saturating_add(1) {
                for nx in cx.saturating_sub(1)..=cx.saturating_add(1) {
                    let Some(bucket) = self.cells.get(&(nx, ny)) else {
                        continue;
                    };
                    for &j in bucket {
                        if j > i && p.distance(positions[j]) < max_dist {
                            f(i, j);
                        }
                    }
                }
            }
        }
    }
}

#[inline]
fn cell_of(p: Vec2, cell_size: f32) -> (i32, i32) {
    (
        (p.x / cell_size).floor() as i32,
        (p.y / cell_size).floor() as i32,
    )
}
