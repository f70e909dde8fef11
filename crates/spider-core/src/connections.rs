//! Pair scan deciding which particles get joined by a line.
//!
//! Distances are compared squared against the threshold and never
//! square-rooted, so a threshold of 20000 means a radius of about 141.4.
//! Self-pairs are never produced.

use crate::config::ConnectionStrategy;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance_sq: f32,
    pub opacity: f32,
}

impl Connection {
    #[inline]
    fn new(a: usize, b: usize, distance_sq: f32, threshold: f32) -> Self {
        Self {
            a,
            b,
            distance_sq,
            opacity: connection_opacity(distance_sq, threshold),
        }
    }
}

/// Line alpha for a pair, fading linearly to 0 at the threshold.
#[inline]
pub fn connection_opacity(distance_sq: f32, threshold: f32) -> f32 {
    1.0 - distance_sq / threshold
}

pub fn scan(positions: &[Vec2], threshold: f32, strategy: ConnectionStrategy) -> Vec<Connection> {
    match strategy.resolve(positions.len()) {
        ConnectionStrategy::Grid => scan_grid(positions, threshold),
        _ => scan_all_pairs(positions, threshold),
    }
}

/// O(n²) reference scan. Output is ordered by `a`, then `b`.
pub fn scan_all_pairs(positions: &[Vec2], threshold: f32) -> Vec<Connection> {
    let mut out = Vec::new();
    for (a, pa) in positions.iter().enumerate() {
        for (b, pb) in positions.iter().enumerate().skip(a + 1) {
            let d2 = pa.distance_squared(*pb);
            if d2 < threshold {
                out.push(Connection::new(a, b, d2, threshold));
            }
        }
    }
    out
}

type CellKey = (i32, i32);

/// Bucket-grid scan. Produces the same pairs as [`scan_all_pairs`] but only
/// compares particles in neighbouring cells. Output order follows `a`, but `b`
/// is unordered within each `a`.
pub fn scan_grid(positions: &[Vec2], threshold: f32) -> Vec<Connection> {
    if positions.len() < 2 || threshold.is_nan() || threshold <= 0.0 {
        return Vec::new();
    }
    let cell = threshold.sqrt();
    let key = |p: Vec2| -> CellKey { ((p.x / cell).floor() as i32, (p.y / cell).floor() as i32) };

    let mut grid: FnvHashMap<CellKey, SmallVec<[usize; 8]>> = FnvHashMap::default();
    for (i, p) in positions.iter().enumerate() {
        grid.entry(key(*p)).or_default().push(i);
    }

    let mut out = Vec::new();
    for (a, pa) in positions.iter().enumerate() {
        let (cx, cy) = key(*pa);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let Some(bucket) = grid.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &b in bucket.iter().filter(|&&b| b > a) {
                    let d2 = pa.distance_squared(positions[b]);
                    if d2 < threshold {
                        out.push(Connection::new(a, b, d2, threshold));
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_is_linear_in_squared_distance() {
        assert_eq!(connection_opacity(0.0, 20_000.0), 1.0);
        assert_eq!(connection_opacity(10_000.0, 20_000.0), 0.5);
        assert_eq!(connection_opacity(20_000.0, 20_000.0), 0.0);
    }

    #[test]
    fn all_pairs_excludes_self_pairs() {
        let pts = [Vec2::new(10.0, 10.0)];
        assert!(scan_all_pairs(&pts, 20_000.0).is_empty());
    }

    #[test]
    fn grid_handles_negative_coordinates() {
        let pts = [Vec2::new(-5.0, -5.0), Vec2::new(5.0, 5.0)];
        let found = scan_grid(&pts, 20_000.0);
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].a, found[0].b), (0, 1));
    }
}
