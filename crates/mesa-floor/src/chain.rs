#![forbid(unsafe_code)]

//! Chain-mode edge generation.
//!
//! When chain mode is on, every table is linked to its enumeration-order
//! successor: an edge leaves the right-center of table i's box and enters
//! the left-center of table i+1's box. The chain follows storage order
//! only; capacity and occupancy play no part.
//!
//! Chain mode off means no edges at all. The flag changes nothing else.

use crate::layout::{Point, TABLE_H, TABLE_W};

/// Arrowhead barb length in floor pixels.
const BARB_LEN: f64 = 12.0;
/// Angle between the shaft and each barb, in degrees.
const BARB_DEGREES: f64 = 20.0;

/// A directed connector between two consecutive tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Right-center of the source table's box.
    pub from: Point,
    /// Left-center of the destination table's box; the arrowhead sits here.
    pub to: Point,
}

impl Edge {
    /// Endpoints of the two arrowhead barbs.
    ///
    /// Each barb runs from [`Edge::to`] back toward the source, rotated
    /// ±20° off the shaft, 12px long. Pure in the two endpoints.
    pub fn barbs(&self) -> [Point; 2] {
        let phi = BARB_DEGREES.to_radians();
        let dx = f64::from(self.to.x - self.from.x);
        let dy = f64::from(self.to.y - self.from.y);
        let theta = dy.atan2(dx);
        let tip_x = f64::from(self.to.x);
        let tip_y = f64::from(self.to.y);
        let barb = |angle: f64| {
            Point::new(
                (tip_x - BARB_LEN * angle.cos()) as i32,
                (tip_y - BARB_LEN * angle.sin()) as i32,
            )
        };
        [barb(theta + phi), barb(theta - phi)]
    }
}

/// Successor-chain edges for the given table positions.
///
/// Returns one edge per consecutive pair when `chained` is on, and nothing
/// at all when it is off.
pub fn edges(positions: &[Point], chained: bool) -> Vec<Edge> {
    if !chained {
        return Vec::new();
    }
    positions
        .windows(2)
        .map(|pair| Edge {
            from: Point::new(pair[0].x + TABLE_W, pair[0].y + TABLE_H / 2),
            to: Point::new(pair[1].x, pair[1].y + TABLE_H / 2),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Edge, edges};
    use crate::layout::{Point, positions};

    #[test]
    fn disabled_mode_yields_no_edges() {
        assert!(edges(&positions(0), false).is_empty());
        assert!(edges(&positions(3), false).is_empty());
        assert!(edges(&positions(9), false).is_empty());
    }

    #[test]
    fn three_tables_yield_two_edges() {
        let e = edges(&positions(3), true);
        assert_eq!(e.len(), 2);
        // pos0 = (180, 90), pos1 = (90, 220), pos2 = (80, 40).
        assert_eq!(e[0].from, Point::new(260, 120));
        assert_eq!(e[0].to, Point::new(90, 250));
        assert_eq!(e[1].from, Point::new(170, 250));
        assert_eq!(e[1].to, Point::new(80, 70));
    }

    #[test]
    fn lone_table_has_no_successor() {
        assert!(edges(&positions(1), true).is_empty());
        assert!(edges(&positions(0), true).is_empty());
    }

    #[test]
    fn barbs_trail_the_tip_on_a_horizontal_shaft() {
        let edge = Edge {
            from: Point::new(0, 0),
            to: Point::new(100, 0),
        };
        let [a, b] = edge.barbs();
        // Both barbs point back toward the source, one above, one below.
        assert!(a.x < 100 && b.x < 100);
        assert_eq!(a.x, b.x);
        assert!(a.y < 0);
        assert!(b.y > 0);
        assert_eq!(a.y, -b.y);
    }

    #[test]
    fn barbs_are_deterministic() {
        let edge = Edge {
            from: Point::new(260, 120),
            to: Point::new(90, 250),
        };
        assert_eq!(edge.barbs(), edge.barbs());
    }
}
