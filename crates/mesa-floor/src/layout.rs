#![forbid(unsafe_code)]

//! Deterministic table placement.
//!
//! The first five tables get hand-tuned anchors mimicking the floor
//! sketch this tool was built around; anything beyond that falls into a
//! row-major overflow grid below the sketch area. The two regions never
//! overlap: presets stay above y=320, the overflow band starts at y=330.
//!
//! Placement depends only on a record's index in the enumeration, never on
//! its id or contents, so re-running layout on an unchanged registry is
//! repaint-stable.

/// A point in floor coordinates (pixels on a 600x420 canvas, origin
/// top-left). Each table's glyph box hangs down-right from its point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Floor canvas width in pixels.
pub const FLOOR_WIDTH: i32 = 600;
/// Floor canvas height in pixels (one overflow row fits below the sketch).
pub const FLOOR_HEIGHT: i32 = 420;
/// Table glyph box width.
pub const TABLE_W: i32 = 80;
/// Table glyph box height.
pub const TABLE_H: i32 = 60;

/// Hand-tuned anchors for the first five tables, in enumeration order:
/// center top, left bottom, left top, right bottom, right top.
pub const PRESET_ANCHORS: [Point; 5] = [
    Point::new(180, 90),
    Point::new(90, 220),
    Point::new(80, 40),
    Point::new(260, 260),
    Point::new(280, 60),
];

/// Columns in the overflow grid.
pub const OVERFLOW_COLS: usize = 4;
/// Left edge of the first overflow column.
pub const OVERFLOW_BASE_X: i32 = 40;
/// Top edge of the first overflow row; below every preset anchor's box.
pub const OVERFLOW_BASE_Y: i32 = 330;
/// Horizontal stride between overflow columns.
pub const OVERFLOW_GAP_X: i32 = 120;
/// Vertical stride between overflow rows.
pub const OVERFLOW_GAP_Y: i32 = 70;

/// Floor position for the record at enumeration index `index`.
pub fn position_at(index: usize) -> Point {
    if index < PRESET_ANCHORS.len() {
        return PRESET_ANCHORS[index];
    }
    let idx = index - PRESET_ANCHORS.len();
    let col = (idx % OVERFLOW_COLS) as i32;
    let row = (idx / OVERFLOW_COLS) as i32;
    Point::new(
        OVERFLOW_BASE_X + col * OVERFLOW_GAP_X,
        OVERFLOW_BASE_Y + row * OVERFLOW_GAP_Y,
    )
}

/// Positions for `count` records, in enumeration order.
///
/// Pure in `count`: record identity and contents never matter.
pub fn positions(count: usize) -> Vec<Point> {
    (0..count).map(position_at).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_used_in_order_for_first_five() {
        let pos = positions(5);
        assert_eq!(pos.len(), 5);
        assert_eq!(pos[0], Point::new(180, 90));
        assert_eq!(pos[1], Point::new(90, 220));
        assert_eq!(pos[2], Point::new(80, 40));
        assert_eq!(pos[3], Point::new(260, 260));
        assert_eq!(pos[4], Point::new(280, 60));
    }

    #[test]
    fn short_floors_take_a_preset_prefix() {
        let pos = positions(2);
        assert_eq!(pos, vec![Point::new(180, 90), Point::new(90, 220)]);
    }

    #[test]
    fn overflow_starts_at_documented_base() {
        let pos = positions(7);
        assert_eq!(pos[5], Point::new(40, 330));
        assert_eq!(pos[6], Point::new(160, 330));
    }

    #[test]
    fn overflow_wraps_after_four_columns() {
        let pos = positions(15);
        // Index 9 is the last cell of the first overflow row.
        assert_eq!(pos[8], Point::new(400, 330));
        assert_eq!(pos[9], Point::new(40, 400));
        assert_eq!(pos[13], Point::new(40, 470));
    }

    #[test]
    fn layout_is_pure_in_count() {
        assert_eq!(positions(9), positions(9));
        // A shorter layout is a prefix of a longer one.
        assert_eq!(positions(12)[..7], positions(7)[..]);
    }

    #[test]
    fn empty_floor_has_no_positions() {
        assert!(positions(0).is_empty());
    }

    #[test]
    fn preset_boxes_stay_above_the_overflow_band() {
        for anchor in PRESET_ANCHORS {
            assert!(anchor.y + TABLE_H <= OVERFLOW_BASE_Y);
        }
    }
}
