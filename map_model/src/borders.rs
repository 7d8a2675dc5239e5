use std::collections::BTreeMap;

use geom::Distance;

use crate::REFERENCE_LANE;

/// Given the outer border of every lane at some station (as from `LaneSection::lane_borders`),
/// find the lane containing lateral position `t`.
///
/// A lane spans from its inner border, exclusive, to its outer border, inclusive, so a point
/// exactly on the border between two lanes belongs to the one nearer the reference line. A
/// point exactly on the reference line belongs to the reference lane. Returns None past the
/// outermost border on either side, or if there's no reference lane at all.
pub fn lane_id_from_borders(t: Distance, borders: &BTreeMap<i32, Distance>) -> Option<i32> {
    let center = *borders.get(&REFERENCE_LANE)?;
    if t == center {
        return Some(REFERENCE_LANE);
    }

    let found = if t > center {
        borders
            .range(REFERENCE_LANE + 1..)
            .find(|(_, outer)| **outer >= t)
    } else {
        borders
            .range(..REFERENCE_LANE)
            .rev()
            .find(|(_, outer)| **outer <= t)
    };
    found.map(|(id, _)| *id)
}
