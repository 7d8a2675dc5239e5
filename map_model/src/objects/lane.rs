use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use geom::{Distance, Profile};

use crate::{LaneSection, LaneSectionID, Map, REFERENCE_LANE};

/// One lane of a lane section. Positive ids lie on one side of the reference lane, negative ids
/// on the other.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lane {
    /// Unique within the section. Restamped from the key after loading.
    #[serde(skip)]
    pub id: i32,
    /// Passed through untouched
    pub level: bool,
    /// Passed through untouched, like "driving" or "sidewalk"
    pub lane_type: String,
    /// Evaluated relative to the start of the section. Must never be negative.
    pub width: Profile,

    #[serde(skip)]
    pub parent: LaneSectionID,
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Lane #{} of {}", self.id, self.parent)
    }
}

impl Lane {
    /// This lane's own width at station `s` along the road.
    pub fn width_at(&self, s: Distance) -> Distance {
        self.width.get(s - self.parent.s0)
    }

    /// The signed lateral distance from the road's reference line to the edge of this lane
    /// farthest from it, including the lane offset. This walks only the lanes between this one
    /// and the reference lane; use `LaneSection::lane_borders` to get every lane at once.
    pub fn outer_border(&self, s: Distance, map: &Map) -> Result<Distance> {
        self.border(s, map, true)
    }

    /// Like `outer_border`, but the edge nearest the reference line. For lanes 1 and -1, this
    /// is just the lane offset.
    pub fn inner_border(&self, s: Distance, map: &Map) -> Result<Distance> {
        self.border(s, map, false)
    }

    fn border(&self, s: Distance, map: &Map, include_self: bool) -> Result<Distance> {
        let ls = map.get_ls(self.parent)?;
        ls.check_reference_lane()?;
        let offset = map.get_r(self.parent.road)?.lane_offset.get(s);
        if self.id == REFERENCE_LANE {
            return Ok(offset);
        }

        let t: Distance = walk_to_reference(ls, self.id, include_self)?
            .into_iter()
            .map(|lane| lane.width_at(s))
            .sum();
        if self.id > 0 {
            Ok(offset + t)
        } else {
            Ok(offset - t)
        }
    }
}

/// The lanes between `id` and the reference lane, in the order `lane_borders` accumulates them:
/// starting next to the reference lane and heading out.
fn walk_to_reference(ls: &LaneSection, id: i32, include_self: bool) -> Result<Vec<&Lane>> {
    if !ls.lanes.contains_key(&id) {
        bail!("{} doesn't have lane #{}", ls.id(), id);
    }

    let mut lanes = Vec::new();
    if id > REFERENCE_LANE {
        let outermost = if include_self { id } else { id - 1 };
        if outermost > REFERENCE_LANE {
            lanes.extend(ls.lanes.range(REFERENCE_LANE + 1..=outermost).map(|(_, l)| l));
        }
    } else {
        let outermost = if include_self { id } else { id + 1 };
        lanes.extend(ls.lanes.range(outermost..REFERENCE_LANE).rev().map(|(_, l)| l));
    }
    Ok(lanes)
}
