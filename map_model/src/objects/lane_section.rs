use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use abstutil::{deserialize_btreemap, serialize_btreemap};
use geom::{Distance, Profile};

use crate::{lane_id_from_borders, Lane, Map, RoadID, REFERENCE_LANE};

/// A lane section is identified by its road and the station where it starts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct LaneSectionID {
    pub road: RoadID,
    pub s0: Distance,
}

impl fmt::Display for LaneSectionID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LaneSection of {} at {}", self.road, self.s0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LaneSection {
    /// Where this section starts along its road, inclusive. Restamped after loading.
    #[serde(skip)]
    pub s0: Distance,
    #[serde(skip)]
    pub road: RoadID,

    /// Invariant: contains the reference lane. Positive ids are on one side of it, negative on
    /// the other, both numbered outwards.
    #[serde(
        serialize_with = "serialize_btreemap",
        deserialize_with = "deserialize_btreemap"
    )]
    pub(crate) lanes: BTreeMap<i32, Lane>,
}

impl LaneSection {
    pub(crate) fn new(road: RoadID, s0: Distance) -> LaneSection {
        LaneSection {
            s0,
            road,
            lanes: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> LaneSectionID {
        LaneSectionID {
            road: self.road,
            s0: self.s0,
        }
    }

    /// Attaches a lane, replacing any existing lane with the same id.
    pub fn add_lane(
        &mut self,
        id: i32,
        level: bool,
        lane_type: String,
        width: Profile,
    ) -> &mut Lane {
        let lane = Lane {
            id,
            level,
            lane_type,
            width,
            parent: self.id(),
        };
        match self.lanes.entry(id) {
            Entry::Occupied(mut entry) => {
                entry.insert(lane);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(lane),
        }
    }

    /// Every lane, in no particular order.
    pub fn lanes(&self) -> Vec<&Lane> {
        self.lanes.values().collect()
    }

    /// Ascending
    pub fn lane_ids(&self) -> Vec<i32> {
        self.lanes.keys().cloned().collect()
    }

    pub fn get_lane(&self, id: i32) -> Option<&Lane> {
        self.lanes.get(&id)
    }

    pub(crate) fn check_reference_lane(&self) -> Result<()> {
        if !self.lanes.contains_key(&REFERENCE_LANE) {
            bail!("{} doesn't have lane #{}", self.id(), REFERENCE_LANE);
        }
        Ok(())
    }

    /// How far this section extends along its road: up to the next section, or to the end of
    /// the road for the last one. If the road is missing or doesn't know about this section,
    /// this is zero.
    pub fn length(&self, map: &Map) -> Distance {
        let road = match map.maybe_get_r(self.road) {
            Some(r) => r,
            None => {
                warn!("{} belongs to a missing road; treating it as empty", self.id());
                return Distance::ZERO;
            }
        };

        let mut iter = road.lanesections.range(self.s0..);
        if iter.next().map(|(s0, _)| *s0) != Some(self.s0) {
            warn!("{} isn't in its road; treating it as empty", self.id());
            return Distance::ZERO;
        }
        match iter.next() {
            Some((next_s0, _)) => *next_s0 - self.s0,
            None => road.length - self.s0,
        }
    }

    /// The station where the next section (or the road) begins.
    pub fn end(&self, map: &Map) -> Distance {
        self.s0 + self.length(map)
    }

    /// The outer border of every lane at station `s`, in one pass over the lanes. The reference
    /// lane's border is just the road's lane offset.
    ///
    /// `s` has to be within this section; that isn't checked.
    pub fn lane_borders(&self, s: Distance, map: &Map) -> Result<BTreeMap<i32, Distance>> {
        self.check_reference_lane()?;
        let offset = map.get_r(self.road)?.lane_offset.get(s);

        let mut borders = BTreeMap::new();

        let mut t = Distance::ZERO;
        for (id, lane) in self.lanes.range(REFERENCE_LANE + 1..) {
            t += lane.width_at(s);
            borders.insert(*id, offset + t);
        }

        let mut t = Distance::ZERO;
        for (id, lane) in self.lanes.range(..REFERENCE_LANE).rev() {
            t += lane.width_at(s);
            borders.insert(*id, offset - t);
        }

        borders.insert(REFERENCE_LANE, offset);
        Ok(borders)
    }

    /// The lane containing lateral position `t` at station `s`, or None if `t` is past the
    /// outermost lane on either side. See `lane_id_from_borders` for points exactly on a border.
    pub fn lane_at(&self, s: Distance, t: Distance, map: &Map) -> Result<Option<&Lane>> {
        let borders = self.lane_borders(s, map)?;
        let id = match lane_id_from_borders(t, &borders) {
            Some(id) => id,
            None => {
                debug!("{} at ({}, {}) is off the road", self.id(), s, t);
                return Ok(None);
            }
        };
        Ok(self.lanes.get(&id))
    }
}
