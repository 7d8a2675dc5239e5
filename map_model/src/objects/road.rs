use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use abstutil::{deserialize_btreemap, serialize_btreemap};
use geom::{Distance, Profile};

use crate::LaneSection;

#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoadID(pub usize);

impl fmt::Display for RoadID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Road #{}", self.0)
    }
}

/// A Road is split longitudinally into lane sections. Within one section the set of lanes is
/// fixed, though their widths may vary along it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Road {
    /// Restamped from the key in `Map` after loading
    #[serde(skip)]
    pub id: RoadID,
    pub length: Distance,
    /// Shifts every lane border at a station laterally by the same amount.
    pub lane_offset: Profile,

    /// Keyed and ordered by the station where each section starts.
    #[serde(
        serialize_with = "serialize_btreemap",
        deserialize_with = "deserialize_btreemap"
    )]
    pub(crate) lanesections: BTreeMap<Distance, LaneSection>,
}

impl Road {
    pub fn new(id: RoadID, length: Distance, lane_offset: Profile) -> Road {
        Road {
            id,
            length,
            lane_offset,
            lanesections: BTreeMap::new(),
        }
    }

    /// Returns the section starting at `s0`, creating an empty one if needed.
    pub fn add_lanesection(&mut self, s0: Distance) -> &mut LaneSection {
        let id = self.id;
        self.lanesections
            .entry(s0)
            .or_insert_with(|| LaneSection::new(id, s0))
    }

    /// Ordered by starting station
    pub fn lanesections(&self) -> impl Iterator<Item = &LaneSection> {
        self.lanesections.values()
    }

    /// The section starting exactly at `s0`.
    pub fn get_lanesection(&self, s0: Distance) -> Option<&LaneSection> {
        self.lanesections.get(&s0)
    }

    /// The start of the section in effect at station `s`. None if `s` is off either end of the
    /// road or comes before the first section.
    pub fn lanesection_s0_at(&self, s: Distance) -> Option<Distance> {
        if s < Distance::ZERO || s > self.length {
            return None;
        }
        self.lanesections
            .range(..=s)
            .next_back()
            .map(|(s0, _)| *s0)
    }

    pub fn lanesection_at(&self, s: Distance) -> Option<&LaneSection> {
        self.lanesections.get(&self.lanesection_s0_at(s)?)
    }
}
