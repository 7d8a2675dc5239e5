//! The lane layout of a road network in OpenDRIVE style: roads are split longitudinally into
//! lane sections, and each section holds lanes numbered outwards from a zero-width reference
//! lane. This crate answers "where is the outer edge of lane N at station s" and "which lane is
//! the point (s, t) in."
//!
//! Children never hold pointers to their parents. A `Lane` stores the `LaneSectionID` of its
//! section and a `LaneSection` stores its `RoadID`; both are resolved through the `Map`.

#[macro_use]
mod macros;

mod borders;
mod map;
mod objects;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use abstutil::{deserialize_btreemap, serialize_btreemap};

pub use crate::borders::lane_id_from_borders;
pub use crate::objects::lane::Lane;
pub use crate::objects::lane_section::{LaneSection, LaneSectionID};
pub use crate::objects::road::{Road, RoadID};

/// The id of the zero-width reference lane, present in every well-formed lane section.
pub const REFERENCE_LANE: i32 = 0;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Map {
    #[serde(
        serialize_with = "serialize_btreemap",
        deserialize_with = "deserialize_btreemap"
    )]
    roads: BTreeMap<RoadID, Road>,
}
