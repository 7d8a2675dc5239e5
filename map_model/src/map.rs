//! A bunch of (mostly read-only) queries on a Map.

use anyhow::{anyhow, Result};

use geom::Distance;

use crate::{Lane, LaneSection, LaneSectionID, Map, Road, RoadID};

impl Map {
    pub fn new() -> Map {
        Map::default()
    }

    /// Reads a JSON map and restores the links from children to parents.
    pub fn load_json(path: &str) -> Result<Map> {
        let mut map: Map = abstutil::read_json(path)?;
        map.map_loaded_directly();
        info!(
            "Loaded {} with {} roads, {} lane sections",
            path,
            map.roads.len(),
            map.all_lanesections().count()
        );
        Ok(map)
    }

    /// If you have to deserialize a `Map` directly, call this after. IDs and parent links aren't
    /// serialized; they're recovered from the keys of each container.
    pub fn map_loaded_directly(&mut self) {
        for (id, road) in &mut self.roads {
            road.id = *id;
            for (s0, ls) in &mut road.lanesections {
                ls.s0 = *s0;
                ls.road = *id;
                let parent = ls.id();
                for (lane_id, lane) in &mut ls.lanes {
                    lane.id = *lane_id;
                    lane.parent = parent;
                }
            }
        }
    }

    /// Adds a road, replacing any existing one with the same ID.
    pub fn insert_road(&mut self, road: Road) {
        if let Some(old) = self.roads.insert(road.id, road) {
            debug!("Replaced {}", old.id);
        }
    }

    pub fn all_roads(&self) -> impl Iterator<Item = &Road> {
        self.roads.values()
    }

    pub fn all_lanesections(&self) -> impl Iterator<Item = &LaneSection> {
        self.roads.values().flat_map(|r| r.lanesections())
    }

    pub fn maybe_get_r(&self, id: RoadID) -> Option<&Road> {
        self.roads.get(&id)
    }

    pub fn get_r(&self, id: RoadID) -> Result<&Road> {
        self.maybe_get_r(id)
            .ok_or_else(|| anyhow!("{} doesn't exist", id))
    }

    pub fn maybe_get_ls(&self, id: LaneSectionID) -> Option<&LaneSection> {
        self.maybe_get_r(id.road)?.get_lanesection(id.s0)
    }

    pub fn get_ls(&self, id: LaneSectionID) -> Result<&LaneSection> {
        self.get_r(id.road)?
            .get_lanesection(id.s0)
            .ok_or_else(|| anyhow!("{} doesn't exist", id))
    }

    pub fn get_l(&self, section: LaneSectionID, id: i32) -> Result<&Lane> {
        self.get_ls(section)?
            .get_lane(id)
            .ok_or_else(|| anyhow!("{} doesn't have lane #{}", section, id))
    }

    /// Finds the section of a road in effect at station `s`, then the lane there containing
    /// lateral position `t`. None if the point is off the road.
    pub fn lane_at(&self, road: RoadID, s: Distance, t: Distance) -> Result<Option<&Lane>> {
        match self.get_r(road)?.lanesection_at(s) {
            Some(ls) => ls.lane_at(s, t, self),
            None => Ok(None),
        }
    }
}
