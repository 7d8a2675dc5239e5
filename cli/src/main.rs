//! Query lane borders of a JSON road network from the command line.

#[macro_use]
extern crate log;

use anyhow::{bail, Result};
use serde::Serialize;
use structopt::StructOpt;

use geom::Distance;
use map_model::{Map, RoadID};

#[derive(StructOpt)]
#[structopt(name = "lanes", about = "Lane border queries on a road network")]
enum Command {
    /// Print the outer border of every lane at one station, as JSON
    Borders {
        /// The path to a JSON map
        #[structopt(long)]
        map: String,
        /// Which road to query
        #[structopt(long)]
        road: usize,
        /// The station along the road, in meters
        #[structopt(long)]
        s: f64,
    },
    /// Find the lane containing a point
    Locate {
        /// The path to a JSON map
        #[structopt(long)]
        map: String,
        /// Which road to query
        #[structopt(long)]
        road: usize,
        /// The station along the road, in meters
        #[structopt(long)]
        s: f64,
        /// The lateral position, in meters. Positive is towards positive lane ids.
        #[structopt(long, allow_hyphen_values = true)]
        t: f64,
    },
    /// List every lane section of a road, with its extent
    Sections {
        /// The path to a JSON map
        #[structopt(long)]
        map: String,
        /// Which road to query
        #[structopt(long)]
        road: usize,
    },
    /// Re-serialize a map, to check it loads
    Dump {
        /// The path to a JSON map
        #[structopt()]
        map: String,
        /// Write here instead of STDOUT
        #[structopt(long)]
        output: Option<String>,
    },
}

#[derive(Serialize)]
struct SectionSummary {
    s0: Distance,
    length: Distance,
    lanes: Vec<i32>,
}

fn main() -> Result<()> {
    let cmd = Command::from_args();

    // Dumping writes JSON to STDOUT; keep it clean
    if !matches!(cmd, Command::Dump { output: None, .. }) {
        abstutil::logger::setup();
    }

    match cmd {
        Command::Borders { map, road, s } => borders(map, RoadID(road), Distance::meters(s))?,
        Command::Locate { map, road, s, t } => locate(
            map,
            RoadID(road),
            Distance::meters(s),
            Distance::meters(t),
        )?,
        Command::Sections { map, road } => sections(map, RoadID(road))?,
        Command::Dump { map, output } => dump(map, output)?,
    }
    Ok(())
}

fn borders(path: String, road: RoadID, s: Distance) -> Result<()> {
    let map = Map::load_json(&path)?;
    let ls = match map.get_r(road)?.lanesection_at(s) {
        Some(ls) => ls,
        None => bail!("{} is off the end of {}", s, road),
    };
    let borders = ls.lane_borders(s, &map)?;
    println!("{}", abstutil::to_json(&borders));
    Ok(())
}

fn locate(path: String, road: RoadID, s: Distance, t: Distance) -> Result<()> {
    let map = Map::load_json(&path)?;
    match map.lane_at(road, s, t)? {
        Some(lane) => println!("{} ({}, level {})", lane, lane.lane_type, lane.level),
        None => println!("({}, {}) is off {}", s, t, road),
    }
    Ok(())
}

fn sections(path: String, road: RoadID) -> Result<()> {
    let map = Map::load_json(&path)?;
    let summaries: Vec<SectionSummary> = map
        .get_r(road)?
        .lanesections()
        .map(|ls| SectionSummary {
            s0: ls.s0,
            length: ls.length(&map),
            lanes: ls.lane_ids(),
        })
        .collect();
    info!("{} has {} lane sections", road, summaries.len());
    println!("{}", abstutil::to_json(&summaries));
    Ok(())
}

fn dump(path: String, output: Option<String>) -> Result<()> {
    let map = Map::load_json(&path)?;
    match output {
        Some(output) => abstutil::write_json(&output, &map)?,
        None => println!("{}", abstutil::to_json(&map)),
    }
    Ok(())
}
