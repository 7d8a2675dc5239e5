use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use geom::{Distance, PiecewisePolynomial, Polynomial, Profile};
use map_model::{lane_id_from_borders, LaneSection, Map, Road, RoadID};

fn random_width(rng: &mut XorShiftRng, section_len: f64) -> Profile {
    match rng.gen_range(0..3) {
        0 => Profile::Constant(Distance::meters(rng.gen_range(0.0..5.0))),
        1 => Profile::Cubic(Polynomial::linear(
            Distance::ZERO,
            Distance::meters(rng.gen_range(2.0..4.0)),
            rng.gen_range(-0.01..0.01),
        )),
        _ => {
            // Widen smoothly partway along the section
            let change_at = rng.gen_range(0.0..section_len);
            Profile::Piecewise(PiecewisePolynomial::new(vec![
                Polynomial::linear(Distance::ZERO, Distance::meters(3.0), 0.0),
                Polynomial::new(Distance::meters(change_at), 3.0, 0.0, 0.001, 0.0),
            ]))
        }
    }
}

/// A road with a few sections, each with a random set of lanes on either side.
fn random_map(rng: &mut XorShiftRng) -> Map {
    let length = 200.0;
    let mut road = Road::new(
        RoadID(0),
        Distance::meters(length),
        Profile::Cubic(Polynomial::new(
            Distance::ZERO,
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-0.01..0.01),
            0.0,
            0.0,
        )),
    );
    let starts = [0.0, 60.0, 150.0];
    for (idx, s0) in starts.iter().enumerate() {
        let section_len = starts.get(idx + 1).unwrap_or(&length) - s0;
        let ls = road.add_lanesection(Distance::meters(*s0));
        ls.add_lane(0, false, "none".to_string(), Profile::zero());
        for id in 1..=rng.gen_range(0..5) {
            let width = random_width(rng, section_len);
            ls.add_lane(id, false, "driving".to_string(), width);
        }
        for id in 1..=rng.gen_range(0..5) {
            let width = random_width(rng, section_len);
            ls.add_lane(-id, rng.gen_bool(0.5), "shoulder".to_string(), width);
        }
    }

    let mut map = Map::new();
    map.insert_road(road);
    map
}

fn stations(rng: &mut XorShiftRng, ls: &LaneSection, map: &Map) -> Vec<Distance> {
    let len = ls.length(map).inner_meters();
    let mut result = vec![ls.s0];
    for _ in 0..10 {
        result.push(ls.s0 + Distance::meters(rng.gen_range(0.0..len)));
    }
    result
}

#[test]
fn single_lane_walk_matches_batch() {
    let mut rng = XorShiftRng::seed_from_u64(42);
    for _ in 0..20 {
        let map = random_map(&mut rng);
        for ls in map.all_lanesections() {
            for s in stations(&mut rng, ls, &map) {
                let borders = ls.lane_borders(s, &map).unwrap();
                assert_eq!(borders.len(), ls.lanes().len());
                for lane in ls.lanes() {
                    assert_eq!(
                        lane.outer_border(s, &map).unwrap(),
                        borders[&lane.id],
                        "{} at {}",
                        lane,
                        s
                    );
                }
            }
        }
    }
}

#[test]
fn borders_grow_outwards() {
    let mut rng = XorShiftRng::seed_from_u64(7);
    for _ in 0..20 {
        let map = random_map(&mut rng);
        let road = map.get_r(RoadID(0)).unwrap();
        for ls in map.all_lanesections() {
            for s in stations(&mut rng, ls, &map) {
                let offset = road.lane_offset.get(s);
                let borders = ls.lane_borders(s, &map).unwrap();
                assert_eq!(borders[&0], offset);

                let mut last = Distance::ZERO;
                for (_, border) in borders.range(1..) {
                    let dist = (*border - offset).abs();
                    assert!(dist >= last);
                    last = dist;
                }
                let mut last = Distance::ZERO;
                for (_, border) in borders.range(..0).rev() {
                    let dist = (*border - offset).abs();
                    assert!(dist >= last);
                    last = dist;
                }
            }
        }
    }
}

#[test]
fn inner_border_is_the_neighbors_outer_border() {
    let mut rng = XorShiftRng::seed_from_u64(1234);
    for _ in 0..10 {
        let map = random_map(&mut rng);
        for ls in map.all_lanesections() {
            for s in stations(&mut rng, ls, &map) {
                let borders = ls.lane_borders(s, &map).unwrap();
                for lane in ls.lanes() {
                    let neighbor = if lane.id > 0 {
                        lane.id - 1
                    } else if lane.id < 0 {
                        lane.id + 1
                    } else {
                        0
                    };
                    assert_eq!(lane.inner_border(s, &map).unwrap(), borders[&neighbor]);
                }
            }
        }
    }
}

#[test]
fn points_between_borders_resolve_to_that_lane() {
    let mut rng = XorShiftRng::seed_from_u64(99);
    for _ in 0..10 {
        let map = random_map(&mut rng);
        for ls in map.all_lanesections() {
            for s in stations(&mut rng, ls, &map) {
                for lane in ls.lanes() {
                    if lane.id == 0 {
                        continue;
                    }
                    let inner = lane.inner_border(s, &map).unwrap();
                    let outer = lane.outer_border(s, &map).unwrap();
                    if (outer - inner).abs() <= 2.0 * geom::EPSILON_DIST {
                        continue;
                    }
                    let middle = inner + (outer - inner) / 2.0;
                    let found = ls.lane_at(s, middle, &map).unwrap().map(|l| l.id);
                    assert_eq!(found, Some(lane.id), "{} at ({}, {})", lane, s, middle);
                }

                let borders = ls.lane_borders(s, &map).unwrap();
                let (_, lowest) = borders.iter().next().unwrap();
                let (_, highest) = borders.iter().next_back().unwrap();
                let past_left = *highest + Distance::meters(0.5);
                let past_right = *lowest - Distance::meters(0.5);
                assert_eq!(lane_id_from_borders(past_left, &borders), None);
                assert!(ls.lane_at(s, past_right, &map).unwrap().is_none());
            }
        }
    }
}

#[test]
fn five_unit_lanes() {
    let mut road = Road::new(
        RoadID(0),
        Distance::meters(30.0),
        Profile::Constant(Distance::meters(0.75)),
    );
    let ls = road.add_lanesection(Distance::ZERO);
    for id in -2..=2 {
        let width = if id == 0 { 0.0 } else { 1.0 };
        ls.add_lane(
            id,
            false,
            "driving".to_string(),
            Profile::Constant(Distance::meters(width)),
        );
    }
    let mut map = Map::new();
    map.insert_road(road);

    let ls = map.all_lanesections().next().unwrap();
    let borders: Vec<(i32, f64)> = ls
        .lane_borders(Distance::meters(12.0), &map)
        .unwrap()
        .into_iter()
        .map(|(id, t)| (id, t.inner_meters()))
        .collect();
    assert_eq!(
        borders,
        vec![(-2, -1.25), (-1, -0.25), (0, 0.75), (1, 1.75), (2, 2.75)]
    );
}
