//! Marker separation.
//!
//! Points closer than a threshold distance are pushed apart by accumulating a
//! small per-point offset over a fixed number of passes. Distances are always
//! measured between the original coordinates, so every pass applies the same
//! pushes again on top of what earlier passes accumulated.

use std::collections::{BTreeMap, HashMap};

use crate::geo::{LatLon, Offset, haversine_km};
use crate::team::Point;

pub type OffsetMap = HashMap<String, Offset>;

/// Approximate kilometres per degree of latitude.
const KM_PER_DEGREE: f64 = 111.0;

/// Divisor applied to the overlap before a custom rule's strength.
const CUSTOM_FORCE_DIVISOR: f64 = 20.0;

/// Floor on the direction vector length for coincident points.
const MIN_DIRECTION_MAGNITUDE: f64 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparationParams {
    pub min_distance_km: f64,
    pub iterations: u32,
    /// Smaller values push harder in the default (direct repulsion) case.
    pub div_factor: f64,
}

impl Default for SeparationParams {
    fn default() -> Self {
        Self {
            min_distance_km: 70.0,
            iterations: 2,
            div_factor: 70.0,
        }
    }
}

/// Fixed push axis for one pair of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomDirection {
    /// Degrees; 0 points north, 90 points east.
    pub angle_degrees: f64,
    pub strength: f64,
}

/// Unordered pair of identifiers, stored sorted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey(String, String);

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self(a.to_string(), b.to_string())
        } else {
            Self(b.to_string(), a.to_string())
        }
    }

    pub fn first(&self) -> &str {
        &self.0
    }

    pub fn second(&self) -> &str {
        &self.1
    }
}

/// Custom direction rules keyed by unordered pair.
#[derive(Debug, Clone, Default)]
pub struct CustomDirections {
    rules: BTreeMap<PairKey, CustomDirection>,
}

impl CustomDirections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, a: &str, b: &str, rule: CustomDirection) -> Option<CustomDirection> {
        self.rules.insert(PairKey::new(a, b), rule)
    }

    pub fn get(&self, a: &str, b: &str) -> Option<&CustomDirection> {
        self.rules.get(&PairKey::new(a, b))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, &CustomDirection)> {
        self.rules.iter()
    }
}

impl<'a> FromIterator<(&'a str, &'a str, CustomDirection)> for CustomDirections {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str, CustomDirection)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (a, b, rule) in iter {
            out.insert(a, b, rule);
        }
        out
    }
}

/// Push contribution for `first` along a custom axis; `second` gets the negation.
pub fn custom_push(
    first: LatLon,
    distance_km: f64,
    min_distance_km: f64,
    rule: &CustomDirection,
) -> Offset {
    let angle = rule.angle_degrees.to_radians();
    let force = (min_distance_km - distance_km) / CUSTOM_FORCE_DIVISOR * rule.strength;
    Offset {
        lat: force * angle.cos() / KM_PER_DEGREE,
        lon: force * angle.sin() / (KM_PER_DEGREE * first.lat.to_radians().cos()),
    }
}

/// Push contribution for `first` directly away from `second`; `second` gets
/// the negation.
pub fn default_push(
    first: LatLon,
    second: LatLon,
    distance_km: f64,
    min_distance_km: f64,
    div_factor: f64,
) -> Offset {
    let dx = second.lon - first.lon;
    let dy = second.lat - first.lat;
    let magnitude = (dx * dx + dy * dy).sqrt().max(MIN_DIRECTION_MAGNITUDE);
    let dx = dx / magnitude;
    let dy = dy / magnitude;

    let force = (min_distance_km - distance_km) / div_factor;
    Offset {
        lat: -dy * force,
        lon: -dx * force,
    }
}

/// Compute per-point rendering offsets.
///
/// Pairs are visited as `(i, j)` with `i < j` in input order, which fixes the
/// floating-point summation order. A duplicate name overwrites the earlier
/// coordinates but keeps the earlier slot. Points without a close neighbor
/// map to [`Offset::ZERO`].
pub fn compute_offsets(
    points: &[Point],
    params: &SeparationParams,
    rules: &CustomDirections,
) -> OffsetMap {
    let mut names: Vec<&str> = Vec::with_capacity(points.len());
    let mut coords: Vec<LatLon> = Vec::with_capacity(points.len());
    let mut slot_of: HashMap<&str, usize> = HashMap::with_capacity(points.len());
    for point in points {
        match slot_of.get(point.name.as_str()) {
            Some(&slot) => coords[slot] = point.position,
            None => {
                slot_of.insert(point.name.as_str(), names.len());
                names.push(point.name.as_str());
                coords.push(point.position);
            }
        }
    }

    let n = names.len();
    let mut acc = vec![Offset::ZERO; n];

    for _ in 0..params.iterations {
        for i in 0..n {
            for j in (i + 1)..n {
                let distance = haversine_km(coords[i], coords[j]);
                if distance >= params.min_distance_km {
                    continue;
                }

                let push = match rules.get(names[i], names[j]) {
                    Some(rule) => custom_push(coords[i], distance, params.min_distance_km, rule),
                    None => default_push(
                        coords[i],
                        coords[j],
                        distance,
                        params.min_distance_km,
                        params.div_factor,
                    ),
                };

                acc[i].lat += push.lat;
                acc[i].lon += push.lon;
                acc[j].lat -= push.lat;
                acc[j].lon -= push.lon;
            }
        }
    }

    names
        .into_iter()
        .zip(acc)
        .map(|(name, offset)| (name.to_string(), offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::EARTH_RADIUS_KM;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual} (diff: {diff})"
        );
    }

    /// Latitude span covering `km` along a meridian.
    fn degrees_for_km(km: f64) -> f64 {
        (km / EARTH_RADIUS_KM).to_degrees()
    }

    fn pair_on_meridian(km: f64) -> Vec<Point> {
        vec![
            Point::new("South", 40.0, -75.0),
            Point::new("North", 40.0 + degrees_for_km(km), -75.0),
        ]
    }

    fn params(iterations: u32) -> SeparationParams {
        SeparationParams {
            min_distance_km: 70.0,
            iterations,
            div_factor: 70.0,
        }
    }

    #[test]
    fn pair_key_is_order_independent() {
        assert_eq!(PairKey::new("A", "B"), PairKey::new("B", "A"));
        let key = PairKey::new("Jets", "Giants");
        assert_eq!(key.first(), "Giants");
        assert_eq!(key.second(), "Jets");
    }

    #[test]
    fn custom_rule_lookup_is_order_independent() {
        let rule = CustomDirection {
            angle_degrees: -60.0,
            strength: 15.0,
        };
        let rules: CustomDirections = [("New York Jets", "New York Giants", rule)]
            .into_iter()
            .collect();

        assert_eq!(rules.get("New York Jets", "New York Giants"), Some(&rule));
        assert_eq!(rules.get("New York Giants", "New York Jets"), Some(&rule));
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn distant_points_get_zero_offsets() {
        let offsets = compute_offsets(&pair_on_meridian(100.0), &params(1), &CustomDirections::new());
        assert_eq!(offsets.len(), 2);
        assert!(offsets.values().all(Offset::is_zero));
    }

    #[test]
    fn all_pairs_above_threshold_is_noop() {
        let points = vec![
            Point::new("Seattle", 47.5952, -122.3316),
            Point::new("Miami", 25.9580, -80.2389),
            Point::new("Green Bay", 44.5013, -88.0622),
        ];
        let offsets = compute_offsets(&points, &params(5), &CustomDirections::new());
        assert!(offsets.values().all(Offset::is_zero));
    }

    #[test]
    fn close_pair_is_pushed_apart_along_connecting_line() {
        let points = pair_on_meridian(50.0);
        let distance = haversine_km(points[0].position, points[1].position);
        assert!((distance - 50.0).abs() < 1e-6);

        let offsets = compute_offsets(&points, &params(1), &CustomDirections::new());
        let expected = (70.0 - distance) / 70.0;
        assert!((expected - 0.2857).abs() < 1e-4);

        let south = offsets["South"];
        let north = offsets["North"];
        assert_close(south.lat, -expected);
        assert_close(south.lon, 0.0);
        assert_close(north.lat, expected);
        assert_close(north.lon, 0.0);
        assert_close(south.magnitude(), expected);
        assert_close(north.magnitude(), expected);
    }

    #[test]
    fn default_push_contributions_are_opposite() {
        let a = LatLon::new(40.7, -74.0);
        let b = LatLon::new(40.9, -74.3);
        let d = haversine_km(a, b);
        let from_a = default_push(a, b, d, 70.0, 70.0);
        let from_b = default_push(b, a, d, 70.0, 70.0);
        assert_close(from_a.lat, -from_b.lat);
        assert_close(from_a.lon, -from_b.lon);

        let offsets = compute_offsets(
            &[Point::new("A", a.lat, a.lon), Point::new("B", b.lat, b.lon)],
            &params(1),
            &CustomDirections::new(),
        );
        assert_eq!(offsets["A"].lat, -offsets["B"].lat);
        assert_eq!(offsets["A"].lon, -offsets["B"].lon);
    }

    #[test]
    fn custom_rule_applies_angle_and_strength() {
        let points = pair_on_meridian(60.0);
        let distance = haversine_km(points[0].position, points[1].position);
        let rule = CustomDirection {
            angle_degrees: -60.0,
            strength: 15.0,
        };
        let rules: CustomDirections = [("South", "North", rule)].into_iter().collect();

        let offsets = compute_offsets(&points, &params(1), &rules);

        let force = (70.0 - distance) / 20.0 * 15.0;
        assert!((force - 7.5).abs() < 1e-6);
        let angle = (-60f64).to_radians();
        let lat_offset = force * angle.cos() / 111.0;
        let lon_offset = force * angle.sin() / (111.0 * 40f64.to_radians().cos());

        assert_eq!(offsets["South"].lat, lat_offset);
        assert_eq!(offsets["South"].lon, lon_offset);
        assert_eq!(offsets["North"].lat, -lat_offset);
        assert_eq!(offsets["North"].lon, -lon_offset);
    }

    #[test]
    fn custom_rule_direction_follows_iteration_order() {
        let rule = CustomDirection {
            angle_degrees: 90.0,
            strength: 10.0,
        };
        let rules: CustomDirections = [("South", "North", rule)].into_iter().collect();
        let mut points = pair_on_meridian(30.0);
        points.reverse();

        let offsets = compute_offsets(&points, &params(1), &rules);

        // "North" comes first now, so it takes the eastward push.
        assert!(offsets["North"].lon > 0.0);
        assert!(offsets["South"].lon < 0.0);
        assert_eq!(offsets["North"].lon, -offsets["South"].lon);
    }

    #[test]
    fn offsets_accumulate_across_iterations() {
        let points = pair_on_meridian(40.0);
        let once = compute_offsets(&points, &params(1), &CustomDirections::new());
        let twice = compute_offsets(&points, &params(2), &CustomDirections::new());

        assert_eq!(twice["South"].lat, 2.0 * once["South"].lat);
        assert_eq!(twice["North"].lat, 2.0 * once["North"].lat);
    }

    #[test]
    fn coincident_points_do_not_produce_nan() {
        let points = vec![Point::new("A", 39.0, -94.0), Point::new("B", 39.0, -94.0)];
        let offsets = compute_offsets(&points, &params(3), &CustomDirections::new());
        for offset in offsets.values() {
            assert!(offset.lat.is_finite());
            assert!(offset.lon.is_finite());
        }
        assert!(offsets.values().all(Offset::is_zero));
    }

    #[test]
    fn duplicate_names_keep_last_coordinates() {
        let points = vec![
            Point::new("A", 40.0, -75.0),
            Point::new("B", 10.0, 10.0),
            Point::new("A", 10.0, 10.1),
        ];
        let offsets = compute_offsets(&points, &params(1), &CustomDirections::new());
        assert_eq!(offsets.len(), 2);
        // A now sits just east of B, so both are pushed.
        assert!(offsets["A"].lon > 0.0);
        assert!(offsets["B"].lon < 0.0);
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let points = vec![
            Point::new("New York Giants", 40.8135, -74.0745),
            Point::new("New York Jets", 40.8135, -74.0745),
            Point::new("Philadelphia Eagles", 39.9008, -75.1675),
            Point::new("Baltimore Ravens", 39.2780, -76.6227),
            Point::new("Washington Commanders", 38.9078, -76.8645),
        ];
        let rules: CustomDirections = [(
            "New York Jets",
            "New York Giants",
            CustomDirection {
                angle_degrees: -60.0,
                strength: 15.0,
            },
        )]
        .into_iter()
        .collect();

        let first = compute_offsets(&points, &SeparationParams::default(), &rules);
        let second = compute_offsets(&points, &SeparationParams::default(), &rules);
        assert_eq!(first, second);
    }
}
