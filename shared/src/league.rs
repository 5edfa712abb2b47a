//! Hand-tuned league tables: separation overrides and division draw orders.

use std::collections::HashMap;

use crate::offsets::{CustomDirection, CustomDirections};

/// `(team, team, angle in degrees, strength)`. Whichever team of a pair is
/// loaded first is pushed along the angle, the other one opposite to it.
pub const CUSTOM_SEPARATIONS: [(&str, &str, f64, f64); 3] = [
    ("New York Jets", "New York Giants", -60.0, 15.0),
    ("Washington Commanders", "Baltimore Ravens", -60.0, 50.0),
    ("Los Angeles Rams", "Los Angeles Chargers", 60.0, 15.0),
];

/// Polyline draw order per division. Repeated names draw branches back
/// through a hub team.
pub const DIVISION_ORDERS: [(&str, &[&str]); 8] = [
    (
        "AFC East",
        &[
            "Miami Dolphins",
            "New England Patriots",
            "New York Jets",
            "Buffalo Bills",
        ],
    ),
    (
        "NFC East",
        &[
            "Dallas Cowboys",
            "Washington Commanders",
            "Philadelphia Eagles",
            "New York Giants",
        ],
    ),
    (
        "AFC North",
        &[
            "Baltimore Ravens",
            "Pittsburgh Steelers",
            "Cincinnati Bengals",
            "Pittsburgh Steelers",
            "Cleveland Browns",
        ],
    ),
    (
        "NFC North",
        &[
            "Minnesota Vikings",
            "Green Bay Packers",
            "Chicago Bears",
            "Detroit Lions",
        ],
    ),
    (
        "AFC South",
        &[
            "Houston Texans",
            "Tennessee Titans",
            "Indianapolis Colts",
            "Jacksonville Jaguars",
        ],
    ),
    (
        "NFC South",
        &[
            "Atlanta Falcons",
            "Carolina Panthers",
            "Atlanta Falcons",
            "New Orleans Saints",
            "Atlanta Falcons",
            "Tampa Bay Buccaneers",
        ],
    ),
    (
        "AFC West",
        &[
            "Kansas City Chiefs",
            "Denver Broncos",
            "Las Vegas Raiders",
            "Los Angeles Chargers",
        ],
    ),
    (
        "NFC West",
        &[
            "Arizona Cardinals",
            "Los Angeles Rams",
            "San Francisco 49ers",
            "Seattle Seahawks",
        ],
    ),
];

pub fn custom_directions() -> CustomDirections {
    CUSTOM_SEPARATIONS
        .iter()
        .map(|&(a, b, angle_degrees, strength)| {
            (
                a,
                b,
                CustomDirection {
                    angle_degrees,
                    strength,
                },
            )
        })
        .collect()
}

pub fn division_orders() -> HashMap<String, Vec<String>> {
    DIVISION_ORDERS
        .iter()
        .map(|(division, teams)| {
            (
                division.to_string(),
                teams.iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_separation_is_registered() {
        let rules = custom_directions();
        assert_eq!(rules.len(), CUSTOM_SEPARATIONS.len());
        let ravens = rules
            .get("Baltimore Ravens", "Washington Commanders")
            .copied();
        assert_eq!(
            ravens,
            Some(CustomDirection {
                angle_degrees: -60.0,
                strength: 50.0,
            })
        );
    }

    #[test]
    fn division_orders_cover_all_eight_divisions() {
        let orders = division_orders();
        assert_eq!(orders.len(), 8);
        assert_eq!(orders["NFC South"].len(), 6);
        assert_eq!(orders["AFC North"][1], "Pittsburgh Steelers");
    }
}
