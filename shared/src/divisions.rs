use std::collections::HashMap;

use crate::geo::LatLon;
use crate::team::Team;

/// Teams sharing a conference-qualified division, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Division {
    pub name: String,
    pub conference: String,
    pub members: Vec<String>,
}

/// Group teams by full division name. Divisions appear in the order their
/// first member appears in `teams`.
pub fn group_divisions(teams: &[Team]) -> Vec<Division> {
    let mut out: Vec<Division> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for team in teams {
        let name = team.full_division();
        match index.get(&name) {
            Some(&i) => out[i].members.push(team.name.clone()),
            None => {
                index.insert(name.clone(), out.len());
                out.push(Division {
                    name,
                    conference: team.conference.clone(),
                    members: vec![team.name.clone()],
                });
            }
        }
    }

    out
}

/// Connecting line for one division.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionPath {
    pub points: Vec<LatLon>,
    /// Ordered names that had no known position.
    pub missing: Vec<String>,
    /// Whether a configured order was used instead of input order.
    pub custom_order: bool,
}

impl DivisionPath {
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Build a division's line through `positions`.
///
/// A configured order may name any loaded team (not only division members)
/// and may repeat names. Without one, members are joined in input order.
pub fn resolve_path(
    division: &Division,
    orders: &HashMap<String, Vec<String>>,
    positions: &HashMap<String, LatLon>,
) -> DivisionPath {
    let mut points = Vec::new();
    let mut missing = Vec::new();

    let order = orders.get(&division.name).filter(|order| !order.is_empty());
    let names = order.unwrap_or(&division.members);

    for name in names {
        match positions.get(name) {
            Some(&p) => points.push(p),
            None => missing.push(name.clone()),
        }
    }

    DivisionPath {
        points,
        missing,
        custom_order: order.is_some(),
    }
}
