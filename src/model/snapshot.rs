//! PhysicalSnapshot — one immutable materialized view of the physical model.

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use serde::Serialize;
use smallvec::SmallVec;

use crate::{Error, Result};
use super::{Bond, Component, ComponentId};

/// The aggregate produced by the quantity mapper for one analysis run:
/// a set of components (identifiers unique) and the bonds referencing them.
///
/// Invariant: every bond endpoint exists in the component table — enforced
/// at construction, relied upon by every predictor. Snapshots are read-only
/// after construction, so predictions and simulations may run concurrently
/// over the same snapshot without coordination.
#[derive(Debug, Clone, Serialize)]
pub struct PhysicalSnapshot {
    components: HashMap<ComponentId, Component>,
    bonds: Vec<Bond>,
    /// component → indices into `bonds`, both directions.
    #[serde(skip)]
    adjacency: HashMap<ComponentId, SmallVec<[usize; 4]>>,
}

impl PhysicalSnapshot {
    /// Assemble a snapshot, rejecting bonds that reference components
    /// absent from the component set.
    pub fn new(components: Vec<Component>, bonds: Vec<Bond>) -> Result<Self> {
        let mut table = HashMap::with_capacity(components.len());
        for component in components {
            table.insert(component.id.clone(), component);
        }

        for bond in &bonds {
            for end in [&bond.a, &bond.b] {
                if !table.contains_key(end) {
                    return Err(Error::MalformedTopology(format!(
                        "bond {} <-> {} references component '{end}' absent from the snapshot",
                        bond.a, bond.b,
                    )));
                }
            }
        }

        let mut adjacency: HashMap<ComponentId, SmallVec<[usize; 4]>> = HashMap::new();
        for (idx, bond) in bonds.iter().enumerate() {
            adjacency.entry(bond.a.clone()).or_default().push(idx);
            if bond.b != bond.a {
                adjacency.entry(bond.b.clone()).or_default().push(idx);
            }
        }

        Ok(Self { components: table, bonds, adjacency })
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn contains(&self, id: &ComponentId) -> bool {
        self.components.contains_key(id)
    }

    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.components.get(id)
    }

    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Bonds incident to the given component, with the far endpoint.
    pub fn neighbors<'a>(
        &'a self,
        id: &'a ComponentId,
    ) -> impl Iterator<Item = (&'a ComponentId, &'a Bond)> + 'a {
        self.adjacency
            .get(id)
            .into_iter()
            .flatten()
            .filter_map(move |&idx| {
                let bond = &self.bonds[idx];
                bond.other_end(id).map(|other| (other, bond))
            })
    }

    /// Shortest hop count between two components over the bond graph (BFS).
    ///
    /// Returns `Some(0)` when the endpoints are the same component and
    /// `None` when no path exists. This is the architectural distance `r`
    /// used by the gravitational coupling predictor.
    pub fn architectural_hops(
        &self,
        from: &ComponentId,
        to: &ComponentId,
    ) -> Result<Option<usize>> {
        for end in [from, to] {
            if !self.contains(end) {
                return Err(Error::UnknownComponent(end.clone()));
            }
        }
        if from == to {
            return Ok(Some(0));
        }

        let mut visited: HashSet<&ComponentId> = HashSet::new();
        visited.insert(from);
        let mut queue: VecDeque<(&ComponentId, usize)> = VecDeque::new();
        queue.push_back((from, 0));

        while let Some((current, hops)) = queue.pop_front() {
            for (neighbor, _) in self.neighbors(current) {
                if neighbor == to {
                    return Ok(Some(hops + 1));
                }
                if visited.insert(neighbor) {
                    queue.push_back((neighbor, hops + 1));
                }
            }
        }

        Ok(None)
    }
}
