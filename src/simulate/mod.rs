//! # Stability Path Simulation
//!
//! Searches the snapshot for the chain of components whose *weakest link*
//! is as favorable as possible. Favorability follows the force convention:
//! numerically smaller force means more attractive, so a path's bottleneck
//! is the largest force along it and the search minimizes that bottleneck.
//! This is a maximin (widest-path) optimization, not a sum-minimizing
//! shortest path — one destabilizing bond anywhere in a chain dominates
//! the whole workflow.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::{HashMap, HashSet};
use tracing::debug;

use crate::constants::PhysicalConstants;
use crate::model::{ComponentId, PhysicalSnapshot};
use crate::predict;
use crate::{Error, Result};

/// The discovered chain and the force on its weakest link.
#[derive(Debug, Clone, PartialEq)]
pub struct StablePath {
    /// Components in traversal order, starting at the requested component.
    pub components: Vec<ComponentId>,
    /// Force on the least-favorable bond along the path; `None` for the
    /// trivial single-component path.
    pub bottleneck: Option<f64>,
}

impl StablePath {
    /// Number of bonds traversed.
    pub fn hops(&self) -> usize {
        self.components.len().saturating_sub(1)
    }
}

/// Frontier entry. Ordered so the heap pops the best candidate first:
/// smallest bottleneck force, then most hops, then smallest identifier.
struct Candidate {
    bottleneck: f64,
    hops: usize,
    id: ComponentId,
    parent: Option<ComponentId>,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .bottleneck
            .total_cmp(&self.bottleneck)
            .then_with(|| self.hops.cmp(&other.hops))
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Find the most stable chain of distinct components reachable from
/// `start`, connected by bonds in the snapshot.
///
/// Forces come from the electromagnetic predictor, so this fails with
/// `MissingConstant` under the same conditions. Bonds are traversable in
/// both directions; already-visited components are never re-expanded, so
/// the search terminates on any finite graph, cyclic or not.
///
/// When `start` has no usable bonds the result is the single-element path.
/// When `start` is absent from the snapshot the call fails with
/// `UnknownComponent`.
pub fn find_most_stable_path(
    snapshot: &PhysicalSnapshot,
    constants: &PhysicalConstants,
    start: &ComponentId,
) -> Result<StablePath> {
    if !snapshot.contains(start) {
        return Err(Error::UnknownComponent(start.clone()));
    }

    let report = predict::predict(snapshot, constants)?;

    let mut heap = BinaryHeap::new();
    heap.push(Candidate {
        bottleneck: f64::NEG_INFINITY,
        hops: 0,
        id: start.clone(),
        parent: None,
    });

    let mut visited: HashSet<ComponentId> = HashSet::new();
    // id → (bottleneck, hops) at the moment the component was settled.
    let mut settled: HashMap<ComponentId, (f64, usize)> = HashMap::new();
    let mut parents: HashMap<ComponentId, ComponentId> = HashMap::new();

    while let Some(candidate) = heap.pop() {
        if !visited.insert(candidate.id.clone()) {
            continue;
        }
        settled.insert(candidate.id.clone(), (candidate.bottleneck, candidate.hops));
        if let Some(parent) = candidate.parent {
            parents.insert(candidate.id.clone(), parent);
        }

        for (neighbor, bond) in snapshot.neighbors(&candidate.id) {
            if visited.contains(neighbor) {
                continue;
            }
            // Bonds the predictor skipped carry no force and are not edges.
            let Some(force) = report.forces.get(&bond.key()) else {
                continue;
            };
            heap.push(Candidate {
                bottleneck: candidate.bottleneck.max(*force),
                hops: candidate.hops + 1,
                id: neighbor.clone(),
                parent: Some(candidate.id.clone()),
            });
        }
    }

    // Pick the settled component with the best bottleneck; ties prefer the
    // longer chain, then the lexicographically smaller identifier.
    let mut champion: Option<(&ComponentId, f64, usize)> = None;
    for (id, &(bottleneck, hops)) in &settled {
        if id == start {
            continue;
        }
        let better = match champion {
            None => true,
            Some((best_id, best_bottleneck, best_hops)) => {
                match bottleneck.total_cmp(&best_bottleneck) {
                    Ordering::Less => true,
                    Ordering::Greater => false,
                    Ordering::Equal => hops > best_hops || (hops == best_hops && id < best_id),
                }
            }
        };
        if better {
            champion = Some((id, bottleneck, hops));
        }
    }

    let Some((target, bottleneck, hops)) = champion else {
        return Ok(StablePath { components: vec![start.clone()], bottleneck: None });
    };

    let mut components = vec![target.clone()];
    let mut cursor = target;
    while let Some(parent) = parents.get(cursor) {
        components.push(parent.clone());
        cursor = parent;
    }
    components.reverse();

    debug!(%target, bottleneck, hops, "discovered most stable path");
    Ok(StablePath { components, bottleneck: Some(bottleneck) })
}
