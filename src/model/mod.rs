//! # Physical Model
//!
//! Clean DTOs that define the hive's physical view of an architecture.
//! These types cross every boundary: source ↔ mapper ↔ predictors ↔ caller.
//!
//! Design rule: NO adapter types, NO backend protocol details here.
//! This module is pure data — no I/O, no state, no async.

pub mod component;
pub mod bond;
pub mod snapshot;
pub mod event;

pub use component::{Component, ComponentId, PrimitiveKind};
pub use bond::{Bond, BondKey};
pub use snapshot::PhysicalSnapshot;
pub use event::GrowthEvent;
