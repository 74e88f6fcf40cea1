//! Stores: action targets and listener registries.
//!
//! Contents:
//! - [`Registry`]: ordered set of stores receiving dispatched actions;
//! - [`Storer`]: trait every concrete store implements (`on_dispatch` + embedded [`Store`]);
//! - [`Store`]: embeddable listener registry and event emitter.
//!
//! Both registries share one identity-keyed member set (`members`): an `Arc`
//! allocation address is the identity, insertion order is iteration order.

mod members;
mod registry;
#[allow(clippy::module_inception)]
mod store;
mod storer;

pub use registry::Registry;
pub use store::Store;
pub use storer::Storer;
