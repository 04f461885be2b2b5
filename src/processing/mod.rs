//! Topology resolution logic.
//!
//! This module contains the resolution pipeline, data flowing strictly
//! forward through it:
//! - [`allocate`] - partition the VPC block into subnet CIDR pairs
//! - [`bind`] - bind pairs to availability zones
//! - [`tags`] - compose Kubernetes discovery tags
//! - [`resolve`] - orchestrate the pass and validate the result

mod allocate;
mod bind;
mod resolve;
mod tags;

// Re-export public functions
pub use allocate::allocate;
pub use bind::bind;
pub use resolve::resolve;
pub use tags::{
    compose, ResourceRole, CLUSTER_TAG_PREFIX, CLUSTER_TAG_SHARED, ELB_ROLE_TAG,
    INTERNAL_ELB_ROLE_TAG,
};
