//! provisioner-lib: Core types and logic for provisioner
//!
//! This crate provides the pieces behind the `prov` CLI:
//! - `Catalog`: the stacks, provisions and projects available for selection
//! - `ProvisioningStore`: the in-progress configuration and its change plan
//! - `SessionStore`: persistence of the store between invocations
//! - `Settings`: config file, environment and path resolution

pub mod catalog;
pub mod config;
pub mod consts;
pub mod plan;
pub mod platform;
pub mod session;
pub mod store;
