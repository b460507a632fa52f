//! Netcheck: bring-up diagnostic harness
//!
//! A library for verifying the network and removable-storage bring-up of
//! a network-attached embedded compute module: wired-link gating, adapter
//! inventory, a single bounded HTTP round-trip, and a marker-file probe.

pub mod config;
pub mod fetch;
pub mod network;
pub mod storage;
pub mod time;
