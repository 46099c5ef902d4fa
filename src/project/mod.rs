//! Project-descriptor handling.
//!
//! The only persisted format at the toolchain boundary: a flat JSON
//! record describing a project (name, version, kind, output path, build
//! flags, source files, dependencies). The surrounding project-management
//! CLI is external; this module owns just the read/write round trip.

pub mod config;
