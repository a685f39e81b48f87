//! Helpers shared by engine components, currently atom selection lookup.

pub mod query;
