//! rubixscan - explorer for the Rubix network.
//!
//! Classifies free-text searches into explorer routes, keeps a bounded
//! search history, and looks identifiers up through the explorer API.

pub mod client;
pub mod constants;
pub mod domain;
pub mod state;

#[cfg(test)]
mod test_utils;
