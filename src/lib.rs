#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A fixed-size line form whose draft is mirrored into a durable key-value
//! store after every edit.

pub mod config;
pub mod logging;
pub mod model;
pub mod session;
pub mod storage;
pub mod tui;
