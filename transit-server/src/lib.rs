//! Suburban rail journey planner server.
//!
//! Models the Mumbai suburban network as a weighted graph and answers:
//! "how do I get from this station to that one?", with fastest,
//! fewest-transfers and cheapest options.

pub mod cache;
pub mod domain;
pub mod network;
pub mod planner;
pub mod stations;
pub mod timetable;
pub mod web;
