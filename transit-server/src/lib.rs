//! Transit route planner server.
//!
//! A web application that answers: "how do I travel between two stations
//! on this network, using at most one transfer?"

pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
