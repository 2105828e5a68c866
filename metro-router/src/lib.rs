//! Metro route planner.
//!
//! Models a transit network as a weighted undirected graph and answers
//! shortest distance, shortest time and literal route queries between
//! stations, with interchange counts.

pub mod config;
pub mod directory;
pub mod domain;
pub mod graph;
pub mod heap;
pub mod network;
pub mod planner;
pub mod web;
