//! Himalayan shuttle booking server.
//!
//! Search for shuttles between hill stations, pick an offer, confirm with
//! passenger details, and get AI travel ideas along the way.

pub mod ai;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod search;
pub mod service;
pub mod session;
pub mod web;
pub mod workflow;
