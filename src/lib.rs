//! Echo - Anonymous mood check-in
//!
//! This crate implements the check-in lifecycle (mood, intensity, journal,
//! tags), guided reflections, and the weekly dashboard with its insight.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
