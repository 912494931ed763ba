//! `te-indicators` library crate.
//!
//! The binary (`indicators`) is a thin wrapper around this library so that the
//! scrape pipeline (parse -> match -> reconcile -> write) is testable without a
//! network or spawned processes.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod parse;
pub mod report;
pub mod resolve;
