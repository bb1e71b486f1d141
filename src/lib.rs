//! polyquery - Load polygon records and answer area, extremum, count and frame queries

pub mod commands;
pub mod config;
pub mod domain;
pub mod geometry;
pub mod output;
pub mod parser;
pub mod session;
