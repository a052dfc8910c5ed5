// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;

pub mod csv;
pub mod error;
pub mod runner;
pub mod scrape;
