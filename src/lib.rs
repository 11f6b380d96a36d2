//! capital-gains - capital gains tax calculator
//!
//! This library replays sequences of stock buy/sell orders and computes the
//! tax owed on each sale, using the weighted average purchase price as cost
//! basis and carrying losses forward to offset later gains.

pub mod cli;
pub mod config;
pub mod error;
pub mod importers;
pub mod tax;
pub mod ui;
pub mod utils;
