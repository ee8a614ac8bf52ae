//! Sendero - Process mining for CSV event logs
//!
//! This library provides the core functionality for discovering a process
//! model from a flat event log: schema validation, per-case sequencing,
//! directly-follows graph construction, start/end boundary detection and
//! mean dwell-time bottleneck ranking.

pub mod boundary;
pub mod bottleneck;
pub mod cli;
pub mod csv_input;
pub mod csv_output;
pub mod dfg;
pub mod event;
pub mod json_output;
pub mod pipeline;
pub mod sample;
pub mod sequence;
pub mod text_output;
pub mod validate;
