//! Integration tests for the processor module
//!
//! Tests instrument aggregation over temporary directories of ICARTT files.

pub mod basic_processing;
