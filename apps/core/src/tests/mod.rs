//! Test Module
//!
//! Cross-module test suite for the sentiment scorer.
//!
//! ## Test Categories
//! - `scorer_tests`: pipeline properties, neutrality, classification, reports
//! - `loader_tests`: merging text and JSON dictionaries
//! - `config_tests`: JSON and environment configuration
//! - `concurrency_tests`: sharing a configured scorer across threads

pub mod config_tests;
