//! # ChatRS Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the engine and the
//! command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the application `Result` alias
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ChatrsError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
