//! # Service Layer
//!
//! The oracle client orchestrating submit, decode, and the polling loop.

pub mod client;

pub use client::OracleClient;
