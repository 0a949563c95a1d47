//! International shipping quote engine.
//!
//! This crate computes the cost, GST and margin breakdown of an
//! international shipment at four fixed margin rates, reconciles service GST
//! against reclaimable vendor GST, and serves quotes over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
