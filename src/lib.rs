//! VeriPost - client for a human-verified content sharing service
//!
//! The server screens every submission for machine-generated content
//! before accepting it. This crate implements the authenticated client
//! side: a credential interceptor that keeps requests authorized across
//! token expiry, and a submission coordinator that turns the multi-step
//! upload-and-verdict interaction into a single idempotent user action.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
