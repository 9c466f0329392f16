//! estate-luxe: Deterministic property valuation and projection engine
//!
//! This library provides the core components for:
//! - Current value and price range estimation from property attributes
//! - Suggested average/luxury pricing bands per country
//! - Deterministic historical price series (sine wobble, seed-free)
//! - Forward price projections with scenario modifiers and CAGR
//! - Country/currency profiles with USD conversion and display formatting
//! - Thin client for the external price-prediction endpoint
//! - Key-value persistence for preferences, sessions, and saved records
//! - Credential store and session management (hashed, never plaintext)
//! - Market insights with an injectable daily-seeded random source
//! - Investment calculator (mortgage, cash flow, cap rate)

pub mod auth;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod country;
pub mod insights;
pub mod predict;
pub mod routes;
pub mod store;
pub mod telemetry;
pub mod valuation;
