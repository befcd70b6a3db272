//! RetainAI - Customer Churn Risk Dashboard Core
//!
//! This crate implements the profile wizard and risk-simulation workflow behind
//! the RetainAI dashboard: collecting a customer profile, scoring it through an
//! external prediction service, and exploring what-if retention strategies
//! against the frozen baseline assessment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
