//! Security Expert - Interactive Security Analysis Service
//!
//! This crate implements a fixed five-question technology-stack interview
//! and turns completed transcripts into AI-generated security reports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
