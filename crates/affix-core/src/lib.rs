//! Core types, manifest loading, and configuration for affix.
//!
//! This crate provides the foundational data structures used across all affix crates:
//! - [`types`] — Type and generic-parameter descriptors, findings, severity and error types
//! - [`manifest`] — The [`MetadataProvider`](manifest::MetadataProvider) trait and the JSON manifest loader
//! - [`config`] — Configuration loading from `.affix/affix.json`

pub mod config;
pub mod manifest;
pub mod types;
