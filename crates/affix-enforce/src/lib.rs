//! Rule engine for affix naming checks.
//!
//! Evaluates type declarations from compiled metadata and produces findings:
//! - N001: interface name lacks the `I` + uppercase prefix (Critical)
//! - N002: type name carries the Hungarian `C` prefix (Medium)
//! - N003: generic parameter is neither a single uppercase letter nor `T`-prefixed (High)

pub mod types;
pub mod rule;
pub mod prefix;
pub mod registry;
pub mod suppress;
pub mod runner;
