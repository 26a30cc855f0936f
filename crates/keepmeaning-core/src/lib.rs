//! Core library for keepmeaning.
//!
//! A local, network-free writing analysis engine. Two pure functions do the
//! work:
//!
//! - [`scan`] finds weasel words, passive constructions and overlong
//!   sentences, returning located [`Finding`]s
//! - [`compute_flow`] scores the buffer as a whole, returning a [`FlowReport`]
//!
//! Both accept any string and never fail.
//!
//! # Modules
//!
//! - [`lint`] - The lint engine and its configurable [`Linter`]
//! - [`flow`] - Flow score, secondary metrics and recommendations
//! - [`finding`] - Finding types
//! - [`text`] - Sentence segmentation and position helpers
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use keepmeaning_core::{compute_flow, scan};
//!
//! let text = "This is very good. The cake was baked by him.";
//! for finding in scan(text) {
//!     println!("{} {:?} {}", finding.span, finding.matched_text, finding.explanation);
//! }
//!
//! let report = compute_flow(text);
//! assert!(report.flow_score <= 100);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod finding;
pub mod flow;
pub mod lint;
pub mod markdown;
pub mod span;
pub mod text;
pub mod vocabulary;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

pub use config::{Config, ConfigLoader, ConfigSources, LintConfig, LogLevel};
pub use error::{ConfigError, ConfigResult, EngineError, EngineResult};
pub use finding::{Category, Finding, Origin, Rule, sort_by_position};
pub use flow::{
    FlowMetrics, FlowOptions, FlowReport, MetricsModel, Priority, Recommendation,
    RecommendationCategory, RecommendationPolicy, Trend, compute_flow, compute_flow_with,
};
pub use lint::{Linter, scan};
pub use span::Span;
