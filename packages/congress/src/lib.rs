//! LawChat Congress - bill identifier parsing and Congress.gov bill lookup.
//!
//! This crate turns free-text bill identifiers produced by a language model
//! into typed references and resolves them against the Congress.gov v3 API.
//!
//! # Example
//!
//! ```
//! use lawchat_congress::parse_bill_lookup;
//!
//! let lookup = parse_bill_lookup("hr.3076.117|s.1.118").unwrap();
//! assert_eq!(lookup.len(), 2);
//! assert_eq!(lookup.primary().unwrap().to_string(), "hr.3076.117");
//! ```
//!
//! # Architecture
//!
//! - [`bill_id`]: `BillReference` and the lookup response parser
//! - [`fetcher`]: the metadata → text versions → text content chain
//! - [`types`]: `LawDetails` and the Congress.gov response shapes
//! - [`http`]: HTTP client construction and JSON GET helper
//! - [`config`]: API configuration loaded from the environment
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod bill_id;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod types;

pub use bill_id::{parse_bill_lookup, BillLookup, BillReference};
pub use config::{CongressConfig, TEXT_NOT_AVAILABLE};
pub use error::{CongressError, Result};
pub use fetcher::CongressClient;
pub use types::LawDetails;
