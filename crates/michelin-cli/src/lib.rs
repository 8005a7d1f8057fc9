//! michelin-cli
//! ============
//!
//! Command-line interface for the `michelin-core` crate.
//!
//! This crate primarily provides a binary (`michelin`). The library target
//! only carries this overview.
//!
//! Basic usage:
//!
//! ```text
//! michelin --help
//! michelin match "saint tropez"
//! michelin --json match "Lyon, 69001"
//! michelin rank --granularity department --stars 3 --top 3
//! michelin explore --search Nice --toggle bib
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
