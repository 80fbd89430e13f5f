//! diadanh-cli
//! ===========
//!
//! Command-line interface for the `diadanh-core` lookup engine over the
//! Vietnamese administrative-unit gazetteer.
//!
//! This crate primarily provides a binary (`diadanh`). The small library
//! target only exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install diadanh-cli
//! diadanh --help
//! diadanh search "o cho dua"
//! diadanh search lang --province "Hà Nội"
//! diadanh tree "Hà Nội" "Quận Đống Đa"
//! ```
//!
//! For programmatic access use the [`diadanh-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
