//! Web-boundary helpers that are not HTTP handlers themselves.

pub mod trace_ctx;
