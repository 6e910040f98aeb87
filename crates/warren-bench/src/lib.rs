//! Benchmark-only crate; see `benches/` for the Criterion suites.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]
