//! # srim-rs Core Library
//!
//! A library for generating the input files of SRIM/TRIM ion-beam simulations:
//! the transport of energetic ions through layered solid and gaseous targets.
//!
//! ## Architectural Philosophy
//!
//! The TRIM engine is driven entirely through fixed-format text files placed in its
//! working directory. This library owns exactly that boundary: it models a complete
//! run description in memory and serializes it, bit-exactly, into the files the
//! engine consumes. Everything else (launching the engine, collecting its outputs)
//! belongs to the caller.
//!
//! - **[`core::models`]: The Run Description.** Strongly-typed, read-only data for
//!   the ion beam, the layered target stack, and every run-level option the engine
//!   recognizes. Element ordering inside a layer is fixed at construction, which is
//!   what keeps the column layout of the generated file consistent.
//!
//! - **[`core::io`]: The Writers.** One writer per engine input file (`TRIM.IN`,
//!   `TRIMAUTO`), sharing a single write-only trait. The main writer is a
//!   deterministic mapping from the run description to a positionally-sensitive
//!   multi-line layout; invoking it twice on the same description produces
//!   byte-identical files.
//!
//! - **[`core::utils`]: Reference Data.** A static periodic table backing the
//!   symbol-based constructors of the data model.

pub mod core;
