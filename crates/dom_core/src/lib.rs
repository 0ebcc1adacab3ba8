//! # dom_core
//!
//! UI-agnostic document access layer for the site behavior managers.
//!
//! This crate provides the building blocks the menu and sticky controllers
//! operate against:
//! - [`NodeId`]: a generic, opaque identifier for a document element
//! - [`Document`]: the minimal lookup/mutation capability the managers need
//! - [`DomStore`]: an in-memory implementation for tests, demos, and
//!   embeddings that mirror a host document
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any browser or DOM binding
//! - Any graphics or windowing framework
//! - Platform-specific APIs
//!
//! It depends only on `std` and provides pure document semantics that can be
//! tested independently and reused across different host integrations.
//!
//! ## Integration
//!
//! Hosts with a real document implement [`Document`] over it, or mirror the
//! relevant elements into a [`DomStore`] and copy class changes back after
//! each event. Lookup failures are explicit: [`Document::element_by_id`]
//! returns an `Option` so callers decide whether a missing element is a
//! skip (menus) or an error (sticky binding).

mod id;
mod store;
mod traits;

pub use id::NodeId;
pub use store::DomStore;
pub use traits::Document;

#[cfg(any(test, feature = "dom-snapshot"))]
pub mod snapshot;
