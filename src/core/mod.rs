//! # Core Application Logic
//!
//! This module contains the coin catalog's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • CollectionStore      │
//!                    │  • entities + catalog   │
//!                    │  • persistence          │
//!                    │  • derived stats        │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    CLI     │      │    TUI     │      │    GUI     │
//!     │  Adapter   │      │  (future)  │      │  (future)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`coin`]: the entity and its persisted wire shape
//! - [`catalog`]: the built-in reference list
//! - [`storage`]: JSON persistence under two fixed keys
//! - [`store`]: authoritative state, operations, derived statistics
//! - [`achievements`]: milestone evaluation
//! - [`input`]: the add-coin form boundary
//! - [`config`]: settings file + env overrides

pub mod achievements;
pub mod catalog;
pub mod coin;
pub mod config;
pub mod input;
pub mod storage;
pub mod store;
