//! Domain Layer
//!
//! Pure types and logic for live selector evaluation, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Document snapshots, diagnostics, evaluation outcomes
//! - `value_objects/` - Immutable value types (DocumentId, Range, ResolvedLink, SessionState)
//! - `services/` - Link extraction and diagnostic mapping
//! - `ports/` - Interface definitions for the editor, the grammar, and fetching
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
