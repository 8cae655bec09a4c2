//! # maptree-core
//!
//! Deterministic inspection of generically-typed, dynamically-shaped
//! key/value trees — the kind produced by decoding XML or JSON into a
//! generic associative structure.
//!
//! The crate renders a tree into a human-readable indented string, in two
//! variants: typed mode annotates each scalar with its inferred type,
//! untyped mode shows bare `key :value` entries. Mapping keys are sorted at
//! every nesting level, so the same tree always renders to the same string
//! no matter how its maps iterate internally. This is a debugging aid, not
//! a serialization format; the output is not meant to round-trip.
//!
//! ## Quick start
//!
//! ```rust
//! use maptree_core::Map;
//!
//! let mut m = Map::new();
//! m.insert("name", "Alice");
//! m.insert("id", 7i64);
//! m.insert("ratio", 0.25);
//!
//! assert_eq!(
//!     m.string_indent(0),
//!     "id :[int] 7\nname :[string] Alice\nratio :[float64] 2.50e-01"
//! );
//! assert_eq!(
//!     m.string_indent_no_type_info(0),
//!     "id :7\nname :Alice\nratio :2.50e-01"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`render`] — the recursive indented printer over [`Value`] trees
//! - [`value`] — the [`Value`] node union and [`Opaque`] fallback wrapper
//! - [`map`] — [`Map`] allocation, JSON round-trip, and copy helpers
//! - [`error`] — error types for the serialization boundary

pub mod error;
pub mod map;
pub mod render;
pub mod value;

pub use error::TreeError;
pub use map::Map;
pub use render::render;
pub use value::{Opaque, Value};
