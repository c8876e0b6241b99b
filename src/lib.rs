//! Accent-insensitive highlighting for select widgets.
//!
//! Text and search are compared after Unicode canonical decomposition with
//! combining marks removed, ignoring case. Every non-overlapping occurrence of
//! the search is located and the original text is cut into plain and
//! highlighted [`Segment`]s for the host UI to render.

pub mod config;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod normalize;
pub mod segment;

pub use config::FilterConfig;
pub use error::{HighlightError, Result};
pub use filter::{FilterState, ItemFilter, items_from_values};
pub use matcher::{Highlighter, MatchSpan, contains_normalized, find_matches};
pub use normalize::{escape_regex, normalize};
pub use segment::{Segment, build_segments, highlight};
