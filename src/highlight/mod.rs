//! Mention and URL highlighting.

mod extract;
pub mod segment;
pub mod url;

pub use extract::{SegmentExtractor, extract};
pub use segment::{Segment, SegmentKind, reconstruct, segment_at};
pub use url::{DEFAULT_URL_PATTERN, RegexUrlRule, UrlMatch, UrlRule};
