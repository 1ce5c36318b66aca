//! Streaming resolver for seed almanacs.
//!
//! An almanac lists seed numbers followed by a chain of stages, each a set
//! of `destination source length` range rules. [`min_location`] pushes every
//! seed through all stages in a single pass over the text and returns the
//! lowest final value.
//!
//! ```
//! let input = "seeds: 10 5\n\nseed-to-soil map:\n100 10 1\n";
//! assert_eq!(almanac::min_location(input.as_bytes()).unwrap(), 5);
//! ```

pub mod config;
pub mod error;
pub mod io_utils;
pub mod reference;
pub mod resolver;
pub mod rule;
pub mod value_set;

pub use config::ResolverConfig;
pub use error::AlmanacError;
pub use io_utils::resolve_path;
pub use reference::{Almanac, Stage};
pub use resolver::{min_location, resolve, Phase, ResolveStats, Resolution, Resolver};
pub use rule::MappingRule;
pub use value_set::ValueSet;
