/// Route module for registration paths
///
/// Contains pure functional components for path tokenizing and compilation:
/// - Pure functions (same input → same output)
/// - Pattern matching for control flow
/// - Compiled patterns expose their textual source for introspection

pub mod compile;
pub mod pattern;

// Re-export commonly used types
pub use compile::{
    compile_path, CompiledPattern, PatternError, PatternMatch, PatternOptions,
    SEGMENT_END_MARKER, TRAILING_SLASH_MARKER,
};
pub use pattern::{classify_segment, tokenize, PathToken};
