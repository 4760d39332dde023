/// Parser state and entry points.
///
/// Holds the single lookahead token, implements `eat`, and exposes the
/// top-level parsing and evaluation entry points.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence tiers: `expression` for `+`
/// and `-`, `term` for `*` and `/`.
pub mod binary;

/// Factor parsing.
///
/// Parses the smallest evaluable units: number literals and parenthesized
/// sub-expressions.
pub mod factor;
