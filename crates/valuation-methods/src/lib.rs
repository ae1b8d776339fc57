//! The six valuation method calculators.
//!
//! Each module exposes a pure `calculate` function from the normalized inputs
//! (plus an injected market sample for the two market-based methods) to a
//! [`valuation_core::MethodResult`]. Calculators share no state and each
//! detects its own degenerate case: either a documented low-confidence result
//! or a `MethodUnavailable` error the aggregator excludes.

pub mod asset_based;
pub mod comparable;
pub mod dcf;
pub mod ebitda;
pub mod precedent;
pub mod revenue;

pub(crate) mod market_sample;
pub(crate) mod multiple_band;
