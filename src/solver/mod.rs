//! The tree-walking agent
//!
//! All guessing intelligence lives in the precomputed decision tree; the
//! agent just walks it, scoring each node's guess against the target to
//! pick the next edge.

mod agent;

pub use agent::{Agent, SolveError, solve};
