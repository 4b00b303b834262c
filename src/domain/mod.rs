//! Domain Layer - Typed values for the pairs trading study
//!
//! Pure domain types with no external dependencies beyond serde. All
//! validation happens at construction; a value that exists is well-formed.

pub mod pair;

pub use pair::{CurrencyPair, PairError};
