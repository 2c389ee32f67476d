//! Spelled-out Brazilian Portuguese numbers and areas
//!
//! This crate converts plain integers and area measurements in square meters
//! and square centimeters into their written-out Brazilian Portuguese form,
//! as required by deeds, lot descriptions and other real-estate documents
//! ("1207,35" becomes "um mil e duzentos e sete metros quadrados, três mil e
//! quinhentos centímetros quadrados").
//!
//! Every public operation is a total function: non-numeric input collapses to
//! zero and malformed formatted strings pass through unchanged, so document
//! generators never have to handle an error from this library.

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod area;
pub mod grouping;
pub mod lexicon;
pub mod normalize;
pub mod spelling;
pub mod value;

// Re-export main types
pub use area::{spell_full_area, spell_square_centimeters, spell_square_meters, AreaBreakdown};
pub use grouping::{magnitude_groups, MagnitudeGroup};
pub use lexicon::Gender;
pub use normalize::strip_number_formatting;
pub use spelling::{spell_cardinal, spell_number};
pub use value::{Value, ValueError, ValueResult};

// Re-export for convenience
pub use rust_decimal::Decimal;
