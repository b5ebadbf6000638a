//! Presentational building blocks shared by the generated pages.
//!
//! Everything here is a pure function of its arguments and returns
//! [`maud::Markup`]; nothing touches the filesystem or global state.

mod feature_highlight;
pub mod icons;

pub use feature_highlight::FeatureHighlight;
