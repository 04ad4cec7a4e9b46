//! Error type for the fallible edges of the crate.
//!
//! Classification and style resolution never fail. Errors only come from
//! turning outside data into typed values: parsing label or property names,
//! building a custom [`BreakpointTable`](crate::responsive::BreakpointTable),
//! and loading component props from JSON.

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown size label `{0}`")]
    UnknownSizeLabel(String),

    #[error("unknown responsive property `{name}` for {component}")]
    UnknownProperty {
        component: &'static str,
        name: String,
    },

    #[error("breakpoint table is empty")]
    EmptyBreakpointTable,

    #[error("breakpoint `{label}` has invalid minimum width {min_width}")]
    InvalidBreakpointWidth { label: &'static str, min_width: f64 },

    #[error("breakpoint `{label}` is out of order after `{previous}`")]
    UnorderedBreakpoint {
        label: &'static str,
        previous: &'static str,
    },

    #[error("invalid component configuration: {0}")]
    Config(#[from] serde_json::Error),
}
