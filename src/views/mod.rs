//! # Components
//!
//! Ready-made responsive components. Each one pairs a props struct
//! (deserializable from the JSON shape in [`config`](crate::config)) with an
//! override table over its own property enum, and renders a frame of
//! [`ResolvedStyle`](crate::style::ResolvedStyle)s.
//!
//! | component | responsive props | targets |
//! |---|---|---|
//! | [`LinkButton`] | [`LinkButtonProp`] | [`LinkButtonTarget`] |
//! | [`HeaderMobile`] | [`HeaderProp`] | [`HeaderTarget`] |
//! | [`PasswordInput`] | [`PasswordInputProp`] | [`PasswordTarget`] |

/// Generates builder setters for optional string props.
macro_rules! prop_setters {
    ($($(#[$meta:meta])* $field:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.props.$field = Some(value.into());
                self
            }
        )*
    };
}

/// Picks between an interaction variant and the resting value.
fn pick<'a>(
    active: bool,
    when_active: &'a Option<String>,
    otherwise: &'a Option<String>,
) -> Option<&'a str> {
    if active {
        when_active.as_deref()
    } else {
        otherwise.as_deref()
    }
}

mod header_mobile;
pub use header_mobile::*;

mod link_button;
pub use link_button::*;

mod password_input;
pub use password_input::*;
