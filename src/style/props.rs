//! Responsive property keys.
//!
//! Every component declares the closed set of property names its override
//! table accepts with [`responsive_props!`]. The generated enum serializes
//! with the camelCase names used in override tables (`fontSize`,
//! `burgerLineHeight`, ...).

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};

/// A property that can be overridden per size label.
pub trait StyleProp: Copy + Eq + Hash + Debug + 'static {
    /// Name of the component owning this property set, for error messages.
    const COMPONENT: &'static str;
    /// Every legal property, in declaration order.
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn parse(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|prop| prop.name() == name)
            .ok_or_else(|| Error::UnknownProperty {
                component: Self::COMPONENT,
                name: name.to_string(),
            })
    }
}

/// Declares a component's responsive property enum.
///
/// ```rust,ignore
/// responsive_props! {
///     pub ButtonProp for "Button" {
///         Width = "width",
///         FontSize = "fontSize",
///     }
/// }
/// ```
macro_rules! responsive_props {
    (
        $(#[$meta:meta])* $v:vis $name:ident for $component:literal {
            $($(#[$vmeta:meta])* $variant:ident = $key:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        $v enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $key)]
                $variant,
            )*
        }

        impl $crate::style::StyleProp for $name {
            const COMPONENT: &'static str = $component;
            const ALL: &'static [Self] = &[$($name::$variant),*];

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)*
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                <Self as $crate::style::StyleProp>::parse(s)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::style::StyleProp::name(*self))
            }
        }
    };
}

pub(crate) use responsive_props;
