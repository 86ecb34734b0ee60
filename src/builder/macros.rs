//! Macros for ergonomic parameter declaration.

/// Declare an enum usable as an enum parameter value.
///
/// Generates the enum (deriving `Clone`, `Copy`, `PartialEq`, `Eq`, `Debug`)
/// and its [`ParamEnum`](crate::core::ParamEnum) implementation. Explicit
/// discriminants become ordinals, which makes flag-style enums work with the
/// `AND` operator.
///
/// # Example
///
/// ```
/// use animstate::core::{ParamEnum, Parameter, ParamValue, EnumValue};
/// use animstate::param_enum;
///
/// param_enum! {
///     pub enum Contact {
///         Air = 0,
///         Ground = 1,
///         Wall = 2,
///         Corner = 3,
///     }
/// }
///
/// assert_eq!(Contact::Corner.ordinal(), 3);
/// assert_eq!(Contact::Wall.label(), "Wall");
///
/// let contact = Parameter::enumeration("contact", Contact::Ground);
/// assert!(contact.logical_match(&ParamValue::Enum(EnumValue::of(Contact::Corner))));
/// ```
#[macro_export]
macro_rules! param_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $value:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $(= $value)?
            ),*
        }

        impl $crate::core::ParamEnum for $name {
            fn ordinal(&self) -> i64 {
                *self as i64
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
