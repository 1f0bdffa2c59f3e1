//! Derive macros for the SoniVerb core.
//!
//! Provides `#[derive(EnumParam)]`, which turns a fieldless enum into a
//! restricted-enumeration parameter value whose integer codes are the
//! variant positions.

use proc_macro::TokenStream;

mod enum_param;

/// Derive macro for implementing `EnumParamValue` on enums.
///
/// # Requirements
///
/// - The type must be an enum
/// - All variants must be unit variants (no fields)
/// - The enum must also derive `Copy`, `Clone`, and `PartialEq`
/// - The deriving crate must depend on `soniverb`; the generated impl
///   names the trait through the facade
///
/// # Attributes
///
/// - `#[name = "..."]` - Optional display label for a variant. Defaults to
///   the variant identifier.
/// - `#[default]` - Mark the default variant. Defaults to the first variant.
///
/// # Example
///
/// ```ignore
/// use soniverb::prelude::*;
///
/// #[derive(Copy, Clone, PartialEq, EnumParam)]
/// pub enum Room {
///     #[name = "Small Room"]
///     Small,
///     #[default]
///     Medium,
///     Large,
/// }
///
/// assert_eq!(Room::NAMES[0], "Small Room");
/// assert_eq!(Room::from_code(2), Some(Room::Large));
/// ```
#[proc_macro_derive(EnumParam, attributes(name, default))]
pub fn derive_enum_param(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    match enum_param::derive_enum_param_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
