//! Derive macro for the `EnumParamValue` trait.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Copy, Clone, PartialEq, EnumParam)]
//! pub enum Mode {
//!     #[name = "Low Pass"]
//!     LowPass,
//!     HighPass,
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

/// Information about a single enum variant.
struct VariantInfo {
    /// The variant identifier (e.g., `LargeHall`)
    ident: syn::Ident,
    /// The display label (from `#[name = "..."]` or the identifier)
    display_name: String,
    /// Whether this variant is marked as the default
    is_default: bool,
}

/// Parse and generate the EnumParamValue implementation for an enum.
pub fn derive_enum_param_impl(input: DeriveInput) -> syn::Result<TokenStream> {
    let data_enum = match &input.data {
        Data::Enum(e) => e,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                &input,
                "#[derive(EnumParam)] only supports enums, not structs",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input,
                "#[derive(EnumParam)] only supports enums, not unions",
            ))
        }
    };

    let mut variants = Vec::new();
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "#[derive(EnumParam)] only supports unit variants (no fields)",
            ));
        }

        // Codes are variant positions, explicit discriminants would disagree
        if let Some((_, expr)) = &variant.discriminant {
            return Err(syn::Error::new_spanned(
                expr,
                "#[derive(EnumParam)] does not support explicit discriminants",
            ));
        }

        let display_name = extract_name_attribute(&variant.attrs)?
            .unwrap_or_else(|| variant.ident.to_string());

        variants.push(VariantInfo {
            ident: variant.ident.clone(),
            display_name,
            is_default: has_default_attribute(&variant.attrs),
        });
    }

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input,
            "#[derive(EnumParam)] requires at least one variant",
        ));
    }

    let default_indices: Vec<usize> = variants
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_default)
        .map(|(i, _)| i)
        .collect();

    if default_indices.len() > 1 {
        return Err(syn::Error::new_spanned(
            &input,
            "#[derive(EnumParam)] only one variant can be marked as #[default]",
        ));
    }

    let default_index = default_indices.first().copied().unwrap_or(0);

    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let count = variants.len();

    let from_index_arms: Vec<TokenStream> = variants
        .iter()
        .enumerate()
        .map(|(idx, v)| {
            let ident = &v.ident;
            quote! { #idx => Some(#enum_name::#ident), }
        })
        .collect();

    let to_index_arms: Vec<TokenStream> = variants
        .iter()
        .enumerate()
        .map(|(idx, v)| {
            let ident = &v.ident;
            quote! { #enum_name::#ident => #idx, }
        })
        .collect();

    let names_array: Vec<&str> = variants.iter().map(|v| v.display_name.as_str()).collect();
    let default_ident = &variants[default_index].ident;

    Ok(quote! {
        impl #impl_generics ::soniverb::core::enum_param::EnumParamValue for #enum_name #ty_generics #where_clause {
            const COUNT: usize = #count;
            const DEFAULT_INDEX: usize = #default_index;
            const NAMES: &'static [&'static str] = &[#(#names_array),*];

            fn from_index(index: usize) -> Option<Self> {
                match index {
                    #(#from_index_arms)*
                    _ => None,
                }
            }

            fn to_index(self) -> usize {
                match self {
                    #(#to_index_arms)*
                }
            }

            fn default_value() -> Self {
                #enum_name::#default_ident
            }
        }
    })
}

/// Extract the display label from a `#[name = "..."]` attribute.
fn extract_name_attribute(attrs: &[syn::Attribute]) -> syn::Result<Option<String>> {
    for attr in attrs {
        if attr.path().is_ident("name") {
            let name_value = attr.meta.require_name_value()?;
            if let syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit_str),
                ..
            }) = &name_value.value
            {
                return Ok(Some(lit_str.value()));
            }
            return Err(syn::Error::new_spanned(
                &name_value.value,
                "expected string literal for #[name = \"...\"]",
            ));
        }
    }
    Ok(None)
}

/// Check if a variant has the `#[default]` attribute.
fn has_default_attribute(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident("default"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> syn::Result<String> {
        derive_enum_param_impl(input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn test_names_and_default() {
        let out = expand(parse_quote! {
            enum Preset {
                #[name = "Large Hall"]
                LargeHall,
                #[default]
                Hall,
            }
        })
        .unwrap();

        assert!(out.contains("\"Large Hall\""));
        assert!(out.contains("\"Hall\""));
        assert!(out.contains("const COUNT : usize = 2usize"));
        assert!(out.contains("const DEFAULT_INDEX : usize = 1usize"));
    }

    #[test]
    fn test_trait_named_through_facade() {
        let out = expand(parse_quote! { enum Mode { A, B } }).unwrap();
        assert!(out.contains(":: soniverb :: core :: enum_param :: EnumParamValue for Mode"));
        assert!(!out.contains("soniverb_core"));
    }

    #[test]
    fn test_rejects_struct() {
        assert!(expand(parse_quote! { struct NotAnEnum; }).is_err());
    }

    #[test]
    fn test_rejects_fields() {
        assert!(expand(parse_quote! { enum E { A(u8) } }).is_err());
    }

    #[test]
    fn test_rejects_discriminants() {
        assert!(expand(parse_quote! { enum E { A = 3 } }).is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(expand(parse_quote! { enum E {} }).is_err());
    }

    #[test]
    fn test_rejects_two_defaults() {
        let result = expand(parse_quote! {
            enum E {
                #[default]
                A,
                #[default]
                B,
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_string_name() {
        assert!(expand(parse_quote! { enum E { #[name = 3] A } }).is_err());
    }
}
