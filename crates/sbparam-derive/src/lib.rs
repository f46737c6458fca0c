//! `#[derive(Param)]`: generates the field table `sbparam` decodes through.

mod attrs;
mod param_gen;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive `sbparam::Param` for a struct with named fields.
///
/// Each field of a primitive kind (`String`, `bool`, signed and unsigned
/// integers, `f32`, `f64`) becomes one table entry, as does every field
/// carrying an `#[sbparam(...)]` attribute (so `type Port = u16` works when
/// tagged). Other fields are skipped and keep whatever value the caller put
/// there.
///
/// Field attributes:
///
/// - `#[sbparam("key,omitempty,default")]` (also `#[sbparam = "..."]`)
/// - `#[sbparam(key = "...", omitempty, default = ...)]`
///
/// Container attributes:
///
/// - `#[sbparam(rename_all = "camelCase" | "PascalCase" | "snake_case" | "lowercase" | "UPPERCASE" | "none")]`
#[proc_macro_derive(Param, attributes(sbparam))]
pub fn derive_param(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match param_gen::generate_param_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
