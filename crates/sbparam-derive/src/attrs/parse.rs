//! Attribute parsing functions.
//!
//! Field attributes come in two shapes: a bare tag string,
//! `#[sbparam("key,omitempty,default")]`, or structured
//! `parse_nested_meta` items, `#[sbparam(key = "k", omitempty, default = 1)]`.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Field, Lit, LitStr, Meta, UnOp};

use super::container::StructAttrs;
use super::field::{FieldAttrs, RawFieldAttrs};
use super::types::RenameStrategy;

/// Parse struct-level attributes from `#[sbparam(...)]`.
pub fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut result = StructAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("sbparam") {
            continue;
        }
        attr.parse_nested_meta(|meta| parse_struct_meta(&meta, &mut result))?;
    }

    Ok(result)
}

fn parse_struct_meta(meta: &ParseNestedMeta, result: &mut StructAttrs) -> syn::Result<()> {
    if meta.path.is_ident("rename_all") {
        let s: LitStr = meta.value()?.parse()?;
        result.rename_all = RenameStrategy::parse(&s.value()).ok_or_else(|| {
            syn::Error::new_spanned(
                &s,
                "invalid rename_all value, expected one of: camelCase, PascalCase, snake_case, lowercase, UPPERCASE, none",
            )
        })?;
        return Ok(());
    }
    Err(meta.error("unknown sbparam container attribute, expected `rename_all`"))
}

/// Parse field-level attributes from `#[sbparam(...)]`.
pub fn parse_field_attrs(field: &Field) -> syn::Result<FieldAttrs> {
    let mut raw = RawFieldAttrs::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("sbparam") {
            continue;
        }

        match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => raw.set_tag(s.clone())?,
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected a tag string, e.g. #[sbparam = \"key,omitempty,default\"]",
                    ));
                }
            },
            Meta::List(list) => match syn::parse2::<LitStr>(list.tokens.clone()) {
                Ok(s) => raw.set_tag(s)?,
                Err(_) => attr.parse_nested_meta(|meta| parse_field_meta(&meta, &mut raw))?,
            },
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "expected #[sbparam(\"key,omitempty,default\")] or #[sbparam(key = \"...\")]",
                ));
            }
        }
    }

    raw.into_field_attrs()
}

fn parse_field_meta(meta: &ParseNestedMeta, raw: &mut RawFieldAttrs) -> syn::Result<()> {
    let ident = meta.path.get_ident().map(|i| i.to_string());

    match ident.as_deref() {
        Some("key") | Some("rename") => {
            raw.key = Some(meta.value()?.parse()?);
        }
        Some("omitempty") => {
            raw.omitempty = true;
        }
        Some("default") => {
            let expr: Expr = meta.value()?.parse()?;
            let text = default_expr_text(&expr).ok_or_else(|| {
                syn::Error::new_spanned(
                    &expr,
                    "default must be a string, integer, float or bool literal",
                )
            })?;
            raw.default = Some((text, syn::spanned::Spanned::span(&expr)));
        }
        _ => {
            return Err(meta.error(
                "unknown sbparam attribute, expected one of: key, omitempty, default",
            ));
        }
    }

    Ok(())
}

/// Render a literal default as the text the runtime parses.
fn default_expr_text(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => match lit {
            Lit::Str(s) => Some(s.value()),
            Lit::Int(i) => Some(i.base10_digits().to_string()),
            Lit::Float(f) => Some(f.base10_digits().to_string()),
            Lit::Bool(b) => Some(b.value.to_string()),
            _ => None,
        },
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => match expr.as_ref() {
            Expr::Lit(ExprLit {
                lit: Lit::Int(_) | Lit::Float(_),
                ..
            }) => default_expr_text(expr).map(|digits| format!("-{digits}")),
            _ => None,
        },
        _ => None,
    }
}
