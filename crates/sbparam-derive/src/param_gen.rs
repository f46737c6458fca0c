use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields};

use crate::attrs::{StructAttrs, is_primitive_type, parse_field_attrs, parse_struct_attrs};

pub fn generate_param_impl(input: &DeriveInput) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;

    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Param can only be derived for structs with named fields",
            ));
        }
    };

    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let mut field_specs = Vec::new();
    match &data.fields {
        Fields::Named(named) => {
            for field in &named.named {
                if let Some(spec) = generate_field_spec(field, &struct_attrs)? {
                    field_specs.push(spec);
                }
            }
        }
        Fields::Unit => {}
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Param cannot be derived for tuple structs, fields need names to be looked up",
            ));
        }
    }

    let struct_name_str = struct_name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::sbparam::Param for #struct_name #ty_generics #where_clause {
            const NAME: &'static str = #struct_name_str;

            fn fields() -> ::std::vec::Vec<::sbparam::FieldSpec<Self>> {
                ::std::vec![#(#field_specs),*]
            }
        }
    })
}

/// Emit the field table entry for one field, or `None` for an untagged field
/// whose type is not a decodable primitive and is left untouched.
///
/// Tagged fields always get an entry, so aliases of primitives are decoded
/// and unsupported types fail the `ParamField` bound at compile time.
fn generate_field_spec(field: &Field, struct_attrs: &StructAttrs) -> syn::Result<Option<TokenStream>> {
    let attrs = parse_field_attrs(field)?;
    if attrs.tag.is_none() && !is_primitive_type(&field.ty) {
        return Ok(None);
    }

    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
    let ident_str = ident.unraw().to_string();
    let name = struct_attrs.rename_all.apply(&ident_str);
    let tag = match &attrs.tag {
        Some(tag) => quote! { ::core::option::Option::Some(#tag) },
        None => quote! { ::core::option::Option::None },
    };
    let ty = &field.ty;

    Ok(Some(quote! {
        ::sbparam::FieldSpec {
            ident: #ident_str,
            name: #name,
            tag: #tag,
            kind: <#ty as ::sbparam::ParamField>::KIND,
            decode: |record: &mut Self,
                     source: ::core::option::Option<&::sbparam::Value>,
                     descriptor: &::sbparam::FieldDescriptor| {
                record.#ident = <#ty as ::sbparam::ParamField>::decode(source, descriptor)?;
                ::core::result::Result::Ok(())
            },
        }
    }))
}
