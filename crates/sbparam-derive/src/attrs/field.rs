//! Field-level attribute definitions.

use proc_macro2::Span;
use syn::LitStr;

/// Processed field attributes.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Tag string in `"<key>,<modifier>,<default>"` form, resolved at runtime.
    pub tag: Option<String>,
}

/// Raw parsed field attributes.
///
/// Populated by `parse.rs`, then folded into a single tag string via
/// `into_field_attrs()`.
#[derive(Debug, Default)]
pub struct RawFieldAttrs {
    /// `#[sbparam("...")]` or `#[sbparam = "..."]`.
    pub tag: Option<LitStr>,

    // === Structured form ===
    pub key: Option<LitStr>,
    pub omitempty: bool,
    pub default: Option<(String, Span)>,
}

impl RawFieldAttrs {
    pub fn set_tag(&mut self, lit: LitStr) -> syn::Result<()> {
        if self.tag.is_some() {
            return Err(syn::Error::new_spanned(lit, "duplicate sbparam tag string"));
        }
        self.tag = Some(lit);
        Ok(())
    }

    fn has_structured(&self) -> bool {
        self.key.is_some() || self.omitempty || self.default.is_some()
    }

    pub fn into_field_attrs(self) -> syn::Result<FieldAttrs> {
        let structured = self.has_structured();
        if let Some(tag) = self.tag {
            if structured {
                return Err(syn::Error::new_spanned(
                    tag,
                    "a tag string cannot be combined with `key`, `omitempty` or `default`",
                ));
            }
            return Ok(FieldAttrs {
                tag: Some(tag.value()),
            });
        }

        if !structured {
            return Ok(FieldAttrs::default());
        }

        let mut tag = match self.key {
            Some(key) => {
                let value = key.value();
                if value.contains(',') {
                    return Err(syn::Error::new_spanned(key, "key cannot contain ','"));
                }
                value
            }
            None => String::new(),
        };
        tag.push(',');
        if self.omitempty {
            tag.push_str("omitempty");
        }
        if let Some((default, span)) = self.default {
            if default.contains(',') {
                return Err(syn::Error::new(span, "default value cannot contain ','"));
            }
            tag.push(',');
            tag.push_str(&default);
        }

        Ok(FieldAttrs { tag: Some(tag) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(value: &str) -> LitStr {
        LitStr::new(value, Span::call_site())
    }

    #[test]
    fn tag_string_passes_through() {
        let mut raw = RawFieldAttrs::default();
        raw.set_tag(lit("str_field2,,a")).unwrap();
        assert_eq!(raw.into_field_attrs().unwrap().tag.as_deref(), Some("str_field2,,a"));
    }

    #[test]
    fn structured_form_folds_into_tag() {
        let raw = RawFieldAttrs {
            key: Some(lit("k")),
            omitempty: true,
            default: Some(("-1".into(), Span::call_site())),
            ..Default::default()
        };
        assert_eq!(raw.into_field_attrs().unwrap().tag.as_deref(), Some("k,omitempty,-1"));

        let raw = RawFieldAttrs {
            key: Some(lit("k")),
            ..Default::default()
        };
        assert_eq!(raw.into_field_attrs().unwrap().tag.as_deref(), Some("k,"));

        let raw = RawFieldAttrs {
            default: Some((String::new(), Span::call_site())),
            ..Default::default()
        };
        assert_eq!(raw.into_field_attrs().unwrap().tag.as_deref(), Some(",,"));
    }

    #[test]
    fn no_attributes_means_no_tag() {
        assert_eq!(RawFieldAttrs::default().into_field_attrs().unwrap().tag, None);
    }

    #[test]
    fn rejects_mixed_forms_and_commas() {
        let mut raw = RawFieldAttrs {
            omitempty: true,
            ..Default::default()
        };
        raw.set_tag(lit("k")).unwrap();
        assert!(raw.into_field_attrs().is_err());

        let raw = RawFieldAttrs {
            default: Some(("a,b".into(), Span::call_site())),
            ..Default::default()
        };
        assert!(raw.into_field_attrs().is_err());

        let mut raw = RawFieldAttrs::default();
        raw.set_tag(lit("a")).unwrap();
        assert!(raw.set_tag(lit("b")).is_err());
    }
}
