use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ext::IdentExt, spanned::Spanned, Attribute, Error, Expr, Ident, Lit, LitStr};

/// Attributes of the derived type, i.e. `#[objmap(...)]` on the struct or enum.
#[derive(Default)]
pub(crate) struct ContainerAttrs {
    /// Path of the objmap crate, `::objmap` unless overridden by `crate = "..."`.
    pub(crate) crate_path: Option<TokenStream2>,
    /// `ignore_key = "..."`, repeatable.
    pub(crate) ignore_keys: Vec<LitStr>,
    /// `suppress = "..."`, repeatable.
    pub(crate) suppress: Vec<LitStr>,
    pub(crate) key_value_coding: bool,
    pub(crate) std_traits: bool,
    /// `string`: enum cases without a raw value use their name.
    pub(crate) string: bool,
}

impl ContainerAttrs {
    /// Parses all `#[objmap(...)]` attributes in `attrs`.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// #[derive(Mapped)]
    /// #[objmap(crate = "crate", ignore_key = "legacy")]
    /// struct MyStruct {}
    /// ```
    pub(crate) fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut result = Self::default();
        for attr in objmap_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("crate") {
                    let lit_str: LitStr = meta.value()?.parse()?;
                    result.crate_path = Some(syn::parse_str(&lit_str.value())?);
                } else if meta.path.is_ident("ignore_key") {
                    result.ignore_keys.push(meta.value()?.parse()?);
                } else if meta.path.is_ident("suppress") {
                    result.suppress.push(meta.value()?.parse()?);
                } else if meta.path.is_ident("key_value_coding") {
                    result.key_value_coding = true;
                } else if meta.path.is_ident("std_traits") {
                    result.std_traits = true;
                } else if meta.path.is_ident("string") {
                    result.string = true;
                } else {
                    return Err(meta.error("unknown objmap attribute"));
                }
                Ok(())
            })?;
        }

        Ok(result)
    }

    /// The crate path, defaulting to `::objmap`.
    pub(crate) fn crate_path(&self) -> TokenStream2 {
        match &self.crate_path {
            Some(path) => path.clone(),
            None => quote! { ::objmap },
        }
    }
}

/// Attributes of a struct field.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub(crate) rename: Option<LitStr>,
    pub(crate) skip: bool,
    pub(crate) base: bool,
}

impl FieldAttrs {
    pub(crate) fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut result = Self::default();
        for attr in objmap_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    result.rename = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("skip") {
                    result.skip = true;
                } else if meta.path.is_ident("base") {
                    result.base = true;
                } else {
                    return Err(meta.error("unknown objmap field attribute"));
                }
                Ok(())
            })?;
        }

        let exclusive = [result.rename.is_some(), result.skip, result.base];
        if exclusive.iter().filter(|set| **set).count() > 1 {
            let span = attrs.first().map(Spanned::span);
            return Err(Error::new(
                span.unwrap_or_else(proc_macro2::Span::call_site),
                "`rename`, `skip` and `base` cannot be combined",
            ));
        }

        Ok(result)
    }
}

/// The raw value of an enum variant, either from `#[objmap(raw = ...)]` or its discriminant.
#[derive(Clone, PartialEq)]
pub(crate) enum RawLit {
    Int(i64),
    String(String),
    Float(f64),
    Bool(bool),
}

/// Parses `#[objmap(raw = ...)]` of an enum variant.
pub(crate) fn parse_variant_raw(attrs: &[Attribute]) -> Result<Option<RawLit>, Error> {
    let mut result = None;
    for attr in objmap_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("raw") {
                let expr: Expr = meta.value()?.parse()?;
                result = Some(raw_lit(&expr)?);
            } else {
                return Err(meta.error("unknown objmap variant attribute"));
            }
            Ok(())
        })?;
    }

    Ok(result)
}

/// Converts a (possibly negated) literal expression to a raw value.
pub(crate) fn raw_lit(expr: &Expr) -> Result<RawLit, Error> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Int(i) => Ok(RawLit::Int(i.base10_parse()?)),
            Lit::Str(s) => Ok(RawLit::String(s.value())),
            Lit::Float(f) => Ok(RawLit::Float(f.base10_parse()?)),
            Lit::Bool(b) => Ok(RawLit::Bool(b.value)),
            _ => Err(Error::new_spanned(lit, "unsupported raw value literal")),
        },
        Expr::Unary(unary) if matches!(unary.op, syn::UnOp::Neg(_)) => {
            match raw_lit(&unary.expr)? {
                RawLit::Int(i) => Ok(RawLit::Int(-i)),
                RawLit::Float(f) => Ok(RawLit::Float(-f)),
                _ => Err(Error::new_spanned(expr, "only numbers can be negated")),
            }
        }
        _ => Err(Error::new_spanned(expr, "raw values must be literals")),
    }
}

/// The name of `ident` without the `r#` prefix.
pub(crate) fn unraw(ident: &Ident) -> String {
    ident.unraw().to_string()
}

fn objmap_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("objmap"))
}
