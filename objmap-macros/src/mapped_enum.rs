use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident};

use crate::utils::{self, ContainerAttrs, RawLit};

/// Main entry point for the MappedEnum derive macro.
pub(crate) fn derive_mapped_enum(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_mapped_enum_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

#[derive(Clone, Copy, PartialEq)]
enum RawKind {
    Int,
    String,
    Other,
}

fn derive_mapped_enum_impl(input: DeriveInput) -> Result<TokenStream2, Error> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "MappedEnum derive macro does not support generic types",
        ));
    }
    let attrs = ContainerAttrs::parse(&input.attrs)?;
    let crate_path = attrs.crate_path();

    let Data::Enum(data_enum) = &input.data else {
        return Err(Error::new_spanned(
            &input,
            "MappedEnum derive macro only supports enums",
        ));
    };

    let mut cases: Vec<(&Ident, Option<RawLit>)> = Vec::new();
    let mut kind = attrs.string.then_some(RawKind::String);
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "MappedEnum derive macro only supports unit enum variants",
            ));
        }

        let raw = match (&variant.discriminant, utils::parse_variant_raw(&variant.attrs)?) {
            (Some(_), Some(_)) => {
                return Err(Error::new_spanned(
                    variant,
                    "A variant cannot have both a discriminant and a raw value",
                ))
            }
            (Some((_, expr)), None) => Some(utils::raw_lit(expr)?),
            (None, raw) => raw,
        };

        if let Some(raw) = &raw {
            let variant_kind = match raw {
                RawLit::Int(_) => RawKind::Int,
                RawLit::String(_) => RawKind::String,
                RawLit::Float(_) | RawLit::Bool(_) => RawKind::Other,
            };
            match kind {
                Some(kind) if kind != variant_kind => {
                    return Err(Error::new_spanned(
                        variant,
                        "All raw values of an enum must be of the same kind",
                    ))
                }
                _ => kind = Some(variant_kind),
            }
        }
        cases.push((&variant.ident, raw));
    }

    // Without any raw value the cases are numbered like discriminants.
    let kind = kind.unwrap_or(RawKind::Int);
    let raws = resolve_raw_values(kind, &cases)?;
    let idents: Vec<_> = cases.iter().map(|(ident, _)| *ident).collect();
    let case_names: Vec<_> = idents.iter().map(|ident| utils::unraw(ident)).collect();

    let raw_exprs = raws.iter().map(|raw| raw_expr(raw, &crate_path));
    let from_raw = generate_from_raw(kind, name, &idents, &raws, &crate_path);
    let type_name = name.to_string();
    let type_tag = match kind {
        RawKind::Int => quote! { IntEnum },
        RawKind::String => quote! { StringEnum },
        RawKind::Other => quote! { RawEnum },
    };

    Ok(quote! {
        impl #crate_path::RawRepresentable for #name {
            const NAME: &'static str = #type_name;

            fn raw_value(&self) -> #crate_path::RawValue {
                match self {
                    #(#name::#idents => #raw_exprs,)*
                }
            }

            #from_raw

            fn case_name(&self) -> &'static str {
                match self {
                    #(#name::#idents => #case_names,)*
                }
            }
        }

        impl #crate_path::Property for #name {
            const TYPE: &'static #crate_path::schema::TypeTag =
                &#crate_path::schema::TypeTag::#type_tag(#type_name);

            fn to_value(&self) -> #crate_path::Value {
                #crate_path::introspect::enum_to_value(self)
            }

            fn from_value(
                value: &#crate_path::Value,
                _: &mut #crate_path::Diagnostics,
            ) -> #crate_path::Result<Self> {
                #crate_path::introspect::enum_from_value(value)
            }
        }
    })
}

/// Fills in the raw values of cases that have none and checks they are unique.
fn resolve_raw_values(
    kind: RawKind,
    cases: &[(&Ident, Option<RawLit>)],
) -> Result<Vec<RawLit>, Error> {
    let mut raws: Vec<RawLit> = Vec::with_capacity(cases.len());
    let mut next = 0i64;
    for (ident, raw) in cases {
        let raw = match (kind, raw) {
            (_, Some(raw)) => raw.clone(),
            (RawKind::Int, None) => RawLit::Int(next),
            (RawKind::String, None) => RawLit::String(utils::unraw(ident)),
            (RawKind::Other, None) => {
                return Err(Error::new_spanned(
                    ident,
                    "Every case needs a raw value when raw values are not integers or strings",
                ))
            }
        };
        if let RawLit::Int(i) = raw {
            next = i.wrapping_add(1);
        }
        if raws.contains(&raw) {
            return Err(Error::new_spanned(ident, "Duplicate raw value"));
        }
        raws.push(raw);
    }

    Ok(raws)
}

fn raw_expr(raw: &RawLit, crate_path: &TokenStream2) -> TokenStream2 {
    match raw {
        RawLit::Int(i) => {
            let i = Literal::i64_suffixed(*i);
            quote! { #crate_path::RawValue::Int(#i) }
        }
        RawLit::String(s) => quote! {
            #crate_path::RawValue::String(::std::string::String::from(#s))
        },
        RawLit::Float(f) => {
            let f = Literal::f64_suffixed(*f);
            quote! {
                #crate_path::RawValue::Other(::std::boxed::Box::new(#crate_path::Value::Float(#f)))
            }
        }
        RawLit::Bool(b) => quote! {
            #crate_path::RawValue::Other(::std::boxed::Box::new(#crate_path::Value::Bool(#b)))
        },
    }
}

fn generate_from_raw(
    kind: RawKind,
    name: &Ident,
    idents: &[&Ident],
    raws: &[RawLit],
    crate_path: &TokenStream2,
) -> TokenStream2 {
    let body = match kind {
        RawKind::Int => {
            let patterns = raws.iter().map(|raw| match raw {
                RawLit::Int(i) => Literal::i64_suffixed(*i),
                _ => unreachable!("int enum with a non-int raw value"),
            });
            quote! {
                match raw {
                    #crate_path::RawValue::Int(raw) => match *raw {
                        #(#patterns => ::core::option::Option::Some(#name::#idents),)*
                        _ => ::core::option::Option::None,
                    },
                    _ => ::core::option::Option::None,
                }
            }
        }
        RawKind::String => {
            let patterns = raws.iter().map(|raw| match raw {
                RawLit::String(s) => s.as_str(),
                _ => unreachable!("string enum with a non-string raw value"),
            });
            quote! {
                match raw {
                    #crate_path::RawValue::String(raw) => match raw.as_str() {
                        #(#patterns => ::core::option::Option::Some(#name::#idents),)*
                        _ => ::core::option::Option::None,
                    },
                    _ => ::core::option::Option::None,
                }
            }
        }
        RawKind::Other => {
            let exprs = raws.iter().map(|raw| raw_expr(raw, crate_path));
            let widen = raws.iter().any(|raw| matches!(raw, RawLit::Float(_))).then(|| {
                quote! {
                    let widened = raw.widen_to_float();
                    let raw = widened.as_ref().unwrap_or(raw);
                }
            });
            quote! {
                #widen
                #(
                    if *raw == #exprs {
                        return ::core::option::Option::Some(#name::#idents);
                    }
                )*
                ::core::option::Option::None
            }
        }
    };

    quote! {
        fn from_raw_value(raw: &#crate_path::RawValue) -> ::core::option::Option<Self> {
            #body
        }
    }
}
