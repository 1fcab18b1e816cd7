use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields, FieldsNamed, Ident, Type};

use crate::utils::{self, ContainerAttrs, FieldAttrs};

/// Main entry point for the Mapped derive macro.
pub(crate) fn derive_mapped(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_mapped_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// A mapped field of the struct.
struct MappedField<'a> {
    ident: &'a Ident,
    name: String,
    ty: &'a Type,
    rename: Option<syn::LitStr>,
}

fn derive_mapped_impl(input: DeriveInput) -> Result<TokenStream2, Error> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Mapped derive macro does not support generic types",
        ));
    }
    let attrs = ContainerAttrs::parse(&input.attrs)?;
    let crate_path = attrs.crate_path();

    let named = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(FieldsNamed { named, .. }) => Some(named),
            Fields::Unit => None,
            Fields::Unnamed(unnamed) => {
                return Err(Error::new_spanned(
                    unnamed,
                    "Mapped derive macro only supports named fields",
                ))
            }
        },
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                &input,
                "Mapped derive macro only supports structs, use MappedEnum for enums",
            ))
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                &input,
                "Mapped derive macro only supports structs, not unions",
            ))
        }
    };

    let mut fields = Vec::new();
    let mut base: Option<(&Ident, &Type)> = None;
    for field in named.into_iter().flatten() {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;
        let field_attrs = FieldAttrs::parse(&field.attrs)?;
        if field_attrs.skip {
            continue;
        }
        if field_attrs.base {
            if base.is_some() {
                return Err(Error::new_spanned(field, "Only one field can be the base"));
            }
            base = Some((ident, &field.ty));
            continue;
        }

        fields.push(MappedField {
            ident,
            name: utils::unraw(ident),
            ty: &field.ty,
            rename: field_attrs.rename,
        });
    }

    check_unique_keys(&fields, &attrs)?;

    let type_name = name.to_string();
    let schema = generate_schema(name, &type_name, &fields, base, &attrs, &crate_path);
    let mapped_object =
        generate_mapped_object(name, &type_name, &fields, base, &attrs, &crate_path);
    let std_traits = attrs
        .std_traits
        .then(|| generate_std_traits(name, &crate_path));

    Ok(quote! {
        #schema

        #mapped_object

        impl #crate_path::Property for #name {
            const TYPE: &'static #crate_path::schema::TypeTag =
                &#crate_path::schema::TypeTag::Object(#crate_path::schema::SchemaRef::of::<#name>());

            fn to_value(&self) -> #crate_path::Value {
                #crate_path::Value::Object(#crate_path::value::Object::snapshot(self))
            }

            fn from_value(
                value: &#crate_path::Value,
                diagnostics: &mut #crate_path::Diagnostics,
            ) -> #crate_path::Result<Self> {
                #crate_path::accessor::object_from_value(value, diagnostics)
            }
        }

        #std_traits
    })
}

/// Rejects two mapped fields sharing an external key.
fn check_unique_keys(fields: &[MappedField<'_>], attrs: &ContainerAttrs) -> Result<(), Error> {
    let suppressed: Vec<String> = attrs.suppress.iter().map(|lit| lit.value()).collect();
    let mut keys: Vec<String> = Vec::with_capacity(fields.len());
    for field in fields {
        if suppressed.contains(&field.name) {
            continue;
        }
        let key = field
            .rename
            .as_ref()
            .map_or_else(|| field.name.clone(), |rename| rename.value());
        if keys.contains(&key) {
            let message = format!("Duplicate external key `{key}`");
            return Err(match &field.rename {
                Some(rename) => Error::new_spanned(rename, message),
                None => Error::new_spanned(field.ident, message),
            });
        }
        keys.push(key);
    }

    Ok(())
}

fn generate_schema(
    name: &Ident,
    type_name: &str,
    fields: &[MappedField<'_>],
    base: Option<(&Ident, &Type)>,
    attrs: &ContainerAttrs,
    crate_path: &TokenStream2,
) -> TokenStream2 {
    let mut field_statics = Vec::new();
    let mut field_refs = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let static_name = format_ident!("FIELD_{}", index);
        let field_name = &field.name;
        let field_type = field.ty;
        field_statics.push(quote! {
            static #static_name: #crate_path::schema::Field = #crate_path::schema::Field::new(
                #field_name,
                <#field_type as #crate_path::Property>::TYPE,
            );
        });
        field_refs.push(quote! { &#static_name });
    }

    let renames = fields.iter().filter_map(|field| {
        let field_name = &field.name;
        let key = field.rename.as_ref()?;
        Some(quote! { #crate_path::schema::KeyMapping::rename(#field_name, #key) })
    });
    let suppressed = attrs
        .suppress
        .iter()
        .map(|property| quote! { #crate_path::schema::KeyMapping::suppress(#property) });
    let ignored = attrs
        .ignore_keys
        .iter()
        .map(|key| quote! { #crate_path::schema::KeyMapping::ignore(#key) });

    let with_base = base.map(|(_, base_type)| {
        quote! {
            .with_base(#crate_path::schema::SchemaRef::of::<#base_type>())
        }
    });

    quote! {
        impl #crate_path::Mapped for #name {
            const SCHEMA: &'static #crate_path::schema::Schema = &{
                #(#field_statics)*

                static FIELDS: &[&#crate_path::schema::Field] = &[
                    #(#field_refs),*
                ];
                static MAPPING: &[#crate_path::schema::KeyMapping] = &[
                    #(#renames,)*
                    #(#suppressed,)*
                    #(#ignored,)*
                ];

                #crate_path::schema::Schema::new(
                    #type_name,
                    ::core::any::TypeId::of::<#name>,
                    FIELDS,
                )
                #with_base
                .with_mapping(MAPPING)
            };
        }
    }
}

fn generate_mapped_object(
    name: &Ident,
    type_name: &str,
    fields: &[MappedField<'_>],
    base: Option<(&Ident, &Type)>,
    attrs: &ContainerAttrs,
    crate_path: &TokenStream2,
) -> TokenStream2 {
    let getters = fields.iter().map(|field| {
        let ident = field.ident;
        let field_name = &field.name;
        quote! {
            #field_name => ::core::option::Option::Some(
                #crate_path::Property::to_value(&self.#ident)
            ),
        }
    });
    let setters = fields.iter().map(|field| {
        let ident = field.ident;
        let field_name = &field.name;
        let field_type = field.ty;
        quote! {
            #field_name => {
                self.#ident = #crate_path::accessor::convert::<#field_type>(
                    #type_name,
                    key,
                    value,
                    diagnostics,
                )?;
                ::core::result::Result::Ok(())
            }
        }
    });

    let (get_fallback, set_fallback) = match base {
        Some((base_ident, _)) => (
            quote! { #crate_path::MappedObject::value_for_key(&self.#base_ident, key) },
            quote! {
                match #crate_path::MappedObject::set_value_for_key(
                    &mut self.#base_ident,
                    key,
                    value,
                    diagnostics,
                ) {
                    ::core::result::Result::Err(#crate_path::Error::UndefinedKey {
                        cause: ::core::option::Option::None,
                        ..
                    }) => ::core::result::Result::Err(
                        #crate_path::Error::undefined_key(#type_name, key),
                    ),
                    result => result,
                }
            },
        ),
        None => (
            quote! { ::core::option::Option::None },
            quote! {
                ::core::result::Result::Err(#crate_path::Error::undefined_key(#type_name, key))
            },
        ),
    };

    let key_value_coding = match (attrs.key_value_coding, base) {
        (true, _) => Some(quote! {
            fn key_value_coding(
                &mut self,
            ) -> ::core::option::Option<&mut dyn #crate_path::GenericKeyValueCoding> {
                ::core::option::Option::Some(self)
            }
        }),
        (false, Some((base_ident, _))) => Some(quote! {
            fn key_value_coding(
                &mut self,
            ) -> ::core::option::Option<&mut dyn #crate_path::GenericKeyValueCoding> {
                #crate_path::MappedObject::key_value_coding(&mut self.#base_ident)
            }
        }),
        (false, None) => None,
    };

    quote! {
        impl #crate_path::MappedObject for #name {
            fn schema(&self) -> &'static #crate_path::schema::Schema {
                <Self as #crate_path::Mapped>::SCHEMA
            }

            fn value_for_key(&self, key: &str) -> ::core::option::Option<#crate_path::Value> {
                match key {
                    #(#getters)*
                    _ => #get_fallback,
                }
            }

            #[allow(unused_variables)]
            fn set_value_for_key(
                &mut self,
                key: &str,
                value: &#crate_path::Value,
                diagnostics: &mut #crate_path::Diagnostics,
            ) -> #crate_path::Result<()> {
                match key {
                    #(#setters)*
                    _ => #set_fallback,
                }
            }

            #key_value_coding
        }
    }
}

fn generate_std_traits(name: &Ident, crate_path: &TokenStream2) -> TokenStream2 {
    quote! {
        impl ::core::cmp::PartialEq for #name {
            fn eq(&self, other: &Self) -> bool {
                #crate_path::equals(self, other)
            }
        }

        impl ::core::cmp::Eq for #name {}

        impl ::core::hash::Hash for #name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64(#crate_path::hash(self));
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&#crate_path::describe(self))
            }
        }
    }
}
