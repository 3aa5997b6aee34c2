//! iotwire-macros - Derive macro for iotwire modeled types
//!
//! This crate provides:
//! - `#[derive(Model)]` - Implement marshalling, unmarshalling and the static schema
//!   for a record of optional fields

use darling::ast::Data;
use darling::util::Ignored;
use darling::{FromDeriveInput, FromField};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, parse_macro_input};

/// Options for the Model derive macro
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(model), supports(struct_named, struct_unit))]
struct ModelOpts {
    ident: syn::Ident,
    generics: syn::Generics,
    data: Data<Ignored, FieldOpts>,

    /// Name of the type in the service model (defaults to the struct name)
    #[darling(default)]
    name: Option<String>,
}

/// Options for a single field
#[derive(Debug, FromField)]
#[darling(attributes(wire))]
struct FieldOpts {
    ident: Option<syn::Ident>,
    ty: syn::Type,

    /// JSON key (defaults to the camelCase field name)
    #[darling(default)]
    name: Option<String>,
}

/// A field after validation
struct ModelField {
    ident: syn::Ident,
    inner: syn::Type,
    rust_name: String,
    wire_name: String,
}

/// Derive macro for modeled types
///
/// Every field must be an `Option`; `None` means absent and is never written. The
/// struct must also implement `Default`.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Default, PartialEq, Model)]
/// pub struct KeyPair {
///     #[wire(name = "PublicKey")]
///     pub public_key: Option<String>,
///     #[wire(name = "PrivateKey")]
///     pub private_key: Option<String>,
/// }
/// ```
#[proc_macro_derive(Model, attributes(model, wire))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ModelOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    match expand_model(opts) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => TokenStream::from(e.write_errors()),
    }
}

fn expand_model(opts: ModelOpts) -> darling::Result<TokenStream2> {
    if !opts.generics.params.is_empty() {
        return Err(
            darling::Error::custom("Model cannot be derived for generic types")
                .with_span(&opts.generics),
        );
    }

    let name = &opts.ident;
    let model_name = opts.name.clone().unwrap_or_else(|| name.to_string());
    let fields = collect_fields(opts.data)?;

    let idents: Vec<_> = fields.iter().map(|f| &f.ident).collect();
    let inners: Vec<_> = fields.iter().map(|f| &f.inner).collect();
    let rust_names: Vec<_> = fields.iter().map(|f| &f.rust_name).collect();
    let wire_names: Vec<_> = fields.iter().map(|f| &f.wire_name).collect();

    let unmarshal_field_body = if fields.is_empty() {
        quote! {
            let _ = (name, map);
            ::core::result::Result::Ok(false)
        }
    } else {
        quote! {
            match name {
                #(
                    #wire_names => {
                        self.#idents = map.next_value_seed(
                            ::iotwire_json::UnmarshalSeed::<#inners>::new(),
                        )?;
                    }
                )*
                _ => return ::core::result::Result::Ok(false),
            }
            ::core::result::Result::Ok(true)
        }
    };

    Ok(quote! {
        impl ::iotwire_json::Marshal for #name {
            fn marshal<S: ::iotwire_json::__private::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::core::result::Result<S::Ok, S::Error> {
                use ::iotwire_json::__private::serde::ser::SerializeStruct as _;

                #[allow(unused_mut)]
                let mut len = 0usize;
                #(
                    if !::iotwire_json::Marshal::is_absent(&self.#idents) {
                        len += 1;
                    }
                )*

                #[allow(unused_mut)]
                let mut state = serializer.serialize_struct(#model_name, len)?;
                #(
                    if !::iotwire_json::Marshal::is_absent(&self.#idents) {
                        state.serialize_field(#wire_names, &::iotwire_json::Wire(&self.#idents))?;
                    }
                )*
                state.end()
            }
        }

        impl ::iotwire_json::ModelFields for #name {
            const MODEL_NAME: &'static str = #model_name;

            fn unmarshal_field<'de, A: ::iotwire_json::__private::serde::de::MapAccess<'de>>(
                &mut self,
                name: &str,
                map: &mut A,
            ) -> ::core::result::Result<bool, A::Error> {
                #unmarshal_field_body
            }
        }

        impl ::iotwire_json::Unmarshal for #name {
            fn unmarshal<'de, D: ::iotwire_json::__private::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::core::result::Result<::core::option::Option<Self>, D::Error> {
                ::iotwire_json::unmarshal_object(deserializer)
            }
        }

        impl ::iotwire_json::WireKind for #name {
            fn kind() -> ::iotwire_json::FieldKind {
                ::iotwire_json::FieldKind::Object(<Self as ::iotwire_json::Model>::schema)
            }
        }

        impl ::iotwire_json::Model for #name {
            fn schema() -> &'static ::iotwire_json::ModelSchema {
                static SCHEMA: ::iotwire_json::__private::OnceCell<::iotwire_json::ModelSchema> =
                    ::iotwire_json::__private::OnceCell::new();

                SCHEMA.get_or_init(|| {
                    ::iotwire_json::ModelSchema::new(
                        #model_name,
                        ::std::vec![
                            #(
                                ::iotwire_json::FieldSchema::new(
                                    #rust_names,
                                    #wire_names,
                                    <#inners as ::iotwire_json::WireKind>::kind(),
                                ),
                            )*
                        ],
                    )
                })
            }
        }
    })
}

fn collect_fields(data: Data<Ignored, FieldOpts>) -> darling::Result<Vec<ModelField>> {
    let Data::Struct(fields) = data else {
        return Err(darling::Error::unsupported_shape("enum"));
    };

    let mut errors = darling::Error::accumulator();
    let mut out: Vec<ModelField> = Vec::with_capacity(fields.len());

    for field in fields.fields {
        let Some(ident) = field.ident else {
            errors.push(darling::Error::unsupported_shape("tuple field"));
            continue;
        };
        let Some(inner) = option_inner(&field.ty) else {
            errors.push(
                darling::Error::custom("Model fields must be `Option<T>`").with_span(&field.ty),
            );
            continue;
        };

        let rust_name = ident.unraw().to_string();
        let wire_name = field.name.unwrap_or_else(|| to_camel_case(&rust_name));
        if out.iter().any(|f| f.wire_name == wire_name) {
            errors.push(
                darling::Error::custom(format!("duplicate wire name `{wire_name}`"))
                    .with_span(&ident),
            );
            continue;
        }

        out.push(ModelField {
            ident,
            inner: inner.clone(),
            rust_name,
            wire_name,
        });
    }

    errors.finish_with(out)
}

/// Extract `T` from `Option<T>`
fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Convert snake_case to camelCase
fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = false;

    for c in s.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
