//! Parsing and expansion of `field_accessors!`.

use std::collections::HashSet;

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{braced, Attribute, Ident, LitStr, Token, Visibility};

use crate::naming::{is_identifier_tail, to_snake_case};

/// `#[attrs] pub trait Name { "field", "otherField" }`
pub struct AccessorTrait {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    fields: Vec<LitStr>,
}

impl Parse for AccessorTrait {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![trait]>()?;
        let ident: Ident = input.parse()?;

        let content;
        braced!(content in input);
        let fields = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?
            .into_iter()
            .collect();

        Ok(Self {
            attrs,
            vis,
            ident,
            fields,
        })
    }
}

impl AccessorTrait {
    pub fn expand(&self) -> syn::Result<TokenStream2> {
        let AccessorTrait {
            attrs, vis, ident, ..
        } = self;

        let mut seen = HashSet::new();
        let mut signatures = Vec::with_capacity(self.fields.len());
        let mut bodies = Vec::with_capacity(self.fields.len());

        for field in &self.fields {
            let name = field.value();
            let snake = to_snake_case(&name);
            if !is_identifier_tail(&snake) {
                return Err(syn::Error::new(
                    field.span(),
                    format!("field name `{name}` cannot be turned into a method name"),
                ));
            }
            if !seen.insert(snake.clone()) {
                return Err(syn::Error::new(
                    field.span(),
                    format!("field `{name}` generates the same accessors as an earlier field"),
                ));
            }

            let with = format_ident!("with_{}", snake, span = field.span());
            let without = format_ident!("without_{}", snake, span = field.span());
            let set_doc = format!("Sets `{name}`.");
            let unset_doc = format!("Clears `{name}`, falling back to its default.");

            signatures.push(quote! {
                #[doc = #set_doc]
                fn #with(self, value: impl ::core::convert::Into<V>) -> Self;
                #[doc = #unset_doc]
                fn #without(self) -> Self;
            });
            bodies.push(quote! {
                #[inline]
                fn #with(self, value: impl ::core::convert::Into<V>) -> Self {
                    ::sugars_builder_factory::Builder::with(self, #field, value)
                }
                #[inline]
                fn #without(self) -> Self {
                    ::sugars_builder_factory::Builder::without(self, #field)
                }
            });
        }

        Ok(quote! {
            #(#attrs)*
            #vis trait #ident<V>: ::core::marker::Sized {
                #(#signatures)*
            }

            impl<V: ::core::clone::Clone, T> #ident<V> for ::sugars_builder_factory::Builder<V, T> {
                #(#bodies)*
            }
        })
    }
}
