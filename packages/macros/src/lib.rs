//! Proc macros generating named accessors for `sugars_builder_factory` builders

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod accessors;
mod naming;

use accessors::AccessorTrait;

/// Generates an extension trait with a `with_<field>` / `without_<field>`
/// pair for every listed field, implemented for `Builder<V, T>`.
///
/// Field names are given exactly as configured on the factory and converted
/// to snake_case for the method names (`"queryString"` becomes
/// `with_query_string` / `without_query_string`).
///
/// Usage:
/// ```ignore
/// use sugars_builder_factory::field_accessors;
///
/// field_accessors! {
///     /// Accessors for URL builders.
///     pub trait UrlAccessors {
///         "host", "port", "queryString"
///     }
/// }
///
/// let url = factory.builder().with_host("example.com").with_port("8080").build()?;
/// ```
#[proc_macro]
pub fn field_accessors(input: TokenStream) -> TokenStream {
    let accessor_trait = parse_macro_input!(input as AccessorTrait);
    accessor_trait
        .expand()
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
