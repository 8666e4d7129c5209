use proc_macro2::{Span, TokenStream};
use syn::{Error, Ident};

/// The marker's argument is not one of the two accepted callback shapes.
pub(crate) fn invalid_callback(tokens: &TokenStream) -> Error {
    Error::new(
        first_span(tokens),
        format!(
            "invalid callback reference `{}`: expected a bare function name or a `module::function` pair",
            render(tokens)
        ),
    )
}

/// A second callback was attached to a function/arity pair that already has one.
pub(crate) fn duplicate_callback(span: Span, name: &Ident, arity: usize) -> Error {
    Error::new(span, format!("duplicate `then` callback for `{name}/{arity}`"))
}

pub(crate) fn const_function(span: Span) -> Error {
    Error::new(span, "cannot attach a `then` callback to a const function")
}

pub(crate) fn module_without_body(span: Span) -> Error {
    Error::new(span, "`then_hooks` requires an inline module with a body")
}

fn first_span(tokens: &TokenStream) -> Span {
    tokens
        .clone()
        .into_iter()
        .next()
        .map_or_else(Span::call_site, |tree| tree.span())
}

fn render(tokens: &TokenStream) -> String {
    // TokenStream's Display inserts spaces around `::`.
    tokens
        .to_string()
        .replace(" :: ", "::")
        .replace(":: ", "::")
}
