use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Ident, Path};

use crate::error;

/// Where the callback lives relative to the annotated function.
#[derive(Debug)]
pub(crate) enum CallbackRef {
    /// A function in the enclosing module, e.g. `#[then(audit)]`.
    Local(Ident),
    /// A function in another module, e.g. `#[then(audit::record)]`.
    External { module: Ident, function: Ident },
}

impl CallbackRef {
    /// Path tokens for the generated call site.
    pub(crate) fn call_path(&self) -> TokenStream {
        match self {
            CallbackRef::Local(function) => quote!(#function),
            CallbackRef::External { module, function } => quote!(#module::#function),
        }
    }
}

impl Parse for CallbackRef {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error(
                "missing callback: expected a local function name or a `module::function` pair",
            ));
        }
        let tokens: TokenStream = input.parse()?;
        callback_from_tokens(tokens)
    }
}

fn callback_from_tokens(tokens: TokenStream) -> syn::Result<CallbackRef> {
    let path = match syn::parse2::<Path>(tokens.clone()) {
        Ok(path) if path.leading_colon.is_none() => path,
        _ => return Err(error::invalid_callback(&tokens)),
    };
    if path.segments.iter().any(|segment| !segment.arguments.is_none()) {
        return Err(error::invalid_callback(&tokens));
    }

    let mut segments = path.segments.into_iter();
    match (segments.next(), segments.next(), segments.next()) {
        (Some(function), None, None) => Ok(CallbackRef::Local(function.ident)),
        (Some(module), Some(function), None) => Ok(CallbackRef::External {
            module: module.ident,
            function: function.ident,
        }),
        _ => Err(error::invalid_callback(&tokens)),
    }
}

/// Recognizes `#[then(...)]` and `#[then_macro::then(...)]` markers.
pub(crate) fn is_then_marker(path: &Path) -> bool {
    if path.is_ident("then") {
        return true;
    }
    let mut segments = path.segments.iter();
    matches!(
        (segments.next(), segments.next(), segments.next()),
        (Some(first), Some(second), None) if first.ident == "then_macro" && second.ident == "then"
    )
}
