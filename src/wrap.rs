use proc_macro2::TokenStream;
use quote::quote;
use syn::ItemFn;
use syn::spanned::Spanned;

use crate::callback::{self, CallbackRef};
use crate::error;

/// Rebuilds an annotated function so the callback observes every successful
/// return value. The original body runs first, its result is handed to the
/// callback by shared reference, and the result is returned untouched.
///
/// Panics unwind straight through the wrapper, so a panicking body never
/// reaches the callback.
pub(crate) fn wrap_function(func: &ItemFn, callback: &CallbackRef) -> syn::Result<TokenStream> {
    if let Some(constness) = &func.sig.constness {
        return Err(error::const_function(constness.span()));
    }

    let attrs = &func.attrs;
    let vis = &func.vis;
    let sig = &func.sig;
    let body = &func.block;
    let callback_path = callback.call_path();

    // A closure (or async block) keeps `return` statements inside the
    // original body from bypassing the callback.
    let invoke = if sig.asyncness.is_some() {
        quote! { async #body.await }
    } else {
        quote! { (|| #body)() }
    };

    Ok(quote! {
        #(#attrs)* #vis #sig {
            #[allow(clippy::redundant_closure_call)]
            let __then_result = #invoke;
            #callback_path(&__then_result);
            __then_result
        }
    })
}

/// A function may carry at most one callback marker. The attribute currently
/// being expanded is no longer in the list, so any marker still present is a
/// duplicate.
pub(crate) fn reject_duplicate(func: &ItemFn) -> syn::Result<()> {
    for attr in &func.attrs {
        if callback::is_then_marker(attr.path()) {
            return Err(error::duplicate_callback(
                func.sig.ident.span(),
                &func.sig.ident,
                func.sig.inputs.len(),
            ));
        }
    }
    Ok(())
}
