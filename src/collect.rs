use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Attribute, Item, ItemMod};

use crate::callback::{self, CallbackRef};
use crate::error;
use crate::wrap;

/// Pending callback attachments, keyed by function name and arity. Built in
/// one pass over the module items and consumed by wrapper generation.
type Records = HashMap<(String, usize), CallbackRef>;

/// Scans an inline module for `#[then(...)]` markers and replaces every
/// marked function with its wrapped form. The markers themselves are
/// consumed here and never expand on their own.
pub(crate) fn expand_module(mut module: ItemMod) -> syn::Result<TokenStream> {
    let Some((_, items)) = module.content.as_mut() else {
        return Err(error::module_without_body(module.ident.span()));
    };

    let records = collect_records(items)?;
    install_wrappers(items, records)?;

    Ok(module.into_token_stream())
}

fn collect_records(items: &mut [Item]) -> syn::Result<Records> {
    let mut records = Records::new();
    for item in items.iter_mut() {
        let Item::Fn(func) = item else { continue };
        for marker in drain_markers(&mut func.attrs) {
            let callback = marker.parse_args::<CallbackRef>()?;
            let key = (func.sig.ident.to_string(), func.sig.inputs.len());
            if records.insert(key, callback).is_some() {
                return Err(error::duplicate_callback(
                    func.sig.ident.span(),
                    &func.sig.ident,
                    func.sig.inputs.len(),
                ));
            }
        }
    }
    Ok(records)
}

fn drain_markers(attrs: &mut Vec<Attribute>) -> Vec<Attribute> {
    let (markers, kept): (Vec<Attribute>, Vec<Attribute>) = attrs
        .drain(..)
        .partition(|attr| callback::is_then_marker(attr.path()));
    *attrs = kept;
    markers
}

fn install_wrappers(items: &mut [Item], mut records: Records) -> syn::Result<()> {
    for item in items.iter_mut() {
        let Item::Fn(func) = item else { continue };
        let key = (func.sig.ident.to_string(), func.sig.inputs.len());
        if let Some(callback) = records.remove(&key) {
            let wrapped = wrap::wrap_function(func, &callback)?;
            *item = Item::Verbatim(wrapped);
        }
    }
    Ok(())
}
