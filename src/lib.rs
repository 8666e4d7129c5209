// src/lib.rs
extern crate proc_macro;

mod callback;
mod collect;
mod error;
mod wrap;

use proc_macro::TokenStream;
use syn::{ItemFn, ItemMod};

use crate::callback::CallbackRef;

/// Attaches a post-call callback to a function: after every successful call,
/// the callback receives the function's return value, and the value is then
/// returned to the caller unchanged.
///
/// # Arguments
///
/// * A local function name (`#[then(audit)]`), or a `module::function` pair
///   (`#[then(audit::record)]`). Anything else is a compile error, as is a
///   second `then` marker on the same function.
///
/// # Callback signature
///
/// The callback takes the return value by shared reference (`fn(&R)`) and
/// its own return value is discarded. If the function body panics, the
/// callback never runs and the panic propagates; an `Err` return value is an
/// ordinary value and is passed to the callback like any other. If the
/// callback itself panics, that panic propagates to the caller.
///
/// # Examples
///
/// Basic usage:
/// ```rust
/// use then_macro::then;
///
/// fn log_sum(total: &i32) {
///     println!("sum = {total}");
/// }
///
/// #[then(log_sum)]
/// fn add(x: i32, y: i32) -> i32 {
///     x + y
/// }
///
/// assert_eq!(add(2, 3), 5);
/// ```
///
/// A callback in another module:
/// ```rust
/// use then_macro::then;
///
/// mod audit {
///     pub fn record(value: &u64) {
///         println!("audited: {value}");
///     }
/// }
///
/// #[then(audit::record)]
/// fn checksum(data: &[u8]) -> u64 {
///     data.iter().map(|byte| u64::from(*byte)).sum()
/// }
///
/// assert_eq!(checksum(&[1, 2, 3]), 6);
/// ```
///
/// Struct methods:
/// ```rust
/// use then_macro::then;
///
/// fn log_balance(balance: &i64) {
///     println!("balance is now {balance}");
/// }
///
/// struct Account {
///     balance: i64,
/// }
///
/// impl Account {
///     #[then(log_balance)]
///     fn deposit(&mut self, amount: i64) -> i64 {
///         self.balance += amount;
///         self.balance
///     }
/// }
///
/// let mut account = Account { balance: 0 };
/// assert_eq!(account.deposit(25), 25);
/// ```
///
/// Async functions fire the callback once the inner future resolves:
/// ```rust
/// use then_macro::then;
///
/// fn log_len(len: &usize) {
///     println!("fetched {len} bytes");
/// }
///
/// #[then(log_len)]
/// async fn fetch(url: &str) -> usize {
///     url.len()
/// }
/// ```
#[proc_macro_attribute]
pub fn then(attr: TokenStream, item: TokenStream) -> TokenStream {
    let callback = match syn::parse::<CallbackRef>(attr) {
        Ok(callback) => callback,
        Err(e) => return e.to_compile_error().into(),
    };
    let func = match syn::parse::<ItemFn>(item) {
        Ok(func) => func,
        Err(e) => return e.to_compile_error().into(),
    };

    let expanded =
        wrap::reject_duplicate(&func).and_then(|()| wrap::wrap_function(&func, &callback));
    match expanded {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Processes every `#[then(...)]` marker on the top-level functions of an
/// inline module, replacing each marked function with its wrapped form.
///
/// The markers are consumed by this pass, so they need no import of their
/// own inside the module. Each function may carry at most one marker; a
/// second marker for the same function name and arity is a compile error.
/// Only the module's free functions are scanned; associated functions in
/// `impl` blocks take [`macro@then`] directly instead.
///
/// # Examples
///
/// ```rust
/// use then_macro::then_hooks;
///
/// #[then_hooks]
/// mod tally {
///     use std::sync::atomic::{AtomicI32, Ordering};
///
///     pub static TOTAL: AtomicI32 = AtomicI32::new(0);
///
///     fn bump(value: &i32) {
///         TOTAL.fetch_add(*value, Ordering::SeqCst);
///     }
///
///     #[then(bump)]
///     pub fn add(x: i32, y: i32) -> i32 {
///         x + y
///     }
/// }
///
/// assert_eq!(tally::add(2, 3), 5);
/// assert_eq!(tally::TOTAL.load(std::sync::atomic::Ordering::SeqCst), 5);
/// ```
#[proc_macro_attribute]
pub fn then_hooks(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(proc_macro2::Span::call_site(), "`then_hooks` takes no arguments")
            .to_compile_error()
            .into();
    }
    let module = match syn::parse::<ItemMod>(item) {
        Ok(module) => module,
        Err(e) => return e.to_compile_error().into(),
    };

    match collect::expand_module(module) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
