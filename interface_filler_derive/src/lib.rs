use syn::{parse_macro_input, DeriveInput};

#[proc_macro_derive(Filler, attributes(filler, by_index, by_name))]
pub fn filler(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match filler::expand(&input) {
        Ok(ast) => ast.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

#[proc_macro_attribute]
pub fn caller_params(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = proc_macro2::TokenStream::from(item);
    match callers::expand(attr.into(), item.clone()) {
        Ok(ast) => ast.into(),
        Err(err) => {
            let mut out = err.into_compile_error();
            out.extend(callers::fallback(item));
            out.into()
        }
    }
}

mod callers;
mod data;
mod error;
mod filler;
mod markers;
mod util;
