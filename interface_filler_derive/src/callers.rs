use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{
    ext::IdentExt, spanned::Spanned, FnArg, ImplItem, ImplItemFn, Item, ItemImpl, Pat, Type,
};

use crate::{
    data,
    error::{combine, Error},
    markers::{parse_markers, strip_markers, Attr, Kind, Marker, Target},
    util::{collect_docs, display_tokens},
};

pub fn expand(attr: TokenStream, item: TokenStream) -> Result<TokenStream, syn::Error> {
    if !attr.is_empty() {
        return Err(Error::NoArguments(attr.span()).into_syn_error());
    }

    let mut item = match syn::parse2::<Item>(item)? {
        Item::Impl(item) if item.trait_.is_none() => item,
        Item::Impl(ItemImpl {
            trait_: Some((_, path, _)),
            ..
        }) => return Err(Error::NotAnInherentImpl(path.span()).into_syn_error()),
        item => return Err(Error::NotAnInherentImpl(item.span()).into_syn_error()),
    };

    let methods = collect_methods(&item).map_err(Error::into_syn_error)?;
    strip_all(&mut item);

    let owner = match &*item.self_ty {
        Type::Path(ty) => match ty.path.segments.last() {
            Some(segment) => segment.ident.unraw().to_string(),
            None => display_tokens(&ty),
        },
        ty => display_tokens(ty),
    };

    let iter = methods.iter().map(|data::Method { name, docs, params }| {
        let params = params.iter().map(|data::Param { name, ty, binding }| {
            let binding = match binding {
                None => quote!(::core::option::Option::None),
                Some(data::Binding::Position { index, from_end }) => quote! {
                    ::core::option::Option::Some(::interface_filler::Binding::Position(
                        ::interface_filler::ParameterPositionMarker {
                            index: #index,
                            from_end: #from_end,
                        }
                    ))
                },
                Some(data::Binding::Name(name)) => {
                    let name = match name {
                        Some(name) => quote!(::core::option::Option::Some(#name)),
                        None => quote!(::core::option::Option::None),
                    };
                    quote! {
                        ::core::option::Option::Some(::interface_filler::Binding::Name(
                            ::interface_filler::ParameterNameMarker { name: #name }
                        ))
                    }
                }
            };

            quote! {
                ::interface_filler::ParamDesc {
                    name: #name,
                    ty: #ty,
                    binding: #binding,
                }
            }
        });

        quote! {
            ::interface_filler::MethodDesc {
                name: #name,
                docs: &[ #( #docs ),* ],
                params: &[ #( #params ),* ],
            }
        }
    });

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    let table = quote! {
        impl #impl_generics ::interface_filler::CallerParams for #self_ty #where_clause {
            fn caller_params() -> ::interface_filler::CallerTable {
                ::interface_filler::CallerTable {
                    owner: #owner,
                    methods: &[ #( #iter ),* ],
                }
            }
        }
    };

    Ok(quote! {
        #item
        #table
    })
}

/// What to emit next to the error, so a bad marker doesn't also make the impl block disappear
pub fn fallback(item: TokenStream) -> TokenStream {
    match syn::parse2::<ItemImpl>(item.clone()) {
        Ok(mut item) => {
            strip_all(&mut item);
            item.into_token_stream()
        }
        Err(..) => item,
    }
}

fn strip_all(item: &mut ItemImpl) {
    strip_markers(&mut item.attrs);
    for impl_item in &mut item.items {
        let method = match impl_item {
            ImplItem::Fn(method) => method,
            ImplItem::Const(item) => {
                strip_markers(&mut item.attrs);
                continue;
            }
            ImplItem::Type(item) => {
                strip_markers(&mut item.attrs);
                continue;
            }
            ImplItem::Macro(item) => {
                strip_markers(&mut item.attrs);
                continue;
            }
            _ => continue,
        };
        strip_markers(&mut method.attrs);
        for input in &mut method.sig.inputs {
            match input {
                FnArg::Receiver(receiver) => strip_markers(&mut receiver.attrs),
                FnArg::Typed(typed) => strip_markers(&mut typed.attrs),
            }
        }
    }
}

fn collect_methods(item: &ItemImpl) -> Result<Vec<data::Method>, Error> {
    let mut out = vec![];
    let mut errors = vec![];

    if let Err(err) = parse_markers(&item.attrs, Target::Item) {
        errors.push(err);
    }

    for impl_item in &item.items {
        let attrs = match impl_item {
            ImplItem::Fn(method) => {
                match collect_method(method) {
                    Ok(method) => out.push(method),
                    Err(err) => errors.push(err),
                }
                continue;
            }
            ImplItem::Const(item) => &item.attrs,
            ImplItem::Type(item) => &item.attrs,
            ImplItem::Macro(item) => &item.attrs,
            _ => continue,
        };
        if let Err(err) = parse_markers(attrs, Target::Item) {
            errors.push(err);
        }
    }

    combine(errors)?;
    Ok(out)
}

fn collect_method(method: &ImplItemFn) -> Result<data::Method, Error> {
    let mut errors = vec![];
    if let Err(err) = parse_markers(&method.attrs, Target::Item) {
        errors.push(err);
    }

    let mut params = vec![];
    let mut positions = HashMap::new();
    let mut names = HashMap::new();

    for input in &method.sig.inputs {
        let typed = match input {
            FnArg::Receiver(receiver) => {
                if let Err(err) = parse_markers(&receiver.attrs, Target::Receiver) {
                    errors.push(err);
                }
                continue;
            }
            FnArg::Typed(typed) => typed,
        };

        let mut markers = match parse_markers(&typed.attrs, Target::Parameter) {
            Ok(markers) => markers,
            Err(err) => {
                errors.push(err);
                continue;
            }
        };

        let name = match &*typed.pat {
            Pat::Ident(pat) => pat.ident.unraw().to_string(),
            pat => display_tokens(pat),
        };

        let attr = markers
            .remove(&Kind::ByIndex)
            .or_else(|| markers.remove(&Kind::ByName));

        let binding = match attr {
            None => None,
            Some(Attr {
                span,
                marker: Marker::Position { index, from_end },
            }) => {
                if let Some(prev) = positions.insert((index, from_end), span) {
                    errors.push(duplicate_binding(span, prev));
                }
                Some(data::Binding::Position { index, from_end })
            }
            Some(Attr {
                span,
                marker: Marker::Name(explicit),
            }) => {
                if explicit.is_none() && !matches!(&*typed.pat, Pat::Ident(..)) {
                    errors.push(Error::UnnamedParameter(typed.pat.span()));
                }
                let key = explicit.clone().unwrap_or_else(|| name.clone());
                if let Some(prev) = names.insert(key, span) {
                    errors.push(duplicate_binding(span, prev));
                }
                Some(data::Binding::Name(explicit))
            }
            Some(Attr {
                marker: Marker::Filler(..),
                ..
            }) => None,
        };

        params.push(data::Param {
            name,
            ty: display_tokens(&typed.ty),
            binding,
        });
    }

    combine(errors)?;
    Ok(data::Method {
        name: method.sig.ident.unraw().to_string(),
        docs: collect_docs(&method.attrs),
        params,
    })
}

fn duplicate_binding(span: proc_macro2::Span, previous: proc_macro2::Span) -> Error {
    let mut err = syn::Error::new(span, "duplicate binding found");
    err.combine(syn::Error::new(previous, "previous binding here"));
    err.into()
}
