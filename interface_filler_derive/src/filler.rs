use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, spanned::Spanned, Data, DeriveInput, Fields};

use crate::{
    data,
    error::{combine, Error},
    markers::{parse_markers, Attr, Kind, Marker, Target},
    util::{collect_docs, display_tokens},
};

pub fn expand(input: &DeriveInput) -> Result<TokenStream, syn::Error> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => return Err(Error::NotAStruct(data.enum_token.span()).into_syn_error()),
        Data::Union(data) => {
            return Err(Error::NotAStruct(data.union_token.span()).into_syn_error())
        }
    };

    // markers on the struct itself are always misplaced, report them with the field errors
    let mut errors = vec![];
    if let Err(err) = parse_markers(&input.attrs, Target::Item) {
        errors.push(err);
    }

    let fields = match collect_fields(&data.fields) {
        Ok(fields) => Some(fields),
        Err(err) => {
            errors.push(err);
            None
        }
    };
    combine(errors)?;

    let fields = fields.unwrap_or_default();
    if fields.is_empty() {
        return Err(Error::NoFillerField(input.ident.span()).into_syn_error());
    }

    let name = input.ident.to_string();
    let docs = collect_docs(&input.attrs);

    let iter = fields.iter().map(
        |data::Field {
             name,
             ty,
             docs,
             wrappers,
         }| {
            quote! {
                ::interface_filler::FillerFieldDesc {
                    field: #name,
                    ty: #ty,
                    docs: &[ #( #docs ),* ],
                    marker: ::interface_filler::FillerFieldMarker {
                        wrapper_names: &[ #( #wrappers ),* ],
                    },
                }
            }
        },
    );

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::interface_filler::Filler for #ident #ty_generics #where_clause {
            fn filler() -> ::interface_filler::FillerType {
                ::interface_filler::FillerType {
                    name: #name,
                    docs: &[ #( #docs ),* ],
                    fields: &[ #( #iter ),* ],
                }
            }
        }
    })
}

fn collect_fields(fields: &Fields) -> Result<Vec<data::Field>, Error> {
    let mut out = vec![];
    let mut errors = vec![];

    for (i, field) in fields.iter().enumerate() {
        let mut markers = match parse_markers(&field.attrs, Target::Field) {
            Ok(markers) => markers,
            Err(err) => {
                errors.push(err);
                continue;
            }
        };

        let Some(Attr {
            marker: Marker::Filler(wrappers),
            ..
        }) = markers.remove(&Kind::Filler)
        else {
            continue;
        };

        let name = match &field.ident {
            Some(ident) => ident.unraw().to_string(),
            None => i.to_string(),
        };

        out.push(data::Field {
            name,
            ty: display_tokens(&field.ty),
            docs: collect_docs(&field.attrs),
            wrappers,
        });
    }

    combine(errors)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn messages(err: syn::Error) -> Vec<String> {
        err.into_iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn collects_marked_fields() {
        let input: DeriveInput = parse_quote! {
            struct Adapter {
                /// Reads and writes go here
                #[filler("Read", "Write")]
                inner: Box<dyn Stream>,
                #[filler]
                other: Stream,
                plain: u32,
            }
        };
        let Data::Struct(data) = &input.data else {
            unreachable!()
        };

        let fields = collect_fields(&data.fields).unwrap();
        assert_eq!(
            fields,
            [
                data::Field {
                    name: "inner".into(),
                    ty: "Box<dyn Stream>".into(),
                    docs: vec!["Reads and writes go here".into()],
                    wrappers: vec!["Read".into(), "Write".into()],
                },
                data::Field {
                    name: "other".into(),
                    ty: "Stream".into(),
                    docs: vec![],
                    wrappers: vec![],
                },
            ]
        );

        let tokens = expand(&input).unwrap();
        syn::parse2::<syn::File>(tokens).unwrap();
    }

    #[test]
    fn tuple_fields_use_their_index() {
        let input: DeriveInput = parse_quote! {
            struct Wrapped<T: Stream>(u8, #[filler] T) where T: Send;
        };
        let Data::Struct(data) = &input.data else {
            unreachable!()
        };
        let fields = collect_fields(&data.fields).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "1");
        assert_eq!(fields[0].ty, "T");

        let tokens = expand(&input).unwrap();
        let item = syn::parse2::<syn::ItemImpl>(tokens).unwrap();
        assert!(item.generics.where_clause.is_some());
    }

    #[test]
    fn raw_field_names_are_unraw() {
        let input: DeriveInput = parse_quote! {
            struct Adapter {
                #[filler]
                r#type: u8,
            }
        };
        let Data::Struct(data) = &input.data else {
            unreachable!()
        };
        let fields = collect_fields(&data.fields).unwrap();
        assert_eq!(fields[0].name, "type");
    }

    #[test]
    fn rejects_non_structs() {
        let input: DeriveInput = parse_quote! {
            enum Adapter { A }
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(err.to_string(), "only structs can have filler fields");
    }

    #[test]
    fn requires_a_filler_field() {
        let input: DeriveInput = parse_quote! {
            struct Adapter { inner: u32 }
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(err.to_string(), "expected at least one `#[filler]` field");
    }

    #[test]
    fn rejects_misplaced_markers() {
        let input: DeriveInput = parse_quote! {
            #[filler]
            struct Adapter {
                #[by_index(1)]
                a: u32,
                #[filler]
                #[by_name]
                b: u32,
                #[filler]
                #[filler("Read")]
                c: u32,
            }
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(
            messages(err),
            [
                "`#[filler]` can only be applied to struct fields",
                "`#[by_index]` can only be applied to function parameters",
                "`#[by_name]` can only be applied to function parameters",
                "duplicate attribute found",
                "previous use here",
            ]
        );
    }
}
