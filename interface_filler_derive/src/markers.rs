use std::collections::HashMap;

use proc_macro2::Span;
use syn::{
    bracketed, parse::ParseStream, punctuated::Punctuated, spanned::Spanned, Attribute, Ident,
    LitBool, LitInt, LitStr, Meta, Token,
};

use crate::error::Error;

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Kind {
    ByIndex,
    ByName,
    Filler,
}

impl Kind {
    pub fn of(attr: &Attribute) -> Option<Self> {
        let path = attr.path();
        [Self::ByIndex, Self::ByName, Self::Filler]
            .into_iter()
            .find(|kind| path.is_ident(kind.as_str()))
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ByIndex => "by_index",
            Self::ByName => "by_name",
            Self::Filler => "filler",
        }
    }

    const fn is_parameter(&self) -> bool {
        matches!(self, Self::ByIndex | Self::ByName)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declaration a marker was found on
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Target {
    Field,
    Parameter,
    Receiver,
    Item,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Marker {
    Position { index: i32, from_end: bool },
    Name(Option<String>),
    Filler(Vec<String>),
}

#[derive(Debug)]
pub struct Attr {
    pub span: Span,
    pub marker: Marker,
}

/// Drops our markers, leaving every other attribute in place
pub fn strip_markers(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| Kind::of(attr).is_none())
}

/// Parses every marker found on `target`, rejecting the ones that don't belong there
pub fn parse_markers(attrs: &[Attribute], target: Target) -> Result<HashMap<Kind, Attr>, Error> {
    let mut errors = vec![];
    let mut out = HashMap::<Kind, Attr>::new();
    let mut binding: Option<(Kind, Span)> = None;

    for attr in attrs {
        let Some(kind) = Kind::of(attr) else {
            continue;
        };
        let span = attr.path().span();

        let misplaced = match target {
            Target::Parameter if kind.is_parameter() => None,
            Target::Field if !kind.is_parameter() => None,
            Target::Receiver if kind.is_parameter() => Some(Error::Receiver(span, kind)),
            _ if kind.is_parameter() => Some(Error::ParameterOnly(span, kind)),
            _ => Some(Error::FieldOnly(span, kind)),
        };
        if let Some(err) = misplaced {
            errors.push(err);
            continue;
        }

        let marker = match parse_marker(attr, kind) {
            Ok(marker) => marker,
            Err(err) => {
                errors.push(err);
                continue;
            }
        };

        if let Some(previous) = out.get(&kind) {
            let mut err = syn::Error::new(span, "duplicate attribute found");
            err.combine(syn::Error::new(previous.span, "previous use here"));
            errors.push(err.into());
            continue;
        }

        if kind.is_parameter() {
            match binding {
                Some((first, first_span)) if first != kind => {
                    errors.push(Error::ConflictingBinding(span));
                    errors.push(syn::Error::new(first_span, "first binding here").into());
                    continue;
                }
                _ => binding = Some((kind, span)),
            }
        }

        out.insert(kind, Attr { span, marker });
    }

    crate::error::combine(errors)?;
    Ok(out)
}

fn parse_marker(attr: &Attribute, kind: Kind) -> Result<Marker, Error> {
    let list = match &attr.meta {
        Meta::Path(..) => {
            return Ok(match kind {
                Kind::ByIndex => Marker::Position {
                    index: 0,
                    from_end: false,
                },
                Kind::ByName => Marker::Name(None),
                Kind::Filler => Marker::Filler(vec![]),
            })
        }
        Meta::List(list) => list,
        Meta::NameValue(nv) => {
            let usage = match kind {
                Kind::ByIndex => "expected `#[by_index]` or `#[by_index(index, from_end)]`",
                Kind::ByName => "expected `#[by_name]` or `#[by_name(\"name\")]`",
                Kind::Filler => "expected `#[filler]` or `#[filler(\"Wrapper\", ...)]`",
            };
            return Err(syn::Error::new(nv.eq_token.span(), usage).into());
        }
    };

    // errors that aren't syntax errors are stashed so the parser can finish
    let mut semantic = None;
    let marker = match kind {
        Kind::ByIndex => list.parse_args_with(|input: ParseStream| {
            parse_position(input, &mut semantic)
        })?,
        Kind::ByName => {
            list.parse_args_with(|input: ParseStream| parse_name(input, &mut semantic))?
        }
        Kind::Filler => {
            list.parse_args_with(|input: ParseStream| parse_wrappers(input, &mut semantic))?
        }
    };

    match semantic {
        Some(err) => Err(err),
        None => Ok(marker),
    }
}

// (), (2), (-1), (2, from_end), (2, from_end = false)
fn parse_position(input: ParseStream, semantic: &mut Option<Error>) -> syn::Result<Marker> {
    if input.is_empty() {
        return Ok(Marker::Position {
            index: 0,
            from_end: false,
        });
    }

    let negative = input.parse::<Option<Token![-]>>()?.is_some();
    let lit = input.parse::<LitInt>()?;
    let value = lit.base10_parse::<i64>()?;
    let value = if negative { -value } else { value };
    let index = i32::try_from(value).unwrap_or_else(|_| {
        semantic.get_or_insert(Error::IndexRange(lit.span()));
        0
    });

    let mut from_end = false;
    if input.parse::<Option<Token![,]>>()?.is_some() && !input.is_empty() {
        let ident = input.parse::<Ident>()?;
        if ident != "from_end" {
            return Err(syn::Error::new(
                ident.span(),
                format!("unknown ident: {ident}, supported: from_end"),
            ));
        }
        from_end = match input.parse::<Option<Token![=]>>()? {
            Some(..) => input.parse::<LitBool>()?.value,
            None => true,
        };
        input.parse::<Option<Token![,]>>()?;
    }

    Ok(Marker::Position { index, from_end })
}

// (), ("name"), (name)
fn parse_name(input: ParseStream, semantic: &mut Option<Error>) -> syn::Result<Marker> {
    if input.is_empty() {
        return Ok(Marker::Name(None));
    }

    let (name, span) = if input.peek(LitStr) {
        let lit = input.parse::<LitStr>()?;
        (lit.value(), lit.span())
    } else {
        let ident = input.parse::<Ident>()?;
        (ident.to_string(), ident.span())
    };
    input.parse::<Option<Token![,]>>()?;

    if name.trim().is_empty() {
        semantic.get_or_insert(Error::EmptyName(span));
    }
    Ok(Marker::Name(Some(name)))
}

// (), ("A", "B"), (wrappers = ["A", "B"])
fn parse_wrappers(input: ParseStream, semantic: &mut Option<Error>) -> syn::Result<Marker> {
    let names = if input.peek(Ident) && input.peek2(Token![=]) {
        let ident = input.parse::<Ident>()?;
        if ident != "wrappers" {
            return Err(syn::Error::new(
                ident.span(),
                format!("unknown ident: {ident}, supported: wrappers"),
            ));
        }
        input.parse::<Token![=]>()?;
        let content;
        bracketed!(content in input);
        let names = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
        input.parse::<Option<Token![,]>>()?;
        names
    } else {
        Punctuated::<LitStr, Token![,]>::parse_terminated(input)?
    };

    let mut seen = HashMap::new();
    let mut out = vec![];
    for lit in names {
        let name = lit.value();
        if name.trim().is_empty() {
            semantic.get_or_insert(Error::EmptyName(lit.span()));
            continue;
        }
        if let Some(prev) = seen.insert(name.clone(), lit.span()) {
            if semantic.is_none() {
                let mut err = syn::Error::new(lit.span(), "duplicate wrapper name found");
                err.combine(syn::Error::new(prev, "previous use here"));
                *semantic = Some(err.into());
            }
            continue;
        }
        out.push(name);
    }

    Ok(Marker::Filler(out))
}
