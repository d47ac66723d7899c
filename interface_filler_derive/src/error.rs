use proc_macro2::Span;

use crate::markers::Kind;

#[derive(Debug)]
pub enum Error {
    Syn(syn::Error),
    NotAStruct(Span),
    NotAnInherentImpl(Span),
    NoArguments(Span),
    FieldOnly(Span, Kind),
    ParameterOnly(Span, Kind),
    Receiver(Span, Kind),
    ConflictingBinding(Span),
    UnnamedParameter(Span),
    NoFillerField(Span),
    IndexRange(Span),
    EmptyName(Span),
}

impl From<syn::Error> for Error {
    fn from(value: syn::Error) -> Self {
        Self::Syn(value)
    }
}

impl Error {
    pub fn into_syn_error(self) -> syn::Error {
        let (span, msg): (Span, String) = match self {
            Self::Syn(syn) => return syn,
            Self::NotAStruct(span) => (span, "only structs can have filler fields".into()),
            Self::NotAnInherentImpl(span) => (
                span,
                "`#[caller_params]` can only be applied to an inherent impl block".into(),
            ),
            Self::NoArguments(span) => (span, "`#[caller_params]` takes no arguments".into()),
            Self::FieldOnly(span, kind) => (
                span,
                format!("`#[{kind}]` can only be applied to struct fields"),
            ),
            Self::ParameterOnly(span, kind) => (
                span,
                format!("`#[{kind}]` can only be applied to function parameters"),
            ),
            Self::Receiver(span, kind) => (span, format!("`#[{kind}]` cannot bind the receiver")),
            Self::ConflictingBinding(span) => (
                span,
                "a parameter can be bound by index or by name, not both".into(),
            ),
            Self::UnnamedParameter(span) => (
                span,
                "`#[by_name]` needs a name when the parameter is not a plain identifier".into(),
            ),
            Self::NoFillerField(span) => (span, "expected at least one `#[filler]` field".into()),
            Self::IndexRange(span) => (span, "index does not fit in an i32".into()),
            Self::EmptyName(span) => (span, "name cannot be empty".into()),
        };
        syn::Error::new(span, msg)
    }
}

/// Reduces all of the errors into one, keeping them in source order
pub fn combine(errors: Vec<Error>) -> Result<(), syn::Error> {
    match errors
        .into_iter()
        .map(Error::into_syn_error)
        .reduce(|mut left, right| {
            left.combine(right);
            left
        }) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
