use quote::ToTokens;
use syn::{Attribute, Expr, ExprLit, Lit, Meta};

pub fn collect_docs(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) if nv.path.is_ident("doc") => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(lit), ..
                }) => Some(lit.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

/// Renders tokens the way they'd be written by hand, `Box<dyn Read>` rather than `Box < dyn Read >`
pub fn display_tokens(tokens: &impl ToTokens) -> String {
    let raw = tokens.to_token_stream().to_string();
    let chars = raw.chars().collect::<Vec<_>>();

    let mut out = String::with_capacity(raw.len());
    for (i, &ch) in chars.iter().enumerate() {
        if ch != ' ' {
            out.push(ch);
            continue;
        }

        let prev = out.chars().last();
        let next = chars.get(i + 1).copied();

        let glue_prev = matches!(prev, Some('<' | '&' | '(' | '[' | ':' | '\'' | ' '));
        let glue_next = matches!(next, Some('<' | '>' | ',' | ')' | ']' | ':' | ';'))
            || (next == Some('(') && prev.is_some_and(|c| c.is_alphanumeric() || c == '_'));

        if !glue_prev && !glue_next {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{parse_quote, Type};

    #[test]
    fn docs() {
        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[doc = " The delegate"]),
            parse_quote!(#[allow(dead_code)]),
            parse_quote!(#[doc = ""]),
            parse_quote!(#[doc = "  used for reads  "]),
        ];
        assert_eq!(collect_docs(&attrs), ["The delegate", "", "used for reads"]);
    }

    #[test]
    fn tidy_types() {
        let cases: [(Type, &str); 9] = [
            (parse_quote!(u32), "u32"),
            (parse_quote!(Vec<u8>), "Vec<u8>"),
            (parse_quote!(Option<Vec<u8>>), "Option<Vec<u8>>"),
            (parse_quote!(&mut [u8]), "&mut [u8]"),
            (parse_quote!(&'a str), "&'a str"),
            (parse_quote!(std::time::Duration), "std::time::Duration"),
            (parse_quote!(Box<dyn std::io::Read + Send>), "Box<dyn std::io::Read + Send>"),
            (parse_quote!([u8; 4]), "[u8; 4]"),
            (parse_quote!((u8, u16)), "(u8, u16)"),
        ];
        for (ty, expected) in cases {
            assert_eq!(display_tokens(&ty), expected);
        }
    }
}
