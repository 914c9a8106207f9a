use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use syn::{
    Attribute, Error, Expr, Ident, Lit, Path, Result, Token, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

/// The keywords accepted inside `#[nmea(...)]` on a field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetaAttributeType {
    Coordinate,
    Index,
    Optional,
    Sentence,
    With,
}

const KEYWORDS: [(&str, MetaAttributeType); 5] = [
    ("coordinate", MetaAttributeType::Coordinate),
    ("index", MetaAttributeType::Index),
    ("optional", MetaAttributeType::Optional),
    ("sentence", MetaAttributeType::Sentence),
    ("with", MetaAttributeType::With),
];

impl MetaAttributeType {
    fn from_ident(ident: &Ident) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(keyword, _)| ident == keyword)
            .map(|&(_, r#type)| r#type)
    }

    pub fn keyword(self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|(_, r#type)| *r#type == self)
            .map_or("", |&(keyword, _)| keyword)
    }

    /// Attributes that decide where a field's value comes from.
    pub fn is_source(self) -> bool {
        self != Self::Optional
    }
}

/// One keyword of a field's `#[nmea(...)]` list, with its argument if any.
#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: Option<TokenStream>,
    span: Span,
}

impl MetaAttribute {
    pub fn arg(&self) -> Option<&TokenStream> {
        self.arg.as_ref()
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let r#type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(
                ident.span(),
                format!("nmea0183-decoder-derive: Unknown nmea attribute `{ident}`"),
            )
        })?;

        let arg = match r#type {
            MetaAttributeType::Coordinate | MetaAttributeType::Index => {
                Some(parse_argument::<Expr>(input)?)
            }
            MetaAttributeType::With => Some(parse_argument::<Path>(input)?),
            MetaAttributeType::Optional | MetaAttributeType::Sentence => None,
        };

        Ok(MetaAttribute {
            r#type,
            arg,
            span: ident.span(),
        })
    }
}

/// Accepts `= value`, `= "value"` or `(value)`.
fn parse_argument<P>(input: ParseStream) -> Result<TokenStream>
where
    P: Parse + ToTokens,
{
    let parsed: P = if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        content.parse()?
    } else if input.parse::<Option<Token![=]>>()?.is_some() {
        match input.fork().parse::<Lit>() {
            Ok(Lit::Str(string)) => {
                input.parse::<Lit>()?;
                string.parse()?
            }
            _ => input.parse()?,
        }
    } else {
        return Err(Error::new(
            input.span(),
            "nmea0183-decoder-derive: Expected `= <value>` or `(<value>)`",
        ));
    };

    Ok(parsed.into_token_stream())
}

/// Collects every keyword of the `#[nmea(...)]` attributes on a field,
/// rejecting repeated keywords.
pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut attributes: Vec<MetaAttribute> = Vec::new();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("nmea")) {
        let list =
            attr.parse_args_with(Punctuated::<MetaAttribute, Token![,]>::parse_terminated)?;

        for meta in list {
            if attributes.iter().any(|seen| seen.r#type == meta.r#type) {
                return Err(Error::new(
                    meta.span(),
                    format!(
                        "nmea0183-decoder-derive: Duplicate nmea attribute `{}`",
                        meta.r#type.keyword()
                    ),
                ));
            }
            attributes.push(meta);
        }
    }

    Ok(attributes)
}
