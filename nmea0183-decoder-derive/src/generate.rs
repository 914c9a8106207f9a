use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Error, Field, Fields, Ident, Result};

use crate::meta::{MetaAttribute, MetaAttributeType, parse_field_level_attributes};

/// Where a single record field takes its value from.
enum Source {
    /// The framed sentence itself, moved into the record last.
    Sentence,
    /// A positional field decoded through `FromField`.
    Index { index: TokenStream, optional: bool },
    /// A coordinate at `index` with its hemisphere letter at `index + 1`.
    Coordinate(TokenStream),
    /// A user function taking `&RawSentence`.
    With(TokenStream),
}

struct RecordField<'a> {
    field: &'a Field,
    ident: &'a Ident,
    source: Source,
}

impl<'a> RecordField<'a> {
    fn from_field(field: &'a Field) -> Result<Self> {
        let ident = field.ident.as_ref().ok_or_else(|| {
            Error::new(
                Span::call_site(),
                "nmea0183-decoder-derive: Only named fields are supported",
            )
        })?;

        let attributes = parse_field_level_attributes(&field.attrs)?;
        let source = Self::source(ident, &attributes)?;

        Ok(Self {
            field,
            ident,
            source,
        })
    }

    fn source(ident: &Ident, attributes: &[MetaAttribute]) -> Result<Source> {
        let mut sources = attributes.iter().filter(|attr| attr.r#type.is_source());
        let optional = attributes
            .iter()
            .find(|attr| attr.r#type == MetaAttributeType::Optional);

        let source = sources.next().ok_or_else(|| {
            Error::new(
                ident.span(),
                format!(
                    "nmea0183-decoder-derive: Field `{ident}` needs one of `sentence`, `index`, `coordinate` or `with`"
                ),
            )
        })?;

        if let Some(extra) = sources.next() {
            return Err(Error::new(
                extra.span(),
                format!(
                    "nmea0183-decoder-derive: `{}` conflicts with `{}` on field `{ident}`",
                    extra.r#type.keyword(),
                    source.r#type.keyword()
                ),
            ));
        }

        if let Some(optional) = optional {
            if source.r#type != MetaAttributeType::Index {
                return Err(Error::new(
                    optional.span(),
                    "nmea0183-decoder-derive: `optional` is only allowed together with `index`",
                ));
            }
        }

        let arg = || source.arg().cloned().unwrap_or_default();
        let source = match source.r#type {
            MetaAttributeType::Sentence => Source::Sentence,
            MetaAttributeType::Index => Source::Index {
                index: arg(),
                optional: optional.is_some(),
            },
            MetaAttributeType::Coordinate => Source::Coordinate(arg()),
            MetaAttributeType::With => Source::With(arg()),
            MetaAttributeType::Optional => unreachable!("`optional` is not a source attribute"),
        };

        Ok(source)
    }

    fn generate_decode(&self, input: &Ident) -> Option<TokenStream> {
        let ident = self.ident;
        let ty = &self.field.ty;
        let name = ident.to_string();

        let value = match &self.source {
            Source::Sentence => return None,
            Source::Index {
                index,
                optional: false,
            } => quote! {
                <#ty as nmea0183_decoder::FromField>::from_field(&#input, #index, #name)?
            },
            Source::Index {
                index,
                optional: true,
            } => quote! {
                <#ty as nmea0183_decoder::FromField>::from_trailing_field(&#input, #index, #name)?
            },
            Source::Coordinate(index) => quote! {
                #input.coordinate(#index)?
            },
            Source::With(path) => quote! {
                #path(&#input)?
            },
        };

        Some(quote! { let #ident: #ty = #value; })
    }
}

pub fn generate_decode_impl(input: &DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new(
                    name.span(),
                    "nmea0183-decoder-derive: Only structs with named fields are supported",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(Error::new(
                name.span(),
                "nmea0183-decoder-derive: Only structs are supported",
            ));
        }
    };

    let fields = fields
        .iter()
        .map(RecordField::from_field)
        .collect::<Result<Vec<_>>>()?;

    let mut sentence_fields = fields
        .iter()
        .filter(|f| matches!(f.source, Source::Sentence));
    let sentence_field = sentence_fields.next().ok_or_else(|| {
        Error::new(
            name.span(),
            "nmea0183-decoder-derive: Exactly one field must be marked `#[nmea(sentence)]`",
        )
    })?;
    if let Some(duplicate) = sentence_fields.next() {
        return Err(Error::new(
            duplicate.ident.span(),
            "nmea0183-decoder-derive: Exactly one field must be marked `#[nmea(sentence)]`",
        ));
    }

    let input_name = Ident::new("nmea_sentence", Span::call_site());
    let sentence_ident = sentence_field.ident;
    let decodes = fields.iter().filter_map(|f| f.generate_decode(&input_name));
    let idents = fields
        .iter()
        .filter(|f| !matches!(f.source, Source::Sentence))
        .map(|f| f.ident);

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics nmea0183_decoder::Decode for #name #ty_generics #where_clause {
            fn decode(
                #input_name: nmea0183_decoder::RawSentence,
            ) -> ::core::result::Result<Self, nmea0183_decoder::Error> {
                #(#decodes)*

                ::core::result::Result::Ok(Self {
                    #(#idents,)*
                    #sentence_ident: #input_name,
                })
            }
        }
    })
}
