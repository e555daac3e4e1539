use quote::ToTokens;
use syn::{Field, Ident, LitStr, Meta, parse::ParseBuffer};

pub(crate) struct ColumnMetadata {
    pub(crate) ident: Ident,
    pub(crate) name: String,
    pub(crate) primary_key: bool,
    pub(crate) mapped: bool,
}

pub(crate) fn decode_column(field: &Field) -> ColumnMetadata {
    let ident = field
        .ident
        .clone()
        .expect("Field is expected to have a name");
    let mut name = ident.to_string();
    if name.starts_with('_') {
        name.remove(0);
    }
    let mut metadata = ColumnMetadata {
        ident,
        name,
        primary_key: false,
        mapped: false,
    };
    for attr in &field.attrs {
        let meta = &attr.meta;
        if !meta.path().is_ident("silo") {
            continue;
        }
        metadata.mapped = true;
        if let Meta::Path(..) = meta {
            // Bare `#[silo]` maps the field under its own name
            continue;
        }
        let Ok(list) = meta.require_list() else {
            panic!("Error while parsing `silo`, use it like: `#[silo(column = \"my_column\")]`");
        };
        let result = list.parse_nested_meta(|arg| {
            if arg.path.is_ident("column") {
                let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                    panic!(
                        "Error while parsing `column`, use it like: `#[silo(column = \"my_column\")]`"
                    );
                };
                metadata.name = v.value();
            } else if arg.path.is_ident("primary_key") {
                let Err(..) = arg.value() else {
                    panic!(
                        "Error while parsing `primary_key`, use it like: `#[silo(primary_key)]`"
                    );
                };
                metadata.primary_key = true;
            } else {
                panic!(
                    "Unknown attribute `{}` inside silo macro",
                    arg.path.to_token_stream()
                );
            }
            Ok(())
        });
        if let Err(error) = result {
            panic!("{}", error);
        }
    }
    metadata
}
