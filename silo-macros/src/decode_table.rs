use quote::ToTokens;
use syn::{ItemStruct, LitStr, parse::ParseBuffer};

pub(crate) struct TableMetadata {
    pub(crate) name: String,
    pub(crate) schema: String,
    pub(crate) prefix_scan: bool,
}

pub(crate) fn decode_table(item: &ItemStruct) -> TableMetadata {
    let mut metadata = TableMetadata {
        // A struct without a table attribute maps to its bare type name
        name: item.ident.to_string(),
        schema: String::new(),
        prefix_scan: false,
    };
    for attr in &item.attrs {
        let meta = &attr.meta;
        if !meta.path().is_ident("silo") {
            continue;
        }
        let Ok(list) = meta.require_list() else {
            panic!("Error while parsing `silo`, use it like: `#[silo(table = \"my_table\")]`");
        };
        let result = list.parse_nested_meta(|arg| {
            if arg.path.is_ident("table") {
                let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                    panic!(
                        "Error while parsing `table`, use it like: `#[silo(table = \"my_table\")]`"
                    );
                };
                metadata.name = v.value();
            } else if arg.path.is_ident("schema") {
                let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                    panic!(
                        "Error while parsing `schema`, use it like: `#[silo(schema = \"my_schema\")]`"
                    );
                };
                metadata.schema = v.value();
            } else if arg.path.is_ident("prefix_scan") {
                let Err(..) = arg.value() else {
                    panic!(
                        "Error while parsing `prefix_scan`, use it like: `#[silo(prefix_scan)]`"
                    );
                };
                metadata.prefix_scan = true;
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
