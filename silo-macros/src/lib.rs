mod decode_column;
mod decode_table;

use decode_column::decode_column;
use decode_table::decode_table;
use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemStruct, parse_macro_input};

/// Derives `silo::Entity` from `#[silo(...)]` attributes on a struct and its
/// fields.
///
/// Fields without a `silo` attribute are not mapped to columns. By default
/// every attributed field is collected regardless of position; the
/// `prefix_scan` struct flag switches to collecting only the leading run of
/// mapped fields, stopping at the first unmapped one.
#[proc_macro_derive(Entity, attributes(silo))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let item: ItemStruct = parse_macro_input!(input as ItemStruct);
    let name = &item.ident;
    let table = decode_table(&item);
    let columns = item.fields.iter().map(decode_column).collect::<Vec<_>>();
    let mapped = if table.prefix_scan {
        columns.iter().take_while(|c| c.mapped).collect::<Vec<_>>()
    } else {
        columns.iter().filter(|c| c.mapped).collect::<Vec<_>>()
    };
    let table_name = &table.name;
    let schema_name = &table.schema;
    let column_defs = mapped.iter().map(|c| {
        let name = &c.name;
        let primary_key = c.primary_key;
        quote! { ::silo::ColumnDef { name: #name, primary_key: #primary_key } }
    });
    let values = mapped.iter().map(|c| {
        let field = &c.ident;
        quote! { self.#field.clone().into() }
    });
    quote! {
        impl ::silo::Entity for #name {
            fn table_ref() -> &'static ::silo::TableRef {
                static TABLE_REF: ::silo::TableRef = ::silo::TableRef {
                    name: #table_name,
                    schema: #schema_name,
                };
                &TABLE_REF
            }

            fn columns() -> &'static [::silo::ColumnDef] {
                static COLUMNS: &[::silo::ColumnDef] = &[#(#column_defs),*];
                COLUMNS
            }

            fn row(&self) -> ::silo::Row {
                ::std::vec![#(#values),*].into_iter().collect()
            }
        }
    }
    .into()
}
