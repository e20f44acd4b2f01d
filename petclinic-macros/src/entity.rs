use crate::args::MacroArgs;
use crate::derive_utils::apply_derives;
use crate::field_utils::ensure_leading_field;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Fields, ItemStruct, Path, Type, parse_quote};

/// 展开 `#[entity(id = IdType, debug = bool)]`
///
/// 结构体首字段变为 `id: Option<IdType>`（未持久化时为 `None`，`id` 缺省为 `i64`），
/// 派生 Clone 与 serde，`debug = false` 时不派生 Debug，并实现 `Entity`。
pub(crate) fn expand(args: MacroArgs, mut st: ItemStruct) -> syn::Result<TokenStream> {
    let Fields::Named(fields) = &mut st.fields else {
        return Err(syn::Error::new_spanned(
            &st.ident,
            "#[entity] requires a struct with named fields",
        ));
    };

    let id_type: Type = args.id.clone().unwrap_or_else(|| parse_quote!(i64));
    ensure_leading_field(fields, "id", &parse_quote!(Option<#id_type>));

    let mut derives: Vec<Path> = Vec::with_capacity(4);
    if args.derive_debug() {
        derives.push(parse_quote!(Debug));
    }
    derives.extend([
        parse_quote!(Clone),
        parse_quote!(serde::Serialize),
        parse_quote!(serde::Deserialize),
    ]);
    apply_derives(&mut st.attrs, derives);

    let name = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    Ok(quote! {
        #st

        impl #impl_generics ::petclinic_domain::entity::Entity for #name #ty_generics #where_clause {
            type Id = #id_type;

            fn id(&self) -> ::core::option::Option<&#id_type> {
                self.id.as_ref()
            }

            fn assign_id(&mut self, id: #id_type) {
                self.id.replace(id);
            }
        }
    })
}
