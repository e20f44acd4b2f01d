use crate::derive_utils::apply_derives;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Fields, ItemStruct, Path};

const DERIVES: [&str; 10] = [
    "Clone",
    "Copy",
    "Debug",
    "serde::Serialize",
    "serde::Deserialize",
    "PartialEq",
    "Eq",
    "PartialOrd",
    "Ord",
    "Hash",
];

/// 展开 `#[entity_id]`：单字段 tuple struct 形式的代理主键（数据库自增值）
///
/// 生成 `new` / `into_inner`，以及 Display、FromStr（路径参数解析）与内部类型间的 From 转换。
pub(crate) fn expand(mut st: ItemStruct) -> syn::Result<TokenStream> {
    let inner = match &st.fields {
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => fields.unnamed[0].ty.clone(),
        _ => {
            return Err(syn::Error::new_spanned(
                &st.ident,
                "#[entity_id] expects a single-field tuple struct, e.g. `struct OwnerId(i64);`",
            ));
        }
    };

    let derives = DERIVES
        .iter()
        .map(|d| syn::parse_str::<Path>(d))
        .collect::<syn::Result<Vec<_>>>()?;
    apply_derives(&mut st.attrs, derives);

    let name = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    Ok(quote! {
        #st

        impl #impl_generics #name #ty_generics #where_clause {
            pub const fn new(value: #inner) -> Self {
                Self(value)
            }

            pub const fn into_inner(self) -> #inner {
                self.0
            }
        }

        impl #impl_generics ::core::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl #impl_generics ::core::str::FromStr for #name #ty_generics #where_clause {
            type Err = <#inner as ::core::str::FromStr>::Err;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl #impl_generics ::core::convert::From<#inner> for #name #ty_generics #where_clause {
            fn from(value: #inner) -> Self {
                Self(value)
            }
        }

        impl #impl_generics ::core::convert::From<#name #ty_generics> for #inner #where_clause {
            fn from(id: #name #ty_generics) -> Self {
                id.0
            }
        }
    })
}
