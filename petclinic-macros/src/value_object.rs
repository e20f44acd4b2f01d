use crate::args::MacroArgs;
use crate::derive_utils::apply_derives;
use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Attribute, Item, Path, parse_quote};

/// 展开 `#[value_object(debug = bool, default = bool)]`：结构体或枚举，按值比较
///
/// 派生 Default、Clone、serde、PartialEq、Eq；`debug = false` 时不派生 Debug，
/// `default = false` 时不派生 Default（缺省值不满足不变量的值对象）。
/// 枚举需自行以 `#[default]` 标注缺省变体。
pub(crate) fn expand(args: MacroArgs, mut item: Item) -> syn::Result<TokenStream> {
    let attrs: &mut Vec<Attribute> = match &mut item {
        Item::Struct(st) => &mut st.attrs,
        Item::Enum(en) => &mut en.attrs,
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "#[value_object] supports only structs and enums",
            ));
        }
    };

    let mut derives: Vec<Path> = Vec::with_capacity(7);
    if args.derive_debug() {
        derives.push(parse_quote!(Debug));
    }
    if args.derive_default() {
        derives.push(parse_quote!(Default));
    }
    derives.extend([
        parse_quote!(Clone),
        parse_quote!(serde::Serialize),
        parse_quote!(serde::Deserialize),
        parse_quote!(PartialEq),
        parse_quote!(Eq),
    ]);
    apply_derives(attrs, derives);

    Ok(item.into_token_stream())
}
