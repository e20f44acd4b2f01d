//! 领域建模过程宏（petclinic-macros）
//!
//! - `#[entity]`：为实体补齐代理主键字段 `id: Option<Id>` 并实现 `Entity`
//! - `#[entity_id]`：为单字段 tuple struct 形式的标识生成常用实现
//! - `#[value_object]`：为值对象合并值语义所需的派生
//!
//! 生成代码通过 `::petclinic_domain` 路径引用领域层 trait。
//!
use proc_macro::TokenStream;
use syn::{Item, ItemStruct, parse_macro_input};

mod args;
mod derive_utils;
mod entity;
mod entity_id;
mod field_utils;
mod value_object;

fn emit(result: syn::Result<proc_macro2::TokenStream>) -> TokenStream {
    result.unwrap_or_else(syn::Error::into_compile_error).into()
}

/// 实体宏
///
/// ```ignore
/// #[entity(id = PetId)]
/// pub struct Pet {
///     name: String,
/// }
/// ```
///
/// 展开后结构体首字段为 `id: Option<PetId>`，并实现
/// `::petclinic_domain::entity::Entity`。
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = args::MacroArgs::with_id();
    let parser = syn::meta::parser(|meta| args.parse(meta));
    parse_macro_input!(attr with parser);
    let st = parse_macro_input!(item as ItemStruct);
    emit(entity::expand(args, st))
}

/// 实体标识宏，例如 `#[entity_id] pub struct OwnerId(i64);`
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[entity_id] takes no arguments",
        )
        .into_compile_error()
        .into();
    }
    let st = parse_macro_input!(item as ItemStruct);
    emit(entity_id::expand(st))
}

/// 值对象宏
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = args::MacroArgs::without_id();
    let parser = syn::meta::parser(|meta| args.parse(meta));
    parse_macro_input!(attr with parser);
    let item = parse_macro_input!(item as Item);
    emit(value_object::expand(args, item))
}
