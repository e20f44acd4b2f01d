use quote::ToTokens;
use syn::{Attribute, Path, Token, punctuated::Punctuated};

/// 将 `#[derive(...)]` 与其余属性拆开，返回 (其余属性, 已声明的派生)
fn partition_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<Path>) {
    let mut others = Vec::new();
    let mut declared = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("derive") {
            others.push(attr.clone());
            continue;
        }
        if let Ok(list) = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated) {
            declared.extend(list);
        }
    }
    (others, declared)
}

// Serialize 与 serde::Serialize 视为同一派生
fn derive_key(path: &Path) -> String {
    match path.segments.last() {
        Some(last) => {
            let ident = last.ident.to_string();
            match ident.as_str() {
                "Serialize" | "Deserialize" => format!("serde::{ident}"),
                _ => ident,
            }
        }
        None => path.to_token_stream().to_string(),
    }
}

/// 合并宏要求的派生与用户已声明的派生（去重，required 在前）
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<Path>) {
    let (others, declared) = partition_derives(attrs);

    let mut seen = std::collections::HashSet::new();
    let merged: Vec<Path> = required
        .into_iter()
        .chain(declared)
        .filter(|p| seen.insert(derive_key(p)))
        .collect();

    let derive: Attribute = syn::parse_quote!(#[derive(#(#merged),*)]);
    *attrs = std::iter::once(derive).chain(others).collect();
}
