use syn::{Field, FieldsNamed, Token, Type, punctuated::Punctuated};

/// 确保具名字段结构体以给定字段开头
///
/// 已存在同名字段时复用原定义（保留其属性与可见性），仅调整到最前；
/// 否则按给定类型新增一个私有字段。其余字段保持原有相对顺序。
pub(crate) fn ensure_leading_field(fields_named: &mut FieldsNamed, name: &str, ty: &Type) {
    let is_target = |f: &Field| f.ident.as_ref().is_some_and(|i| i == name);

    let leading: Field = match fields_named.named.iter().find(|f| is_target(f)) {
        Some(existing) => existing.clone(),
        None => {
            let ident = syn::Ident::new(name, proc_macro2::Span::call_site());
            syn::parse_quote! { #ident: #ty }
        }
    };

    let mut reordered: Punctuated<Field, Token![,]> = Punctuated::new();
    reordered.push(leading);
    for f in fields_named.named.iter().filter(|f| !is_target(f)) {
        reordered.push(f.clone());
    }
    fields_named.named = reordered;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(fields: &FieldsNamed) -> Vec<String> {
        fields
            .named
            .iter()
            .filter_map(|f| f.ident.as_ref().map(|i| i.to_string()))
            .collect()
    }

    #[test]
    fn inserts_missing_field_first() {
        let mut fields: FieldsNamed = syn::parse_quote!({ name: String, city: String });
        let ty: Type = syn::parse_quote!(Option<i64>);
        ensure_leading_field(&mut fields, "id", &ty);
        assert_eq!(names(&fields), vec!["id", "name", "city"]);
    }

    #[test]
    fn moves_existing_field_to_front_without_duplicating() {
        let mut fields: FieldsNamed =
            syn::parse_quote!({ name: String, pub id: Option<u32>, city: String });
        let ty: Type = syn::parse_quote!(Option<i64>);
        ensure_leading_field(&mut fields, "id", &ty);
        assert_eq!(names(&fields), vec!["id", "name", "city"]);
        let first = fields
            .named
            .first()
            .map(|f| quote::ToTokens::to_token_stream(&f.ty).to_string());
        assert_eq!(first.as_deref(), Some("Option < u32 >"));
    }
}
