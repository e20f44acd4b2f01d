use syn::meta::ParseNestedMeta;
use syn::{LitBool, Type};

/// 属性参数：`id = Type`、`debug = bool`、`default = bool`
///
/// `allow_id` 为 false 时（`#[value_object]`）拒绝 `id`，但接受 `default`。
pub(crate) struct MacroArgs {
    allow_id: bool,
    pub(crate) id: Option<Type>,
    pub(crate) debug: Option<bool>,
    pub(crate) default: Option<bool>,
}

impl MacroArgs {
    pub(crate) fn with_id() -> Self {
        Self {
            allow_id: true,
            id: None,
            debug: None,
            default: None,
        }
    }

    pub(crate) fn without_id() -> Self {
        Self {
            allow_id: false,
            ..Self::with_id()
        }
    }

    pub(crate) fn derive_debug(&self) -> bool {
        self.debug.unwrap_or(true)
    }

    pub(crate) fn derive_default(&self) -> bool {
        self.default.unwrap_or(true)
    }

    pub(crate) fn parse(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if self.allow_id && meta.path.is_ident("id") {
            if self.id.is_some() {
                return Err(meta.error("duplicate key `id`"));
            }
            self.id = Some(meta.value()?.parse()?);
            return Ok(());
        }
        if meta.path.is_ident("debug") {
            return parse_flag(&meta, &mut self.debug, "debug");
        }
        if !self.allow_id && meta.path.is_ident("default") {
            return parse_flag(&meta, &mut self.default, "default");
        }
        Err(meta.error(if self.allow_id {
            "expected `id` or `debug`"
        } else {
            "expected `debug` or `default`"
        }))
    }
}

fn parse_flag(meta: &ParseNestedMeta, slot: &mut Option<bool>, key: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate key `{key}`")));
    }
    let lit: LitBool = meta.value()?.parse()?;
    *slot = Some(lit.value);
    Ok(())
}
