//! maud 页面模板
//!
mod owners;
mod pets;
mod vets;
mod visits;

pub use owners::{owner_details, owner_form, owner_list, owners_find};
pub use pets::pet_form;
pub use vets::vet_list;
pub use visits::visit_form;

use crate::forms::FieldErrors;
use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};
use petclinic_domain::persist::Page;

pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "PetClinic :: " (title) }
            }
            body {
                nav {
                    a href="/" { "Home" }
                    " | "
                    a href="/owners/find" { "Find owners" }
                    " | "
                    a href="/vets.html" { "Veterinarians" }
                }
                main { (content) }
            }
        }
    }
}

pub fn welcome() -> Markup {
    layout(
        "Welcome",
        html! {
            h2 { "Welcome" }
            p { "Find owners, register their pets and record visits to the clinic." }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    layout(
        "Error",
        html! {
            h2 { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
            p #error-message { (message) }
        },
    )
}

/// 带标签与错误提示的单行输入框；`name` 同时作为元素 id
fn input_field(label: &str, name: &str, kind: &str, value: &str, errors: &FieldErrors) -> Markup {
    let error = errors.get(name);
    html! {
        div class=(if error.is_some() { "form-group has-error" } else { "form-group" }) {
            label for=(name) { (label) }
            input id=(name) name=(name) type=(kind) value=(value);
            @if let Some(message) = error {
                span class="help-inline" data-field=(name) { (message) }
            }
        }
    }
}

/// 编辑表单携带的聚合版本
fn version_field(version: Option<usize>) -> Markup {
    html! {
        @if let Some(version) = version {
            input type="hidden" name="version" value=(version);
        }
    }
}

fn text_field(label: &str, name: &str, value: &str, errors: &FieldErrors) -> Markup {
    input_field(label, name, "text", value, errors)
}

/// 分页导航；`href` 根据页号（从 1 开始）生成链接
fn pagination<T>(page: &Page<T>, href: impl Fn(usize) -> String) -> Markup {
    let current = page.number().saturating_add(1);
    let total = page.total_pages();
    html! {
        @if total > 1 {
            div class="pagination" {
                span { "Pages: [" }
                @for n in 1..=total {
                    @if n == current {
                        span class="current" { (n) }
                    } @else {
                        a href=(href(n)) { (n) }
                    }
                    " "
                }
                span { "]" }
            }
        }
    }
}
