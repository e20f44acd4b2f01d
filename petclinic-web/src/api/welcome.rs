use crate::views;
use maud::Markup;

#[tracing::instrument]
pub(super) async fn handler() -> Markup {
    views::welcome()
}
