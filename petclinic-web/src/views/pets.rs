use super::{input_field, layout, text_field, version_field};
use crate::forms::{FieldErrors, PetForm};
use maud::{Markup, html};
use petclinic_application::dto::{OwnerDto, PetTypeDto};

pub fn pet_form(
    owner: &OwnerDto,
    form: &PetForm,
    types: &[PetTypeDto],
    errors: &FieldErrors,
    is_new: bool,
) -> Markup {
    let type_error = errors.get("type");
    layout(
        "Pet",
        html! {
            h2 { @if is_new { "New " } "Pet" }
            form #pet-form method="post" {
                div class="form-group" {
                    label { "Owner" }
                    span #owner-name { (owner.full_name()) }
                }
                (text_field("Name", "name", &form.name, errors))
                (input_field("Birth Date", "birthDate", "date", &form.birth_date, errors))
                div class=(if type_error.is_some() { "form-group has-error" } else { "form-group" }) {
                    label for="type" { "Type" }
                    select id="type" name="type" {
                        @for t in types {
                            option value=(t.name) selected[t.name == form.pet_type] { (t.name) }
                        }
                    }
                    @if let Some(message) = type_error {
                        span class="help-inline" data-field="type" { (message) }
                    }
                }
                (version_field(form.version))
                button type="submit" {
                    @if is_new { "Add Pet" } @else { "Update Pet" }
                }
            }
        },
    )
}
