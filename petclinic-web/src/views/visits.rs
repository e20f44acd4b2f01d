use super::{input_field, layout};
use crate::forms::{FieldErrors, VisitForm};
use maud::{Markup, html};
use petclinic_application::dto::{OwnerDto, PetDto};

pub fn visit_form(owner: &OwnerDto, pet: &PetDto, form: &VisitForm, errors: &FieldErrors) -> Markup {
    layout(
        "Visit",
        html! {
            h2 { "New Visit" }
            b { "Pet" }
            table #pet {
                thead {
                    tr { th { "Name" } th { "Birth Date" } th { "Type" } th { "Owner" } }
                }
                tr {
                    td { (pet.name) }
                    td { (pet.birth_date.format("%Y-%m-%d")) }
                    td { (pet.pet_type) }
                    td { (owner.full_name()) }
                }
            }
            form #visit-form method="post" {
                (input_field("Date", "date", "date", &form.date, errors))
                (input_field("Description", "description", "text", &form.description, errors))
                button type="submit" { "Add Visit" }
            }
            b { "Previous Visits" }
            table #previous-visits {
                tr { th { "Date" } th { "Description" } }
                @for visit in &pet.visits {
                    tr {
                        td { (visit.date.format("%Y-%m-%d")) }
                        td { (visit.description) }
                    }
                }
            }
        },
    )
}
