use super::{layout, pagination};
use maud::{Markup, html};
use petclinic_application::dto::VetDto;
use petclinic_domain::persist::Page;

pub fn vet_list(vets: &Page<VetDto>) -> Markup {
    layout(
        "Veterinarians",
        html! {
            h2 { "Veterinarians" }
            table #vets {
                thead { tr { th { "Name" } th { "Specialties" } } }
                tbody {
                    @for vet in vets.content() {
                        tr {
                            td { (vet.first_name) " " (vet.last_name) }
                            td {
                                @if vet.specialties.is_empty() {
                                    "none"
                                } @else {
                                    (vet.specialties.join(" "))
                                }
                            }
                        }
                    }
                }
            }
            (pagination(vets, |n| format!("/vets.html?page={n}")))
        },
    )
}
