use super::{layout, pagination, text_field, version_field};
use crate::forms::{FieldErrors, OwnerForm};
use maud::{Markup, html};
use petclinic_application::dto::OwnerDto;
use petclinic_domain::persist::Page;
use url::form_urlencoded;

pub fn owners_find(last_name: &str, errors: &FieldErrors) -> Markup {
    layout(
        "Find owners",
        html! {
            h2 { "Find Owners" }
            form #search-owner-form action="/owners" method="get" {
                (text_field("Last name", "lastName", last_name, errors))
                button type="submit" { "Find Owner" }
            }
            a href="/owners/new" { "Add Owner" }
        },
    )
}

fn list_href(last_name: &str, page: usize) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("lastName", last_name)
        .append_pair("page", &page.to_string())
        .finish();
    format!("/owners?{query}")
}

pub fn owner_list(owners: &Page<OwnerDto>, last_name: &str) -> Markup {
    layout(
        "Owners",
        html! {
            h2 { "Owners" }
            table #owners {
                thead {
                    tr { th { "Name" } th { "Address" } th { "City" } th { "Telephone" } th { "Pets" } }
                }
                tbody {
                    @for owner in owners.content() {
                        tr {
                            td {
                                @if let Some(id) = owner.id {
                                    a href={ "/owners/" (id) } { (owner.full_name()) }
                                } @else {
                                    (owner.full_name())
                                }
                            }
                            td { (owner.address) }
                            td { (owner.city) }
                            td { (owner.telephone) }
                            td {
                                (owner.pets.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", "))
                            }
                        }
                    }
                }
            }
            (pagination(owners, |n| list_href(last_name, n)))
        },
    )
}

pub fn owner_details(owner: &OwnerDto) -> Markup {
    let base = owner.id.map(|id| format!("/owners/{id}")).unwrap_or_default();
    layout(
        "Owner information",
        html! {
            h2 { "Owner Information" }
            table #owner {
                tr { th { "Name" } td { b { (owner.full_name()) } } }
                tr { th { "Address" } td { (owner.address) } }
                tr { th { "City" } td { (owner.city) } }
                tr { th { "Telephone" } td { (owner.telephone) } }
            }
            a href={ (base) "/edit" } { "Edit Owner" }
            " "
            a href={ (base) "/pets/new" } { "Add New Pet" }

            h2 { "Pets and Visits" }
            table #pets {
                @for pet in &owner.pets {
                    tr {
                        td valign="top" {
                            dl {
                                dt { "Name" } dd { (pet.name) }
                                dt { "Birth Date" } dd { (pet.birth_date.format("%Y-%m-%d")) }
                                dt { "Type" } dd { (pet.pet_type) }
                            }
                        }
                        td valign="top" {
                            table class="visits" {
                                thead { tr { th { "Visit Date" } th { "Description" } } }
                                @for visit in &pet.visits {
                                    tr {
                                        td { (visit.date.format("%Y-%m-%d")) }
                                        td { (visit.description) }
                                    }
                                }
                                @if let Some(pet_id) = pet.id {
                                    tr {
                                        td { a href={ (base) "/pets/" (pet_id) "/edit" } { "Edit Pet" } }
                                        td { a href={ (base) "/pets/" (pet_id) "/visits/new" } { "Add Visit" } }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn owner_form(form: &OwnerForm, errors: &FieldErrors, is_new: bool) -> Markup {
    layout(
        "Owner",
        html! {
            h2 { @if is_new { "New " } "Owner" }
            form #add-owner-form method="post" {
                (text_field("First Name", "firstName", &form.first_name, errors))
                (text_field("Last Name", "lastName", &form.last_name, errors))
                (text_field("Address", "address", &form.address, errors))
                (text_field("City", "city", &form.city, errors))
                (text_field("Telephone", "telephone", &form.telephone, errors))
                (version_field(form.version))
                button type="submit" {
                    @if is_new { "Add Owner" } @else { "Update Owner" }
                }
            }
        },
    )
}
