//! 参考数据：宠物种类与兽医目录（启动时幂等写入）
//!
use petclinic_domain::owner::{PetType, PetTypeId};
use petclinic_domain::vet::{Specialty, SpecialtyId, Vet, VetId};

const PET_TYPES: [(i64, &str); 6] = [
    (1, "cat"),
    (2, "dog"),
    (3, "lizard"),
    (4, "snake"),
    (5, "bird"),
    (6, "hamster"),
];

const SPECIALTIES: [(i64, &str); 3] = [(1, "radiology"), (2, "surgery"), (3, "dentistry")];

const VETS: [(i64, &str, &str, &[i64]); 6] = [
    (1, "James", "Carter", &[]),
    (2, "Helen", "Leary", &[1]),
    (3, "Linda", "Douglas", &[2, 3]),
    (4, "Rafael", "Ortega", &[2]),
    (5, "Henry", "Stevens", &[1]),
    (6, "Sharon", "Jenkins", &[]),
];

pub fn pet_types() -> Vec<PetType> {
    PET_TYPES
        .iter()
        .map(|(id, name)| PetType::new(PetTypeId::new(*id), *name))
        .collect()
}

pub fn specialties() -> Vec<Specialty> {
    SPECIALTIES
        .iter()
        .map(|(id, name)| Specialty::new(SpecialtyId::new(*id), *name))
        .collect()
}

pub fn vets() -> Vec<Vet> {
    let all = specialties();
    VETS.iter()
        .map(|(id, first, last, specs)| {
            let specialties = all
                .iter()
                .filter(|s| specs.contains(&s.id().into_inner()))
                .cloned()
                .collect();
            Vet::new(VetId::new(*id), *first, *last, specialties)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linda_douglas_has_two_sorted_specialties() {
        let vets = vets();
        let linda = vets.iter().find(|v| v.last_name() == "Douglas").unwrap();
        let names: Vec<_> = linda.specialties().iter().map(Specialty::name).collect();
        assert_eq!(names, ["dentistry", "surgery"]);
        assert_eq!(vets.len(), 6);
    }
}
