//! 兽医目录（只读参考数据）
//!
use petclinic_macros::entity_id;
use serde::{Deserialize, Serialize};

#[entity_id]
pub struct VetId(i64);

#[entity_id]
pub struct SpecialtyId(i64);

/// 兽医专长
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    id: SpecialtyId,
    name: String,
}

impl Specialty {
    pub fn new(id: SpecialtyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> SpecialtyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 兽医，专长按名称排序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vet {
    id: VetId,
    first_name: String,
    last_name: String,
    specialties: Vec<Specialty>,
}

impl Vet {
    pub fn new(
        id: VetId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        mut specialties: Vec<Specialty>,
    ) -> Self {
        specialties.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            specialties,
        }
    }

    pub fn id(&self) -> VetId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specialties_are_sorted_by_name() {
        let vet = Vet::new(
            VetId::new(3),
            "Linda",
            "Douglas",
            vec![
                Specialty::new(SpecialtyId::new(2), "surgery"),
                Specialty::new(SpecialtyId::new(3), "dentistry"),
            ],
        );
        let names: Vec<_> = vet.specialties().iter().map(Specialty::name).collect();
        assert_eq!(names, ["dentistry", "surgery"]);
        assert_eq!(vet.nr_of_specialties(), 2);
    }

    #[test]
    fn serializes_to_json() {
        let vet = Vet::new(VetId::new(1), "James", "Carter", vec![]);
        let json = serde_json::to_value(&vet).unwrap();
        assert_eq!(json["first_name"], "James");
        assert_eq!(json["specialties"].as_array().map(Vec::len), Some(0));
    }
}
