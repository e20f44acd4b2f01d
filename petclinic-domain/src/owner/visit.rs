use chrono::{Local, NaiveDate};
use petclinic_macros::{entity, entity_id};

use super::PetId;
use crate::error::{DomainError, DomainResult};

#[entity_id]
pub struct VisitId(i64);

/// 就诊记录
///
/// 新记录通过 [`Visit::new`] / [`Visit::today`] 创建（校验描述非空）；
/// `Visit::builder()` 用于从存储重建。
#[entity(id = VisitId)]
#[derive(bon::Builder)]
pub struct Visit {
    pet_id: Option<PetId>,
    date: NaiveDate,
    #[builder(into)]
    description: String,
}

impl Visit {
    pub fn new(date: NaiveDate, description: impl Into<String>) -> DomainResult<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(DomainError::invalid_value("visit description must not be blank"));
        }
        Ok(Self {
            id: None,
            pet_id: None,
            date,
            description,
        })
    }

    /// 以本地当前日期创建就诊记录
    pub fn today(description: impl Into<String>) -> DomainResult<Self> {
        Self::new(Local::now().date_naive(), description)
    }

    pub fn pet_id(&self) -> Option<PetId> {
        self.pet_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub(super) fn attach_to(&mut self, pet_id: PetId) {
        self.pet_id = Some(pet_id);
    }
}
