//! 表单校验：按字段收集错误，页面据此在对应输入框下方显示提示
//!
use chrono::{Local, NaiveDate};
use petclinic_application::dto::{OwnerDto, PetDto};
use petclinic_application::owners::OwnerDetails;
use petclinic_domain::value_object::Telephone;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const REQUIRED: &str = "must not be blank";
pub const INVALID_DATE: &str = "invalid date, expected yyyy-MM-dd";
pub const INVALID_TELEPHONE: &str = "Telephone must be a 10-digit number";
pub const FUTURE_DATE: &str = "must not be in the future";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录字段错误；同一字段只保留第一条
    pub fn reject(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn require(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.reject(field, REQUIRED);
        }
    }
}

/// 解析 ISO 日期（`yyyy-MM-dd`）；空白输入返回 `Ok(None)`
pub fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| INVALID_DATE)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 主人表单（新建与编辑共用）；编辑时以隐藏字段 `version` 带回加载时的主人版本
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OwnerForm {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub version: Option<usize>,
}

impl OwnerForm {
    pub fn validate(&self) -> Result<OwnerDetails, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("firstName", &self.first_name);
        errors.require("lastName", &self.last_name);
        errors.require("address", &self.address);
        errors.require("city", &self.city);
        errors.require("telephone", &self.telephone);

        let telephone = Telephone::parse(self.telephone.trim());
        if telephone.is_err() {
            errors.reject("telephone", INVALID_TELEPHONE);
        }

        match telephone {
            Ok(telephone) if errors.is_empty() => Ok(OwnerDetails {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                address: self.address.trim().to_string(),
                city: self.city.trim().to_string(),
                telephone,
            }),
            _ => Err(errors),
        }
    }
}

impl From<&OwnerDto> for OwnerForm {
    fn from(owner: &OwnerDto) -> Self {
        Self {
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            address: owner.address.clone(),
            city: owner.city.clone(),
            telephone: owner.telephone.clone(),
            version: Some(owner.version),
        }
    }
}

/// 已通过格式校验的宠物表单
#[derive(Debug, Clone)]
pub struct ValidPet {
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type: String,
}

/// 宠物表单；`type` 为宠物种类名称，`version` 为所属主人的版本（仅编辑）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PetForm {
    pub name: String,
    pub birth_date: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub version: Option<usize>,
}

impl PetForm {
    /// 格式校验；重名由命令处理器在聚合内判定
    pub fn validate(&self) -> Result<ValidPet, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name);
        errors.require("birthDate", &self.birth_date);
        errors.require("type", &self.pet_type);

        let birth_date = match parse_optional_date(&self.birth_date) {
            Ok(Some(date)) if date > today() => {
                errors.reject("birthDate", FUTURE_DATE);
                None
            }
            Ok(date) => date,
            Err(message) => {
                errors.reject("birthDate", message);
                None
            }
        };

        match birth_date {
            Some(birth_date) if errors.is_empty() => Ok(ValidPet {
                name: self.name.trim().to_string(),
                birth_date,
                pet_type: self.pet_type.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}

impl From<&PetDto> for PetForm {
    fn from(pet: &PetDto) -> Self {
        Self {
            name: pet.name.clone(),
            birth_date: pet.birth_date.format("%Y-%m-%d").to_string(),
            pet_type: pet.pet_type.clone(),
            version: None,
        }
    }
}

/// 就诊表单：日期可选（缺省为当天），描述必填
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VisitForm {
    pub date: String,
    pub description: String,
}

impl VisitForm {
    pub fn validate(&self) -> Result<(Option<NaiveDate>, String), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("description", &self.description);

        let date = parse_optional_date(&self.date).unwrap_or_else(|message| {
            errors.reject("date", message);
            None
        });

        if errors.is_empty() {
            Ok((date, self.description.clone()))
        } else {
            Err(errors)
        }
    }
}
