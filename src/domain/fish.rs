// Fish domain model
use serde::{Deserialize, Deserializer, Serialize};

/// A fish as held by the service. `gender` keeps the text it was added with;
/// use [`Gender::normalize`] to classify it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fish {
    pub id: i32,
    pub fish_type: String,
    pub subtype: String,
    pub color: String,
    pub gender: String,
    pub purchase_date: String,
    pub count: i32,
    pub taxonomy: Option<Taxonomy>,
    pub ecosystem: Option<Ecosystem>,
}

/// Scientific name used to look a fish up in the species directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    pub genus: String,
    pub species: String,
}

/// Where a species lives in the wild. Only filled in when enrichment succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ecosystem {
    pub name: String,
    pub ecosystem_type: String,
    pub location: String,
    pub salinity: String,
    pub climate: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    #[default]
    Unspecified,
    Male,
    Female,
}

impl Gender {
    /// Case-insensitive match against MALE and FEMALE; everything else is unspecified.
    pub fn normalize(label: &str) -> Self {
        if label.eq_ignore_ascii_case("MALE") {
            Gender::Male
        } else if label.eq_ignore_ascii_case("FEMALE") {
            Gender::Female
        } else {
            Gender::Unspecified
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Unspecified => "UNSPECIFIED",
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

// Clients send the label in whatever case they like.
impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map(Gender::normalize).unwrap_or_default())
    }
}
