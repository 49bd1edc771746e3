// Wire messages of the trackmyfish v1alpha1 API, exchanged as JSON.
//
// Optional readings are carried by member presence: a missing (or null)
// member is "not measured", a present member carries the value, zero included.
use crate::domain::fish::Gender;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fish {
    pub id: i32,
    #[serde(rename = "type")]
    pub fish_type: String,
    pub subtype: String,
    pub color: String,
    pub gender: Gender,
    pub purchase_date: String,
    pub count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecosystem: Option<Ecosystem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ecosystem {
    pub name: String,
    #[serde(rename = "type")]
    pub ecosystem_type: String,
    pub location: String,
    pub salinity: String,
    pub climate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TankStatistic {
    pub id: i32,
    pub test_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ph: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gh: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kh: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ammonia: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nitrite: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nitrate: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phosphate: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tank {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub name: String,
    pub location: String,
    pub capacity_measurement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f32>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Unspecified,
    Operational,
    Degraded,
    Down,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartbeatStatus {
    pub status: Status,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartbeatRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartbeatResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fishbase: Option<HeartbeatStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddFishRequest {
    pub fish: Option<Fish>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddFishResponse {
    pub fish: Fish,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFishRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFishResponse {
    pub fish: Vec<Fish>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFishRequest {
    pub id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteFishResponse {
    pub fish: Fish,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddTankStatisticRequest {
    pub tank_statistic: Option<TankStatistic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTankStatisticResponse {
    pub tank_statistic: TankStatistic,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTankStatisticsRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTankStatisticsResponse {
    pub tank_statistics: Vec<TankStatistic>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTankStatisticRequest {
    pub id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTankStatisticResponse {
    pub tank_statistic: TankStatistic,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddTankRequest {
    pub tank: Option<Tank>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddTankResponse {
    pub tank: Tank,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTanksRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTanksResponse {
    pub tanks: Vec<Tank>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTankRequest {
    pub id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteTankResponse {
    pub tank: Tank,
}
