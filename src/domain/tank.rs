// Tank domain model

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tank {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub name: String,
    pub location: String,
    pub capacity_measurement: String,
    pub capacity: Option<f32>,
    pub description: String,
}
