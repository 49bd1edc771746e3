// Tank water test results

/// One water test. Every reading is optional: `None` means "not measured",
/// which is not the same as a measured `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TankStatistic {
    pub id: i32,
    pub test_date: String,
    pub ph: Option<f32>,
    pub gh: Option<f32>,
    pub kh: Option<f32>,
    pub ammonia: Option<f32>,
    pub nitrite: Option<f32>,
    pub nitrate: Option<f32>,
    pub phosphate: Option<f32>,
}
