/// Body-mass index, kg/m².
pub fn bmi_adult(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}
