//! Apparent-temperature heat index from temperature and relative humidity.

/// `HI = T + 0.33 * (RH/100) * e`, with water vapor pressure
/// `e = 6.105 * exp(17.27 * T / (237.7 + T))` in hPa.
///
/// Undefined at T = -237.7 C; Earth surface temperatures never get there.
/// No clamping, no validation.
pub fn compute_heat_index(temperature_c: f64, relative_humidity_pct: f64) -> f64 {
    let vapor_pressure = 6.105 * (17.27 * temperature_c / (237.7 + temperature_c)).exp();
    temperature_c + 0.33 * (relative_humidity_pct / 100.0) * vapor_pressure
}
