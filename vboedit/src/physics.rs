//! First-order engine model for estimating fuel flow.
//!
//! Air mass is derived from displacement, volumetric efficiency and throttle
//! opening, corrected for intake temperature with the ideal gas law. Fuel
//! mass follows from the stoichiometric air-fuel ratio scaled by lambda.
//! Compressibility, fuel vapour volume and combustion efficiency are not
//! modelled.

/// Air density at 15°C and sea level (kg/m³, equivalently g/L).
const STANDARD_AIR_DENSITY: f64 = 1.225;

/// Offset between Celsius and Kelvin.
const KELVIN_OFFSET: f64 = 273.15;

/// Temperature at which [`STANDARD_AIR_DENSITY`] is defined (°C).
const REFERENCE_TEMP_CELSIUS: f64 = 15.0;

/// Stoichiometric air-fuel mass ratio for gasoline.
const STOICHIOMETRIC_AFR: f64 = 14.7;

/// RPM divisor giving intake events per second for a 4-stroke engine.
const RPM_TO_FIRINGS_FACTOR: f64 = 120.0;

/// Gasoline density (g/L).
const GASOLINE_DENSITY: f64 = 745.0;

/// Fixed engine characteristics used by the fuel model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParams {
    /// Engine displacement in cubic centimetres.
    pub displacement_cc: f64,
    /// Volumetric efficiency as a fraction (typically 0.7-0.95).
    pub volumetric_efficiency: f64,
    /// Air-fuel lambda (1.0 = stoichiometric).
    pub lambda: f64,
}

impl EngineParams {
    /// Create engine parameters.
    pub fn new(displacement_cc: f64, volumetric_efficiency: f64, lambda: f64) -> Self {
        Self {
            displacement_cc,
            volumetric_efficiency,
            lambda,
        }
    }
}

/// Air density at the given intake temperature (g/L).
pub fn air_density(intake_temp_celsius: f64) -> f64 {
    STANDARD_AIR_DENSITY * ((REFERENCE_TEMP_CELSIUS + KELVIN_OFFSET) / (KELVIN_OFFSET + intake_temp_celsius))
}

/// Estimates instantaneous fuel consumption in litres per minute.
///
/// # Arguments
///
/// * `rpm` - Engine speed in revolutions per minute
/// * `throttle` - Throttle position, 0-100
/// * `intake_temp` - Intake air temperature in °C
/// * `engine` - Displacement, volumetric efficiency and lambda
///
/// Returns 0 when the engine is not turning.
pub fn instant_fuel_consumption(rpm: f64, throttle: f64, intake_temp: f64, engine: &EngineParams) -> f64 {
    if rpm == 0.0 {
        return 0.0;
    }

    let displacement_liters = engine.displacement_cc / 1000.0;
    let throttle_ratio = throttle / 100.0;
    let intake_volume = engine.volumetric_efficiency * displacement_liters * throttle_ratio;

    // Fuel volume is negligible next to air volume
    let air_mass_per_rev = intake_volume * air_density(intake_temp);
    let fuel_mass_per_rev = air_mass_per_rev / (STOICHIOMETRIC_AFR * engine.lambda);
    let fuel_grams_per_sec = fuel_mass_per_rev * (rpm / RPM_TO_FIRINGS_FACTOR);

    fuel_grams_per_sec / GASOLINE_DENSITY * 60.0
}
