// File: crates/scooter-lca/src/dataset.rs
// Summary: Literal LCA figures for the shared e-scooter, as reported.

/// Transport modes and use-phase intensities, g CO2-eq/passenger-km.
pub const TRANSPORT_MODES: [&str; 3] = ["E-Scooter", "Bus", "Personal Car"];
pub const MODE_EMISSIONS: [f64; 3] = [29.5, 51.0, 257.0];

/// Component contributions, kg CO2-eq per scooter.
pub const COMPONENTS: [&str; 8] = [
    "Battery", "Transport", "Set of Breaks", "Motor",
    "Glider", "Handlebar", "Wheels", "Controller",
];
pub const COMPONENT_EMISSIONS: [f64; 8] = [
    54.7051754, 21.0922214, 5.69716261, 6.61217455,
    5.25322362, 4.63982784, 15.0252457, 89.2183668,
];

/// Lifecycle phases with their reported shares (%) of the total.
pub const PHASES: [&str; 3] = ["Manufacturing", "Transport", "End-of-Life"];
pub const PHASE_SHARES: [f64; 3] = [87.8, 11.15, 1.05];
/// Total lifecycle emissions, kg CO2-eq.
pub const LIFECYCLE_TOTAL: f64 = 202.243398;

pub const IMPACT_CATEGORIES: [&str; 6] = [
    "Global warming", "Terrestrial acidification", "Water consumption",
    "Mineral resource scarcity", "Land use", "Marine ecotoxicity",
];
pub const IMPACT_VALUES: [f64; 6] = [
    186.5430854, 2.085688716, 5.58308347,
    21.07493509, 12.40058654, 204870.4829,
];
pub const IMPACT_UNITS: [&str; 6] = [
    "kg CO2 eq", "kg SO2 eq", "m3",
    "kg Cu eq", "m2yr crop eq", "kg 1,4-DCB",
];
/// Hand-picked radar scale per category. Presentation only: changing these
/// changes the picture, not the reported values.
pub const IMPACT_SCALE_MAXIMA: [f64; 6] = [200.0, 3.0, 10.0, 25.0, 15.0, 250000.0];

/// Lifespan scenarios and resulting intensities, g CO2-eq/passenger-km.
pub const LIFESPANS: [&str; 2] = ["18 months", "24 months (base)"];
pub const LIFESPAN_EMISSIONS: [f64; 2] = [39.27, 29.5];
