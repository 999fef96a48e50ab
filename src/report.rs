//! Human-readable rendering of planets.

use crate::codec::LoadStatus;
use crate::models::Planet;
use crate::store::PlanetStore;

const RULE: &str = "-----------------------";
pub const EMPTY_MESSAGE: &str = "ERROR: NO PLANETS ENTERED IN SYSTEM";

/// Format a value as `d.ddde±XX` (three decimals, signed exponent of at least
/// two digits). Non-finite values print as-is.
pub fn scientific(value: f64) -> String {
    let formatted = format!("{:.3e}", value);
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return formatted;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}

/// Render one planet with its derived quantities.
///
/// Example output:
/// ```text
/// Name: Earth
/// Diameter: 1.274e+04 km
/// Mass: 5.972e+24 kg
/// Surface Area: 5.101e+08 km^2
/// Density: 5.513e+03 kg/m^3
/// Acceleration Due To Gravity: 9.820e+00 m/s^2
/// ```
pub fn planet_details(planet: &Planet) -> String {
    let mut out = String::new();
    out.push_str(&format!("Name: {}\n", planet.name()));
    out.push_str(&format!("Diameter: {} km\n", scientific(planet.diameter())));
    out.push_str(&format!("Mass: {} kg\n", scientific(planet.mass())));
    out.push_str(&format!("Surface Area: {} km^2\n", scientific(planet.surface_area())));
    out.push_str(&format!("Density: {} kg/m^3\n", scientific(planet.density())));
    out.push_str(&format!(
        "Acceleration Due To Gravity: {} m/s^2\n",
        scientific(planet.gravity())
    ));
    out
}

/// Render every planet followed by a rule, or the empty-state message.
pub fn planet_listing(store: &PlanetStore) -> String {
    let Some(planets) = store.list_all() else {
        return format!("{}\n", EMPTY_MESSAGE);
    };

    let mut out = String::new();
    for planet in planets {
        out.push_str(&planet_details(planet));
        out.push_str(RULE);
        out.push('\n');
    }
    out
}

/// One-line summary of a startup load.
pub fn load_summary(status: &LoadStatus) -> String {
    match status {
        LoadStatus::Absent => "(No Previous Data Found)".to_string(),
        LoadStatus::Read {
            records,
            malformed: None,
        } => format!("(Data Read From File Successfully: {} planets)", records),
        LoadStatus::Read {
            records,
            malformed: Some(m),
        } => format!(
            "(Data Read From File: {} planets, stopped at {})",
            records, m
        ),
    }
}
