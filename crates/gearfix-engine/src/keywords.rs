//! Static catalog mapping equipment categories to search phrases.
//!
//! Each list is ordered most-specific first; the sweep issues the specific
//! phrases before the broad ones so that a truncated provider page still
//! contains the best matches. Unknown categories fall back to the generic
//! list — a search must always run, never error on an unrecognized
//! category string.

const ELECTRONICS: &[&str] = &[
    "laptop repair service",
    "computer repair shop",
    "mobile phone repair",
    "electronics repair service",
    "laptop service center",
    "computer service center",
    "tv repair shop",
    "printer repair service",
    "electronics technician",
    "gadget repair",
];

const INDUSTRIAL: &[&str] = &[
    "industrial equipment repair",
    "heavy machinery repair",
    "industrial machine service",
    "cnc machine repair",
    "forklift repair service",
    "hydraulic repair service",
    "welding repair shop",
    "industrial maintenance service",
];

const HVAC_APPLIANCE: &[&str] = &[
    "ac repair service",
    "hvac repair",
    "air conditioner service center",
    "refrigerator repair service",
    "washing machine repair",
    "appliance repair service",
    "chiller maintenance service",
    "compressor repair",
    "home appliance service center",
];

const AUTOMOTIVE: &[&str] = &[
    "car repair garage",
    "auto repair shop",
    "vehicle service center",
    "truck repair service",
    "two wheeler repair",
    "diesel mechanic",
    "auto electrician",
    "tyre repair shop",
    "automobile workshop",
];

const POWER_ENERGY: &[&str] = &[
    "generator repair service",
    "ups repair service",
    "inverter repair",
    "solar panel maintenance",
    "transformer repair service",
    "electric motor rewinding",
    "battery service center",
    "electrical equipment repair",
];

/// Fallback list for `"all"` and any category the catalog does not know.
const GENERIC: &[&str] = &[
    "equipment repair service",
    "repair and maintenance service",
    "service center",
    "repair shop",
    "maintenance company",
    "general repair service",
];

/// Returns the ordered search-phrase list for an equipment category.
///
/// Lookup is case-insensitive and whitespace-tolerant. Common equipment
/// names alias onto their category (e.g. `"laptop"` → electronics,
/// `"generator"` → power). Always returns a non-empty list.
#[must_use]
pub fn keywords_for(category: &str) -> &'static [&'static str] {
    match category.trim().to_lowercase().as_str() {
        "electronics" | "laptop" | "computer" | "mobile" | "phone" | "printer" => ELECTRONICS,
        "industrial" | "machinery" | "manufacturing" | "forklift" | "cnc" => INDUSTRIAL,
        "hvac" | "appliance" | "ac" | "air_conditioner" | "refrigerator" | "washing_machine" => {
            HVAC_APPLIANCE
        }
        "automotive" | "vehicle" | "car" | "truck" | "bike" => AUTOMOTIVE,
        "power" | "energy" | "generator" | "ups" | "inverter" | "solar" => POWER_ENERGY,
        _ => GENERIC,
    }
}
