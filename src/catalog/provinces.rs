//! The twelve provinces, keyed the way the provincial store keys them.

/// (normalized key, display name)
const PROVINCES: [(&str, &str); 12] = [
    ("groningen", "Groningen"),
    ("friesland", "Friesland"),
    ("drenthe", "Drenthe"),
    ("overijssel", "Overijssel"),
    ("flevoland", "Flevoland"),
    ("gelderland", "Gelderland"),
    ("utrecht", "Utrecht"),
    ("noordholland", "Noord-Holland"),
    ("zuidholland", "Zuid-Holland"),
    ("zeeland", "Zeeland"),
    ("noordbrabant", "Noord-Brabant"),
    ("limburg", "Limburg"),
];

/// Normalized keys of all provinces
pub fn keys() -> impl Iterator<Item = &'static str> {
    PROVINCES.iter().map(|(key, _)| *key)
}

/// Display name for a normalized province key
#[must_use]
pub fn display_name(key: &str) -> Option<&'static str> {
    PROVINCES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}
