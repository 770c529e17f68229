//! Supported Bing markets
//!
//! Maps a country code to the value of Bing's `cc` query parameter.
//! The default market (`com`) sends no `cc` at all.

/// Country code used when the caller does not pick one
pub const DEFAULT_COUNTRY: &str = "com";

static COUNTRIES: &[(&str, &str)] = &[
    ("com", ""),
    ("uk", "GB"),
    ("us", "US"),
    ("tr", "TR"),
    ("tw", "TW"),
    ("ch", "CH"),
    ("se", "SE"),
    ("es", "ES"),
    ("za", "ZA"),
    ("sa", "SA"),
    ("ru", "RU"),
    ("ph", "PH"),
    ("pt", "PT"),
    ("pl", "PL"),
    ("cn", "CN"),
    ("no", "NO"),
    ("nz", "NZ"),
    ("nl", "NL"),
    ("mx", "MX"),
    ("my", "MY"),
    ("kr", "KR"),
    ("jp", "JP"),
    ("it", "IT"),
    ("id", "ID"),
    ("in", "IN"),
    ("hk", "HK"),
    ("de", "DE"),
    ("fr", "FR"),
    ("fi", "FI"),
    ("dk", "DK"),
    ("cl", "CL"),
    ("ca", "CA"),
    ("br", "BR"),
    ("be", "BE"),
    ("at", "AT"),
    ("au", "AU"),
    ("ar", "AR"),
];

/// Looks up the `cc` value for a country code
///
/// Returns `Some("")` for the default market, `None` for unknown codes.
///
/// # Example
/// ```
/// use bing_scraper_core::country::country_code;
/// assert_eq!(country_code("uk"), Some("GB"));
/// assert_eq!(country_code("com"), Some(""));
/// assert_eq!(country_code("xx"), None);
/// ```
pub fn country_code(country: &str) -> Option<&'static str> {
    let country = country.trim();
    COUNTRIES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(country))
        .map(|(_, cc)| *cc)
}

/// All supported country codes in table order
pub fn supported_countries() -> impl Iterator<Item = &'static str> {
    COUNTRIES.iter().map(|(code, _)| *code)
}
