//! Known releases of the game, keyed by the MD5 checksum of the main binary.

/// A known build of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    pub key: &'static str,
    pub game: &'static str,
    pub qa: Option<&'static str>,
    pub compilation: &'static str,
    pub adventure: &'static str,
    pub identity: &'static str,
}

pub const KNOWN_RELEASES: &[Release] = &[
    // Retail versions
    Release {
        key: "UK_RETAIL",
        game: "Normality",
        qa: Some("v1.0"),
        compilation: "206596 Monday 6-5-1996 20:22",
        adventure: "17230496",
        identity: "Retail (UK release)",
    },
    Release {
        key: "US_RETAIL",
        game: "Normality",
        qa: Some("US V.F6"),
        compilation: "10090796 Tuesday 9-7-1996 10:45",
        adventure: "17230496",
        identity: "Retail (US release)",
    },
    Release {
        key: "DE_RETAIL",
        game: "Normality",
        qa: Some("German V.1.2"),
        compilation: "2124596 Friday 24-5-1996 21:24",
        adventure: "17230496",
        identity: "Retail (DE release)",
    },
    // Demos and prototypes
    Release {
        key: "US_INTERPLAY_DEMO",
        game: "Normality",
        qa: Some("Interplay Demo"),
        compilation: "1429396 Friday 29-3-1996 14:17",
        adventure: "11280396",
        identity: "Interplay Demo (US)",
    },
    Release {
        key: "UK_GREMLIN_DEMO",
        game: "Normality",
        qa: Some("Gremlin Demo"),
        compilation: "1211496 Thursday 11-4-1996 12:13",
        adventure: "18100496",
        identity: "Gremlin Demo",
    },
    Release {
        key: "UK_LATER_DEMO",
        game: "Normality",
        qa: None,
        compilation: "16241195 Friday 24-11-1995 16:22",
        adventure: "14241195",
        identity: "Later Demo",
    },
    Release {
        key: "UK_EARLY_DEMO",
        game: "Normality",
        qa: None,
        compilation: "10141195 Tuesday 14-11-1995 10:44",
        adventure: "17091195",
        identity: "Early Demo",
    },
];

/// MD5 checksum → release key.
pub const KNOWN_CHECKSUMS: &[(&str, &str)] = &[("57c595d94b424b155b15faf091f5716b", "UK_RETAIL")];

/// Looks up a release by its key.
pub fn release_by_key(key: &str) -> Option<&'static Release> {
    KNOWN_RELEASES.iter().find(|r| r.key == key)
}

/// Looks up a release by the lowercase hex MD5 of its binary.
pub fn release_for_checksum(md5: &str) -> Option<&'static Release> {
    KNOWN_CHECKSUMS
        .iter()
        .find(|(sum, _)| sum.eq_ignore_ascii_case(md5))
        .and_then(|(_, key)| release_by_key(key))
}
