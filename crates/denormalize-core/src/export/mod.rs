//! Human-readable and JSON presentation of identification and decode results.

mod console;

pub use console::{format_lang_console, format_sfx_console};

use serde::Serialize;

use crate::error::Result;
use crate::identify::IdentityData;

/// Serialize any result type as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format identity data as a block of aligned `Label: value` lines.
pub fn format_identity(identity: &IdentityData) -> String {
    if !identity.is_known_version {
        return format!(
            "File:          {}\n  MD5:         {}\n  Size:        {}\n\nThis is not a known version of Normality.",
            identity.file, identity.md5, identity.size
        );
    }

    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    [
        format!("File:          {}", identity.file),
        format!(
            "Game:          {} - {}",
            field(&identity.game),
            field(&identity.identity)
        ),
        format!("  QA:          {}", field(&identity.qa)),
        format!("  Compilation: {}", field(&identity.compilation)),
        format!("  Adventure:   {}", field(&identity.adventure)),
        format!("  MD5:         {}", identity.md5),
        format!("  Size:        {}", identity.size),
        format!("  Type:        {}", field(&identity.release)),
        String::new(),
        "This is a known version of Normality.".to_string(),
    ]
    .join("\n")
}
