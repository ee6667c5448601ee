//! CLI argument definitions for denormalize.

use std::path::PathBuf;

use clap::Parser;
use denormalize_core::TextEncoding;

#[derive(Debug, Parser)]
#[command(name = "denormalize")]
#[command(
    about = "Extracts language strings and sound effects from Normality game files",
    version
)]
pub struct Args {
    /// Extract sound effects (from e.g. EUREKA0.SFX)
    #[arg(long, value_name = "PATH")]
    pub xsfx: Option<PathBuf>,

    /// Extract language strings (from e.g. LANG.DAT)
    #[arg(long, value_name = "PATH")]
    pub xlang: Option<PathBuf>,

    /// Identify an installation or CD of Normality by its binary
    #[arg(long, value_name = "PATH")]
    pub identify: Option<PathBuf>,

    /// Output data as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Text encoding of stored strings (WHATWG label, single-byte only)
    #[arg(
        long,
        env = "DENORMALIZE_ENCODING",
        default_value = TextEncoding::DEFAULT_LABEL
    )]
    pub encoding: String,

    /// Check the SFX magic number before extracting
    #[arg(long)]
    pub verify_magic: bool,

    /// Fail when the SFX sound and name tables disagree
    #[arg(long)]
    pub strict: bool,

    /// Colorize console output
    #[arg(long)]
    pub color: bool,
}

impl Args {
    /// True if at least one extraction or identification was requested.
    pub fn has_action(&self) -> bool {
        self.xsfx.is_some() || self.xlang.is_some() || self.identify.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let args = Args::try_parse_from(["denormalize"]).unwrap();
        assert!(!args.has_action());
        assert!(!args.json);
        assert_eq!(args.encoding, "us-ascii");
    }

    #[test]
    fn test_parse_xlang_json() {
        let args = Args::try_parse_from(["denormalize", "--xlang", "LANG.DAT", "-j"]).unwrap();
        assert_eq!(args.xlang, Some(PathBuf::from("LANG.DAT")));
        assert!(args.json);
        assert!(args.has_action());
    }

    #[test]
    fn test_parse_xsfx_options() {
        let args = Args::try_parse_from([
            "denormalize",
            "--xsfx",
            "EUREKA0.SFX",
            "--verify-magic",
            "--strict",
            "--color",
        ])
        .unwrap();
        assert_eq!(args.xsfx, Some(PathBuf::from("EUREKA0.SFX")));
        assert!(args.verify_magic);
        assert!(args.strict);
        assert!(args.color);
    }

    #[test]
    fn test_parse_combined_actions() {
        let args = Args::try_parse_from([
            "denormalize",
            "--identify",
            "NORM.EXE",
            "--xlang",
            "LANG.DAT",
            "--encoding",
            "ibm866",
        ])
        .unwrap();
        assert!(args.identify.is_some());
        assert!(args.xlang.is_some());
        assert!(args.xsfx.is_none());
        assert_eq!(args.encoding, "ibm866");
    }

    #[test]
    fn test_parse_missing_path() {
        assert!(Args::try_parse_from(["denormalize", "--xsfx"]).is_err());
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert!(Args::try_parse_from(["denormalize", "--xmusic", "A.XM"]).is_err());
    }
}
