//! Locale code validation via display-name resolution.
//!
//! Locale codes stay opaque validated strings throughout the tool; the only
//! question ever asked of one is "does it resolve to a human-readable
//! display name?". A tag whose resolution comes back as the raw input is
//! treated as not recognized and rejected.
//!
//! Resolution is modeled as an injected capability ([`LocaleResolver`]) so
//! tests can substitute a scripted resolver. The default implementation
//! parses the tag as a BCP 47 language identifier and looks the subtags up
//! in a static registry.

use std::sync::OnceLock;

use unic_langid::LanguageIdentifier;

use crate::error::{Error, Result};

/// Resolves a locale code to a display name.
///
/// Implementations must return the input unchanged when the code is not
/// recognized; [`validate_locale`] turns that echo into a rejection.
pub trait LocaleResolver {
    fn display_name(&self, code: &str) -> String;
}

/// Reject `code` unless the resolver produces a display name that differs
/// from the raw input.
pub fn validate_locale(resolver: &dyn LocaleResolver, code: &str) -> Result<()> {
    if resolver.display_name(code) == code {
        return Err(Error::InvalidLocaleCode(code.to_string()));
    }
    Ok(())
}

/// Registry-backed resolver for BCP 47 language tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryResolver;

impl LocaleResolver for RegistryResolver {
    fn display_name(&self, code: &str) -> String {
        let Ok(identifier) = code.parse::<LanguageIdentifier>() else {
            return code.to_string();
        };

        let registry = registry();
        let Some(language) = registry.language_name(identifier.language.as_str()) else {
            return code.to_string();
        };

        match identifier.region {
            Some(region) => match registry.region_name(region.as_str()) {
                Some(region_name) => format!("{} ({})", language, region_name),
                None => code.to_string(),
            },
            None => language.to_string(),
        }
    }
}

struct LocaleRegistry {
    languages: &'static [(&'static str, &'static str)],
    regions: &'static [(&'static str, &'static str)],
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

fn registry() -> &'static LocaleRegistry {
    REGISTRY.get_or_init(|| LocaleRegistry {
        languages: LANGUAGE_NAMES,
        regions: REGION_NAMES,
    })
}

impl LocaleRegistry {
    fn language_name(&self, subtag: &str) -> Option<&'static str> {
        self.languages
            .iter()
            .find(|(code, _)| *code == subtag)
            .map(|(_, name)| *name)
    }

    fn region_name(&self, subtag: &str) -> Option<&'static str> {
        self.regions
            .iter()
            .find(|(code, _)| *code == subtag)
            .map(|(_, name)| *name)
    }
}

/// ISO 639-1 language subtags and their English display names.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "Arabic"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bangla"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("ko", "Korean"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("nb", "Norwegian Bokmål"),
    ("nl", "Dutch"),
    ("nn", "Norwegian Nynorsk"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
];

/// Common region subtags and their English display names.
const REGION_NAMES: &[(&str, &str)] = &[
    ("AR", "Argentina"),
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("BE", "Belgium"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("CL", "Chile"),
    ("CN", "China"),
    ("CO", "Colombia"),
    ("CZ", "Czechia"),
    ("DE", "Germany"),
    ("DK", "Denmark"),
    ("EG", "Egypt"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("GR", "Greece"),
    ("HK", "Hong Kong"),
    ("ID", "Indonesia"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IN", "India"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("MX", "Mexico"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("NZ", "New Zealand"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("RU", "Russia"),
    ("SA", "Saudi Arabia"),
    ("SE", "Sweden"),
    ("SG", "Singapore"),
    ("TR", "Turkey"),
    ("TW", "Taiwan"),
    ("UA", "Ukraine"),
    ("US", "United States"),
    ("VN", "Vietnam"),
    ("ZA", "South Africa"),
];

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Display Name Tests ====================

    #[test]
    fn test_display_name_language_only() {
        let resolver = RegistryResolver;
        assert_eq!(resolver.display_name("fr"), "French");
        assert_eq!(resolver.display_name("ja"), "Japanese");
    }

    #[test]
    fn test_display_name_language_and_region() {
        let resolver = RegistryResolver;
        assert_eq!(resolver.display_name("en-US"), "English (United States)");
        assert_eq!(resolver.display_name("pt-BR"), "Portuguese (Brazil)");
    }

    #[test]
    fn test_display_name_unknown_language_echoes_input() {
        let resolver = RegistryResolver;
        assert_eq!(resolver.display_name("xx"), "xx");
    }

    #[test]
    fn test_display_name_unparseable_tag_echoes_input() {
        let resolver = RegistryResolver;
        assert_eq!(resolver.display_name("xx-not-a-real-tag"), "xx-not-a-real-tag");
        assert_eq!(resolver.display_name(""), "");
    }

    #[test]
    fn test_display_name_unknown_region_echoes_input() {
        let resolver = RegistryResolver;
        assert_eq!(resolver.display_name("fr-XZ"), "fr-XZ");
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_accepts_known_codes() {
        assert!(validate_locale(&RegistryResolver, "fr").is_ok());
        assert!(validate_locale(&RegistryResolver, "en-GB").is_ok());
    }

    #[test]
    fn test_validate_rejects_unrecognized_codes() {
        let err = validate_locale(&RegistryResolver, "xx-not-a-real-tag").unwrap_err();
        assert!(matches!(err, Error::InvalidLocaleCode(code) if code == "xx-not-a-real-tag"));
    }

    #[test]
    fn test_validate_uses_injected_resolver() {
        struct EchoResolver;
        impl LocaleResolver for EchoResolver {
            fn display_name(&self, code: &str) -> String {
                code.to_string()
            }
        }
        assert!(validate_locale(&EchoResolver, "fr").is_err());
    }
}
