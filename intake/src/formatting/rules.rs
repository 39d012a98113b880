// Fixed per-locale formatting conventions.
use shared::models::{DateFormat, LocaleFormatRules, SupportedLocale};

const EN_RULES: LocaleFormatRules = LocaleFormatRules {
    date_format: DateFormat::MonthDayYear,
    decimal_separator: '.',
    thousand_separator: ',',
};

const PT_RULES: LocaleFormatRules = LocaleFormatRules {
    date_format: DateFormat::DayMonthYear,
    decimal_separator: ',',
    thousand_separator: '.',
};

/// Looks up the rules for a locale. Codes that are not supported get the default (`en`) rules.
pub fn rules_for(locale: impl Into<SupportedLocale>) -> LocaleFormatRules {
    match locale.into() {
        SupportedLocale::En => EN_RULES,
        SupportedLocale::Pt => PT_RULES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_rules() {
        let rules = rules_for(SupportedLocale::En);
        assert_eq!(rules.date_format, DateFormat::MonthDayYear);
        assert_eq!(rules.decimal_separator, '.');
        assert_eq!(rules.thousand_separator, ',');
    }

    #[test]
    fn test_portuguese_rules() {
        let rules = rules_for("pt");
        assert_eq!(rules.date_format, DateFormat::DayMonthYear);
        assert_eq!(rules.decimal_separator, ',');
        assert_eq!(rules.thousand_separator, '.');
    }

    #[test]
    fn test_unknown_codes_fall_back_to_english() {
        for code in ["fr", "pt-BR", "EN", "", "zz-top"] {
            assert_eq!(rules_for(code), rules_for("en"), "code {:?}", code);
        }
    }

    #[test]
    fn test_every_locale_has_distinct_separators() {
        for locale in SupportedLocale::ALL {
            let rules = rules_for(locale);
            assert_ne!(rules.decimal_separator, rules.thousand_separator, "locale {}", locale);
        }
    }
}
