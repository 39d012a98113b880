//! Property tests for upload validation and locale formatting.

use proptest::prelude::*;
use shared::models::{SupportedLocale, UploadedFile};
use statement_intake::formatting::{
    format_amount_with_sign, format_date, format_number, rules_for, try_format_number,
};
use statement_intake::validation::{validate_file, PDF_MIME_TYPE};

const LIMIT: u64 = 20 * 1024 * 1024;

fn arb_locale() -> impl Strategy<Value = SupportedLocale> {
    prop_oneof![Just(SupportedLocale::En), Just(SupportedLocale::Pt)]
}

fn arb_other_mime() -> impl Strategy<Value = String> {
    "[a-z]{1,12}/[a-z0-9.+-]{1,16}".prop_filter("must not be pdf", |m| m != PDF_MIME_TYPE)
}

proptest! {
    #[test]
    fn empty_files_are_always_rejected_as_empty(mime in "[ -~]{0,30}") {
        let outcome = validate_file(&UploadedFile::new(mime, 0));
        prop_assert!(!outcome.success);
        prop_assert_eq!(outcome.error.as_deref(), Some("The selected file is empty"));
    }

    #[test]
    fn non_pdf_files_are_rejected_as_unsupported(mime in arb_other_mime(), size in 1u64..u64::MAX) {
        let outcome = validate_file(&UploadedFile::new(mime, size));
        prop_assert_eq!(outcome.error.as_deref(), Some("Only PDF files are supported"));
    }

    #[test]
    fn pdfs_within_limit_are_accepted(size in 1u64..=LIMIT) {
        let outcome = validate_file(&UploadedFile::new(PDF_MIME_TYPE, size));
        prop_assert!(outcome.success);
        prop_assert!(outcome.error.is_none());
    }

    #[test]
    fn pdfs_over_limit_are_rejected(size in (LIMIT + 1)..u64::MAX) {
        let outcome = validate_file(&UploadedFile::new(PDF_MIME_TYPE, size));
        prop_assert_eq!(outcome.error.as_deref(), Some("File size exceeds the 20 MB limit"));
    }

    #[test]
    fn unknown_locale_codes_use_english_rules(code in "[a-zA-Z_-]{0,8}") {
        prop_assume!(code != "en" && code != "pt");
        prop_assert_eq!(rules_for(code.as_str()), rules_for("en"));
    }

    #[test]
    fn iso_dates_are_reordered(y in 1000u32..=9999, m in 1u32..=12, d in 1u32..=31) {
        let iso = format!("{:04}-{:02}-{:02}", y, m, d);
        prop_assert_eq!(format_date(&iso, "en"), format!("{:02}/{:02}/{:04}", m, d, y));
        prop_assert_eq!(format_date(&iso, "pt"), format!("{:02}/{:02}/{:04}", d, m, y));
    }

    #[test]
    fn malformed_dates_pass_through_unchanged(input in "[^0-9]{0,12}", locale in arb_locale()) {
        let once = format_date(&input, locale);
        prop_assert_eq!(&once, &input);
        prop_assert_eq!(format_date(&once, locale), input);
    }

    #[test]
    fn unparsable_amounts_pass_through_unchanged(
        input in "[a-zA-Z ,/]{0,12}",
        locale in arb_locale(),
    ) {
        let once = format_number(&input, locale);
        prop_assert_eq!(&once, &input);
        prop_assert_eq!(format_number(&once, locale), input.clone());
        prop_assert_eq!(format_amount_with_sign(&input, locale), input);
    }

    #[test]
    fn formatted_amounts_have_two_decimals(
        cents in -10_000_000_000i64..10_000_000_000,
        locale in arb_locale(),
    ) {
        let sign = if cents < 0 { "-" } else { "" };
        let amount = format!("{}{}.{:02}", sign, cents.abs() / 100, cents.abs() % 100);
        let formatted = format_number(&amount, locale);
        let rules = rules_for(locale);

        let (integer, fraction) = formatted.rsplit_once(rules.decimal_separator).unwrap();
        prop_assert_eq!(fraction, format!("{:02}", cents.abs() % 100));
        prop_assert!(!integer.contains(rules.decimal_separator));
        prop_assert_eq!(formatted.starts_with('-'), cents < 0);

        let digits: String = integer
            .trim_start_matches('-')
            .chars()
            .filter(|c| *c != rules.thousand_separator)
            .collect();
        prop_assert_eq!(digits, (cents.abs() / 100).to_string());
        for group in integer.trim_start_matches('-').split(rules.thousand_separator).skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn sign_prefix_follows_parsed_value(cents in -1_000_000i64..1_000_000, locale in arb_locale()) {
        let sign = if cents < 0 { "-" } else { "" };
        let amount = format!("{}{}.{:02}", sign, cents.abs() / 100, cents.abs() % 100);
        let signed = format_amount_with_sign(&amount, locale);
        let plain = try_format_number(&amount, locale).unwrap();

        if cents > 0 {
            prop_assert_eq!(signed, format!("+{}", plain));
        } else {
            prop_assert_eq!(signed, plain);
        }
    }
}
