//! Property-based tests for keel-validator.

use keel_validator::prelude::*;
use keel_validator::validators::string::is_valid_email;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Profile {
    name: String,
    email: String,
    score: i64,
}

fn profile() -> impl Strategy<Value = Profile> {
    (".{0,12}", "[a-z@.]{0,12}", any::<i64>()).prop_map(|(name, email, score)| Profile {
        name,
        email,
        score,
    })
}

fn reusable() -> RuleBuilder<Profile> {
    create_validator::<Profile>()
        .rule_for(field!(Profile, name))
        .not_whitespace()
        .max_length(8)
        .rule_for(field!(Profile, email))
        .valid_email()
        .rule_for(field!(Profile, score))
        .in_range(0, 100)
        .build()
}

fn inline(profile: &Profile) -> ValidationResult {
    profile
        .validate()
        .not_whitespace(field!(Profile, name))
        .max_length(field!(Profile, name), 8)
        .valid_email(field!(Profile, email))
        .in_range(field!(Profile, score), 0, 100)
        .build()
}

// ============================================================================
// DETERMINISM: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn reusable_validation_is_idempotent(p in profile()) {
        let validator = reusable();
        prop_assert_eq!(validator.validate(&p), validator.validate(&p));
    }

    #[test]
    fn inline_and_reusable_agree(p in profile()) {
        prop_assert_eq!(inline(&p), reusable().validate(&p));
    }
}

// ============================================================================
// CHECK LAWS
// ============================================================================

proptest! {
    #[test]
    fn valid_iff_no_errors(p in profile()) {
        let result = inline(&p);
        prop_assert_eq!(result.is_valid(), result.is_empty());
        prop_assert_eq!(result.to_outcome().is_success(), result.is_valid());
    }

    #[test]
    fn length_is_measured_in_chars(s in "\\PC{0,20}", bound in 0usize..20) {
        #[derive(Debug)]
        struct Text { body: String }

        let text = Text { body: s.clone() };
        let result = text.validate().max_length(field!(Text, body), bound).build();
        prop_assert_eq!(result.is_valid(), s.chars().count() <= bound);
    }

    #[test]
    fn in_range_matches_comparison(n in any::<i64>()) {
        let p = Profile { name: "ada".into(), email: "ada@example.com".into(), score: n };
        prop_assert_eq!(inline(&p).is_valid(), (0..=100).contains(&n));
    }

    #[test]
    fn error_count_bounded_by_check_count(p in profile()) {
        prop_assert!(inline(&p).len() <= 4);
    }

    #[test]
    fn addresses_without_at_sign_are_rejected(s in "[a-z.]{0,20}") {
        prop_assert!(!is_valid_email(&s));
    }
}
