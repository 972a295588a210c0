//! Validating a registration form with both builder styles.
//!
//! Logs every validation pass at DEBUG:
//!
//! ```text
//! cargo run -p keel-validator --example registration
//! ```

use keel_core::prelude::*;
use keel_validator::prelude::*;

#[derive(Debug, Clone)]
struct Registration {
    username: String,
    email: String,
    age: u32,
    password: String,
    confirm: String,
    invite_code: Option<String>,
}

fn registration_validator() -> RuleBuilder<Registration> {
    create_validator::<Registration>()
        .rule_for(field!(Registration, username as "Username"))
        .not_whitespace()
        .min_length(3)
        .max_length(20)
        .rule_for(field!(Registration, email as "Email"))
        .valid_email()
        .rule_for(field!(Registration, age as "Age"))
        .in_range(13, 120)
        .rule_for(field!(Registration, password as "Password"))
        .min_length(8)
        .must(
            |p: &String| p.chars().any(|c| c.is_ascii_digit()),
            "Password must contain a digit",
        )
        .custom(|r: &Registration, result: &mut ValidationResult| {
            if r.password != r.confirm {
                result.add(ValidationError::object("Passwords do not match"));
            }
        })
}

fn register(form: &Registration) -> Outcome<String> {
    registration_validator()
        .validate(form)
        .into_outcome(form)
        .ensure(
            |form| form.username != "root",
            Error::conflict("Username is taken"),
        )
        .map(|form| format!("welcome, {}", form.username))
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let good = Registration {
        username: "ada".into(),
        email: "ada@example.com".into(),
        age: 36,
        password: "analytical1".into(),
        confirm: "analytical1".into(),
        invite_code: None,
    };

    let bad = Registration {
        username: "  ".into(),
        email: "ada-at-example".into(),
        age: 7,
        password: "short".into(),
        confirm: "shorter".into(),
        invite_code: Some(String::new()),
    };

    for form in [&good, &bad] {
        register(form).match_with(
            |greeting| println!("ok: {greeting}"),
            |error| println!("rejected [{}]: {}", error.code(), error.message()),
        );
    }

    // Inline checks for one-off cases
    let invite = bad
        .validate()
        .when_with(
            |r| r.invite_code.is_some(),
            |rules| {
                rules.must(
                    field!(Registration, invite_code),
                    |code: &Option<String>| code.as_deref().is_some_and(|c| c.len() == 6),
                    "invite code must have 6 characters",
                )
            },
        )
        .build();
    println!("{invite}");
}
