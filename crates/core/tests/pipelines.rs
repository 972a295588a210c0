//! End-to-end pipelines across `Outcome`, `Maybe` and `Either`.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use keel_core::prelude::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
    admin: bool,
}

fn directory() -> HashMap<u32, User> {
    [
        (1, "ada", true),
        (2, "grace", false),
    ]
    .into_iter()
    .map(|(id, name, admin)| {
        (
            id,
            User {
                id,
                name: name.to_string(),
                admin,
            },
        )
    })
    .collect()
}

fn find(users: &HashMap<u32, User>, id: u32) -> Outcome<User> {
    users
        .try_find(&id)
        .map(Clone::clone)
        .to_outcome(Error::not_found_with(format!("user {id} does not exist")))
}

fn require_admin(user: User) -> Outcome<User> {
    Outcome::create(user.admin, Error::UNAUTHORIZED).map(|()| user)
}

// ============================================================================
// SYNCHRONOUS PIPELINES
// ============================================================================

#[test]
fn lookup_then_authorize() {
    let users = directory();

    let ada = find(&users, 1).bind(require_admin).map(|u| u.name);
    assert_eq!(ada.into_value(), "ada");

    let grace = find(&users, 2).bind(require_admin);
    assert_eq!(grace.error(), &Error::UNAUTHORIZED);

    let missing = find(&users, 9).bind(require_admin);
    assert_eq!(missing.error().code(), keel_core::codes::NOT_FOUND);
    assert_eq!(missing.error().message(), "user 9 does not exist");
}

#[test]
fn failures_skip_every_later_step() {
    let calls = AtomicUsize::new(0);
    let outcome = Outcome::<i32>::failure(Error::failure("boom"))
        .map(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            x + 1
        })
        .bind(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            Outcome::success(x)
        })
        .on_success(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
        });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(outcome.error().message(), "boom");
}

#[test]
fn collect_outcomes_into_one() {
    let users = directory();
    let names: Outcome<Vec<String>> = [1, 2]
        .into_iter()
        .map(|id| find(&users, id).map(|u| u.name))
        .collect();
    assert_eq!(names.into_value(), vec!["ada", "grace"]);

    let broken: Outcome<Vec<User>> = [1, 7, 8].into_iter().map(|id| find(&users, id)).collect();
    assert_eq!(
        broken.error().message(),
        "user 7 does not exist; user 8 does not exist"
    );
}

#[test]
fn combine_reports_first_or_every_failure() {
    let checks = [
        Outcome::ok(),
        Outcome::failure(Error::conflict("email taken")),
        Outcome::failure(Error::validation("name too short")),
    ];
    assert_eq!(Outcome::combine(&checks).error(), &Error::conflict("email taken"));

    let all = Outcome::combine_all(&checks);
    assert_eq!(all.error().code(), keel_core::codes::MULTIPLE);
    assert_eq!(all.error().message(), "email taken; name too short");
}

#[test]
fn maybe_and_either_bridges() {
    let users = directory();
    let admins = users
        .values()
        .filter(|u| u.admin)
        .single_or_none()
        .map(|u| u.id);
    assert_eq!(admins, Maybe::some(1));

    let parsed: Vec<Either<String, u32>> = ["1", "x", "2"]
        .into_iter()
        .map(|raw| {
            Maybe::from(raw.parse::<u32>().ok()).to_right_or(format!("not a number: {raw}"))
        })
        .collect();
    assert_eq!(
        parsed.clone().into_iter().sequence(),
        Either::Left("not a number: x".to_string())
    );
    assert_eq!(parsed.into_iter().rights().collect::<Vec<_>>(), vec![1, 2]);
}

// ============================================================================
// ASYNC PIPELINES
// ============================================================================

async fn fetch(users: Arc<HashMap<u32, User>>, id: u32) -> Outcome<User> {
    tokio::task::yield_now().await;
    find(&users, id)
}

#[tokio::test]
async fn async_chain_awaits_each_step() {
    let users = Arc::new(directory());

    let greeting = fetch(Arc::clone(&users), 1)
        .ensure_async(|u| std::future::ready(u.admin), Error::UNAUTHORIZED)
        .map_async(|u| async move { format!("hello, {}", u.name) })
        .await;
    assert_eq!(greeting.into_value(), "hello, ada");

    let denied = fetch(Arc::clone(&users), 2)
        .ensure_async(|u| std::future::ready(u.admin), Error::UNAUTHORIZED)
        .await;
    assert_eq!(denied.error(), &Error::UNAUTHORIZED);
}

#[tokio::test]
async fn async_continuations_never_start_after_failure() {
    let users = Arc::new(directory());
    let started = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&started);
    let outcome = fetch(Arc::clone(&users), 42)
        .bind_async(|u| {
            counter.fetch_add(1, Ordering::SeqCst);
            fetch(Arc::clone(&users), u.id + 1)
        })
        .on_success_async(|_| async {})
        .await;

    assert!(outcome.is_failure());
    assert_eq!(started.load(Ordering::SeqCst), 0);
}

#[test]
fn async_bridge_runs_on_any_executor() {
    let doubled = futures::executor::block_on(
        async { Outcome::success(21) }.map_async(|x| async move { x * 2 }),
    );
    assert_eq!(doubled.into_value(), 42);
}
