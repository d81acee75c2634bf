//! End-to-end contract coverage using the in-memory fixture realm.
//!
//! These scenarios exercise the derived batch/aggregate/enforcement
//! semantics through the public API only, the way a data-source-backed
//! realm's consumers would.

use palisade_realm::testing::FixtureRealm;
use palisade_realm::{AuthorizationError, Realm, RoleId, SubjectId, WildcardPermission};
use std::sync::Arc;
use std::thread;

fn perm(s: &str) -> WildcardPermission {
    WildcardPermission::try_new(s).expect("valid descriptor")
}

fn role(s: &str) -> RoleId {
    RoleId::new(s)
}

/// Alice is a member of "admin" only.
fn alice_realm() -> FixtureRealm<WildcardPermission> {
    let alice = SubjectId::new("alice");
    FixtureRealm::new("corporate").grant_role(&alice, &role("admin"))
}

/// Bob holds the single grant "file:read:*".
fn bob_realm() -> FixtureRealm<WildcardPermission> {
    let bob = SubjectId::new("bob");
    FixtureRealm::new("files").grant_permission(&bob, perm("file:read:*"))
}

// ─── Scenario A: role membership ────────────────────────────────────

#[test]
fn admin_only_subject_role_matrix() {
    let realm = alice_realm();
    let alice = SubjectId::new("alice");

    assert!(realm.has_role(&alice, &role("admin")));
    assert!(!realm.has_role(&alice, &role("guest")));
    assert_eq!(
        realm.has_roles(&alice, &[role("admin"), role("guest")]),
        vec![true, false]
    );
    assert!(!realm.has_all_roles(&alice, &[role("admin"), role("guest")]));
    assert!(realm.has_all_roles(&alice, &[role("admin")]));
}

#[test]
fn unknown_subject_resolves_to_false_without_error() {
    let realm = alice_realm();
    let stranger = SubjectId::new("stranger");

    assert!(!realm.has_role(&stranger, &role("admin")));
    assert_eq!(
        realm.has_roles(&stranger, &[role("admin"), role("guest")]),
        vec![false, false]
    );
}

// ─── Scenario B: wildcard enforcement ───────────────────────────────

#[test]
fn wildcard_grant_permits_narrower_requests() {
    let realm = bob_realm();
    let bob = SubjectId::new("bob");

    assert!(realm.is_permitted(&bob, &perm("file:read:42")));
    assert!(!realm.is_permitted(&bob, &perm("file:write:42")));
}

#[test]
fn check_permission_mirrors_boolean_query() {
    let realm = bob_realm();
    let bob = SubjectId::new("bob");

    assert!(realm.check_permission(&bob, &perm("file:read:42")).is_ok());

    let err = realm
        .check_permission(&bob, &perm("file:write:42"))
        .unwrap_err();
    assert_eq!(err.subject(), "bob");
    assert_eq!(err.denied(), vec!["file:write:42"]);
}

#[test]
fn check_permissions_reports_the_full_denied_subset() {
    let realm = bob_realm();
    let bob = SubjectId::new("bob");
    let required = vec![
        perm("file:read:1"),
        perm("file:write:1"),
        perm("file:delete:1"),
    ];

    let err = realm.check_permissions(&bob, &required).unwrap_err();
    match err {
        AuthorizationError::PermissionsDenied {
            subject,
            checked,
            denied,
        } => {
            assert_eq!(subject, "bob");
            assert_eq!(checked, 3);
            // Both misses, in input order; the covered read is absent.
            assert_eq!(denied, vec!["file:write:1", "file:delete:1"]);
        }
        other => panic!("expected PermissionsDenied, got: {other:?}"),
    }
}

#[test]
fn check_permissions_succeeds_when_every_permission_is_covered() {
    let realm = bob_realm();
    let bob = SubjectId::new("bob");
    let required = vec![perm("file:read:1"), perm("file:read:2")];

    assert!(realm.check_permissions(&bob, &required).is_ok());
}

// ─── Scenario C: batch order preservation ───────────────────────────

#[test]
fn batch_permission_results_match_single_item_results_in_order() {
    let realm = bob_realm();
    let bob = SubjectId::new("bob");
    let checked = vec![
        perm("file:read:42"),
        perm("file:write:42"),
        perm("file:read:7"),
    ];

    let batch = realm.is_permitted_each(&bob, &checked);
    assert_eq!(batch.len(), 3);
    for (i, p) in checked.iter().enumerate() {
        assert_eq!(batch[i], realm.is_permitted(&bob, p), "index {i}");
    }
    assert_eq!(batch, vec![true, false, true]);
}

// ─── Vacuous truth ──────────────────────────────────────────────────

#[test]
fn empty_all_aggregates_are_true_even_for_unknown_subjects() {
    let realm = FixtureRealm::<WildcardPermission>::new("empty");
    let nobody = SubjectId::new("nobody");

    assert!(realm.has_all_roles(&nobody, &[]));
    assert!(realm.is_permitted_all(&nobody, &[]));
    assert!(realm.check_permissions(&nobody, &[]).is_ok());
}

// ─── Concurrency ────────────────────────────────────────────────────

#[test]
fn shared_realm_answers_concurrent_checks_consistently() {
    let bob = SubjectId::new("bob");
    let realm: Arc<dyn Realm<Permission = WildcardPermission>> = Arc::new(
        FixtureRealm::new("files").grant_permission(&bob, perm("file:read:*")),
    );

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let realm = Arc::clone(&realm);
            thread::spawn(move || {
                let bob = SubjectId::new("bob");
                let allowed = realm.is_permitted(&bob, &perm(&format!("file:read:{i}")));
                let denied = realm.is_permitted(&bob, &perm(&format!("file:write:{i}")));
                (allowed, denied)
            })
        })
        .collect();

    for handle in handles {
        let (allowed, denied) = handle.join().expect("worker panicked");
        assert!(allowed);
        assert!(!denied);
    }
}

// ─── Registry shape (manager collaborator) ──────────────────────────

#[test]
fn realms_are_usable_as_name_keyed_trait_objects() {
    use std::collections::HashMap;

    let alice = SubjectId::new("alice");
    let bob = SubjectId::new("bob");

    let mut registry: HashMap<String, Box<dyn Realm<Permission = WildcardPermission>>> =
        HashMap::new();
    for realm in [
        Box::new(FixtureRealm::new("corporate").grant_role(&alice, &role("admin")))
            as Box<dyn Realm<Permission = WildcardPermission>>,
        Box::new(FixtureRealm::new("files").grant_permission(&bob, perm("file:read:*"))),
    ] {
        registry.insert(realm.name().to_string(), realm);
    }

    let corporate = registry.get("corporate").expect("registered");
    let files = registry.get("files").expect("registered");

    assert!(corporate.has_role(&alice, &role("admin")));
    assert!(!corporate.has_role(&bob, &role("admin")));
    assert!(files.is_permitted(&bob, &perm("file:read:9")));
}
