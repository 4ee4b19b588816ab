#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use routeacl_core::{Acl, AclError, AclOptions, Decision, Policy, Routes, HTTP_VERBS};

#[test]
fn fresh_engine_follows_default_policy() {
    let routes = Routes::default();
    let mut acl = Acl::new();
    assert_eq!(acl.policy(), Policy::Allow);
    assert!(acl.is_empty());

    for verb in HTTP_VERBS {
        for subject in ["", "admin", "*"] {
            let route = format!("{verb} /any/path");
            assert!(acl.granted(&routes, &route, subject).unwrap());
        }
    }

    acl.set_policy("deny");
    assert!(!acl.granted(&routes, "GET /any/path", "admin").unwrap());
}

#[test]
fn policy_setter_is_case_insensitive_and_ignores_garbage() {
    let mut acl = Acl::new();
    assert_eq!(acl.set_policy("DENY").policy(), Policy::Deny);
    assert_eq!(acl.set_policy("maybe").policy(), Policy::Deny);
    assert_eq!(acl.set_policy("").policy(), Policy::Deny);
    assert_eq!(acl.set_policy("Allow").policy(), Policy::Allow);
    assert_eq!(Policy::Deny.to_string(), "deny");
}

#[test]
fn registration_is_a_cross_product() {
    let routes = Routes::default();
    let mut acl = Acl::new();
    acl.deny(&routes, "GET|POST /x", "a,b,c").unwrap();
    assert_eq!(acl.len(), 6);

    let mut subjects: Vec<&str> = acl.subjects().collect();
    subjects.sort_unstable();
    assert_eq!(subjects, vec!["*", "a", "b", "c"]);
}

#[test]
fn empty_subject_registers_global_rule() {
    let routes = Routes::default();
    let mut acl = Acl::new();
    acl.deny(&routes, "GET /x", "").unwrap();
    acl.deny(&routes, "GET /y", vec!["", "ops"]).unwrap();
    acl.deny(&routes, "GET /z", Vec::<String>::new()).unwrap();

    assert_eq!(acl.len(), 4);
    assert!(!acl.granted(&routes, "GET /x", "anyone").unwrap());
    assert!(!acl.granted(&routes, "GET /y", "anyone").unwrap());
    assert!(!acl.granted(&routes, "GET /z", "anyone").unwrap());
    assert!(!acl.granted(&routes, "GET /z", Vec::<String>::new()).unwrap());
    assert_eq!(acl.subjects().count(), 2);
}

#[test]
fn case_variants_collapse_when_folding_case() {
    let routes = Routes::default();
    let mut acl = Acl::with_options(AclOptions {
        case_insensitive: true,
    });
    assert!(acl.options().case_insensitive);

    acl.deny(&routes, "/AdMin*", "").unwrap();
    acl.allow(&routes, "/admin*", "").unwrap();

    assert_eq!(acl.len(), HTTP_VERBS.len());
    assert!(acl.granted(&routes, "GET /ADMIN/x", "").unwrap());
}

#[test]
fn case_variants_stay_distinct_by_default() {
    let routes = Routes::default();
    let mut acl = Acl::new();
    assert!(!acl.options().case_insensitive);

    acl.deny(&routes, "/AdMin*", "").unwrap();
    acl.allow(&routes, "/admin*", "").unwrap();

    assert_eq!(acl.len(), 2 * HTTP_VERBS.len());
    assert!(!acl.granted(&routes, "GET /AdMin/x", "").unwrap());
    assert!(acl.granted(&routes, "GET /admin/x", "").unwrap());
}

#[test]
fn re_registering_is_idempotent() {
    let routes = Routes::default();
    let mut acl = Acl::new();
    acl.deny(&routes, "/admin*", "").unwrap();
    acl.allow(&routes, "/admin*", "admin").unwrap();
    let before = acl.len();
    let a = acl.granted(&routes, "/admin/x", "admin").unwrap();
    let b = acl.granted(&routes, "/admin/x", "").unwrap();

    acl.deny(&routes, "/admin*", "").unwrap();
    acl.allow(&routes, "/admin*", "admin").unwrap();
    assert_eq!(acl.len(), before);
    assert_eq!(acl.granted(&routes, "/admin/x", "admin").unwrap(), a);
    assert_eq!(acl.granted(&routes, "/admin/x", "").unwrap(), b);
}

#[test]
fn last_write_wins_for_identical_triple() {
    let routes = Routes::default();
    let mut acl = Acl::new();
    acl.deny(&routes, "GET /x", "ops").unwrap();
    acl.allow(&routes, "GET /x", "ops").unwrap();
    assert_eq!(acl.len(), 1);
    assert!(acl.granted(&routes, "GET /x", "ops").unwrap());
}

#[test]
fn subject_rule_shadows_global_rule_on_same_pattern() {
    let routes = Routes::default();
    let mut acl = Acl::new();
    acl.set_policy("deny");
    acl.allow(&routes, "GET /reports", "*").unwrap();
    acl.deny(&routes, "GET /reports", "intern").unwrap();

    assert!(acl.granted(&routes, "GET /reports", "staff").unwrap());
    assert!(!acl.granted(&routes, "GET /reports", "intern").unwrap());
    assert!(!acl.granted(&routes, "POST /reports", "staff").unwrap());
}

#[test]
fn check_reports_deciding_rule() {
    let routes = Routes::default();
    let mut acl = Acl::new();
    acl.deny(&routes, "/admin*", "").unwrap();
    acl.allow(&routes, "/admin*", "admin").unwrap();

    let d = acl.check(&routes, "GET /admin/users", ["guest", "admin"]).unwrap();
    assert_eq!(
        d,
        Decision::Matched {
            subject: "admin".into(),
            pattern: "/admin*".into(),
            accept: true,
        }
    );

    let d = acl.check(&routes, "GET /admin/users", "guest").unwrap();
    assert_eq!(
        d,
        Decision::Matched {
            subject: "*".into(),
            pattern: "/admin*".into(),
            accept: false,
        }
    );
    assert!(!d.is_granted());

    let d = acl.check(&routes, "GET /blog", "guest").unwrap();
    assert_eq!(d, Decision::Default { policy: Policy::Allow });
}

#[test]
fn unknown_alias_surfaces_from_registration_and_query() {
    let routes = Routes::default();
    let mut acl = Acl::new();
    let err = acl.deny(&routes, "@nope", "").expect_err("must fail");
    assert!(matches!(err, AclError::UnknownAlias(_)));
    assert!(acl.is_empty());

    let err = acl.granted(&routes, "GET @nope", "").expect_err("must fail");
    assert!(matches!(err, AclError::UnknownAlias(_)));
}

#[test]
fn later_pattern_text_wins_when_both_match() {
    let routes = Routes::default();
    let mut acl = Acl::new();
    acl.allow(&routes, "/docs/*", "").unwrap();
    acl.deny(&routes, "/docs/private*", "").unwrap();

    assert!(!acl.granted(&routes, "/docs/private/plan", "").unwrap());
    assert!(acl.granted(&routes, "/docs/public/plan", "").unwrap());
}
