//! Decision vector tests: rule registration replayed against queries.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]


#[test]
fn decision_vectors() {
    let files = [
        "default_allow.json",
        "default_deny.json",
        "wildcards.json",
        "tokens.json",
        "verbs.json",
        "multi_subject.json",
        "case_insensitive.json",
    ];

    for f in files {
        vector_loader::load(f).run();
    }
}
