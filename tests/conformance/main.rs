use std::fs;
use std::path::Path;

use cooklang::conformance::{self, Fixture};
use cooklang::parsing;

const FIXTURE: &str = "tests/fixtures/canonical.json";

// Cases known not to apply to this parser. Kept sorted; checked before
// each case is run.
const SKIP: &[&str] = &[];

fn load_fixture() -> Fixture {
    let path = Path::new(FIXTURE);
    assert!(path.exists(), "fixture file missing");

    let content = fs::read_to_string(path).expect("Failed to read fixture file");
    Fixture::from_json(&content).unwrap_or_else(|e| panic!("Failed to decode {}: {}", FIXTURE, e))
}

fn skipped(name: &str) -> bool {
    SKIP.binary_search(&name)
        .is_ok()
}

#[test]
fn skip_list_sorted() {
    assert!(SKIP
        .windows(2)
        .all(|pair| pair[0] < pair[1]));
}

#[test]
fn fixture_version() {
    let fixture = load_fixture();
    assert!(fixture.version >= 1);
    assert!(!fixture
        .tests
        .is_empty());
}

#[test]
fn canonical_cases() {
    let fixture = load_fixture();

    let mut failures = Vec::new();

    for (name, case) in &fixture.tests {
        if skipped(name) {
            println!("skipping {}", name);
            continue;
        }

        let recipe = parsing::parse(&case.source);
        let actual = conformance::render(&recipe);

        if actual != case.result {
            println!(
                "Case {} failed\n  source:   {:?}\n  expected: {:?}\n  actual:   {:?}",
                name, case.source, case.result, actual
            );
            failures.push(name.clone());
        }
    }

    if !failures.is_empty() {
        panic!(
            "{} of {} canonical cases failed: {:?}",
            failures.len(),
            fixture
                .tests
                .len(),
            failures
        );
    }
}
