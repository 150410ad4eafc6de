use std::sync::Arc;
use std::thread;

use family_linker::{EquivalenceStore, NameEquivalenceIndex, SharedEquivalences};

#[test]
fn test_add_is_symmetric_and_transitive() {
    let mut index = NameEquivalenceIndex::new();
    assert!(index.add("Brita", "Birgitta"));
    assert!(index.are_equivalent("Brita", "Birgitta"));
    assert!(index.are_equivalent("Birgitta", "Brita"));

    assert!(index.add("Birgitta", "Pirjo"));
    assert!(index.are_equivalent("Brita", "Pirjo"));
    assert!(index.are_equivalent("Pirjo", "Brita"));

    // Already known through the closure
    assert!(!index.add("Pirjo", "Brita"));
}

#[test]
fn test_equivalence_ignores_case_and_diacritics() {
    let index = NameEquivalenceIndex::with_defaults();
    assert!(index.are_equivalent(" JUHO ", "johan"));
    assert!(index.are_equivalent("Yrjö", "Jöran"));
    assert!(index.are_equivalent("Yrjo", "Joran"));
}

#[test]
fn test_default_chains_are_closed() {
    let index = NameEquivalenceIndex::with_defaults();
    assert!(index.are_equivalent("Juho", "Johannes"));
    assert!(index.are_equivalent("Kreeta", "Margareta"));
    assert!(!index.are_equivalent("Juho", "Matti"));
}

#[test]
fn test_suggestions_rank_close_spellings() {
    let index = NameEquivalenceIndex::with_defaults();
    let suggestions = index.suggest_equivalents("Mattis", 0.5, 5);

    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 5);
    assert!(
        suggestions
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score)
    );
    assert!(suggestions.iter().all(|s| s.score < 0.95));
    assert!(suggestions.iter().any(|s| s.name == "mattias" || s.name == "matts"));
}

#[test]
fn test_store_round_trips_additions() -> family_linker::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("names.json");

    let shared = SharedEquivalences::open(EquivalenceStore::new(&path))?;
    let before = shared.snapshot()?;
    assert!(shared.add_equivalence("Brita", "Birgitta")?);
    assert!(!shared.add_equivalence("Brita", "Birgitta")?);

    // A snapshot taken earlier does not see the addition
    assert!(!before.are_equivalent("Brita", "Birgitta"));
    assert!(shared.snapshot()?.are_equivalent("Brita", "Birgitta"));

    let reopened = EquivalenceStore::new(&path).load()?;
    assert!(reopened.are_equivalent("Birgitta", "Brita"));
    assert!(reopened.are_equivalent("Juho", "Johan"));
    Ok(())
}

#[test]
fn test_concurrent_readers_and_writer() -> family_linker::Result<()> {
    let shared = Arc::new(SharedEquivalences::in_memory(NameEquivalenceIndex::with_defaults()));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                (0..100).all(|_| {
                    shared
                        .snapshot()
                        .is_ok_and(|index| index.are_equivalent("Juho", "Johan"))
                })
            })
        })
        .collect();

    shared.add_equivalence("Brita", "Birgitta")?;
    for reader in readers {
        assert!(reader.join().unwrap());
    }
    assert!(shared.snapshot()?.are_equivalent("Brita", "Birgitta"));
    Ok(())
}
