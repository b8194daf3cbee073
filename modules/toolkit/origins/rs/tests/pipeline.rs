use eyre::{ensure, eyre, Result};

use kinmap_core_rs::normalize::{normalize_matches, normalize_segments};
use kinmap_core_rs::Error;
use kinmap_origins_rs::{Config, Engine, Inheritance};

const CHILD_MATCHES: &[[&str; 3]] = &[
    ["Aunt Ida", "Poland", "1700"],
    ["Jan Kowalski", "Poland", "80"],
    ["Sean Murphy", "Ireland", "60"],
    ["Jan Kowalski", "Poland", "45"],
    ["Kate Byrne", "Ireland", "25"],
    ["Bill Smith", "USA", "30"],
    ["No Country", "", "12"],
];

const PARENT_MATCHES: &[[&str; 3]] = &[
    ["Aunt Ida", "Poland", "3400"],
    ["Jan Kowalski", "Poland", "40"],
    ["Jan Kowalski", "Poland", "60"],
    ["Someone Else", "Lithuania", "20"],
];

const CHILD_SEGMENTS: &[[&str; 4]] = &[
    ["Aunt Ida", "1", "0", "30000000"],
    ["Jan Kowalski", "2", "0", "5000000"],
    ["Sean Murphy", "3", "0", "3000000"],
    ["Sean Murphy", "X", "0", "3000000"],
    ["Jan Kowalski", "chr4", "10000000", "12000000"],
    ["Kate Byrne", "3", "0", "2000000"],
    ["Bill Smith", "3", "0", "3000000"],
    ["Kate Byrne", "", "5000000", "8000000"],
];

#[test]
fn single_group() -> Result<()> {
    let matches = normalize_matches([["P", "Germany", "50"], ["Q", "Denmark", "30"]])?;
    let segments = normalize_segments([
        ["P", "1", "0", "1000000"],
        ["Q", "1", "7000000", "8000000"],
    ])?;

    let engine = Engine::new(Config::default())?;
    let evaluation = engine.evaluate(&matches, &segments)?;

    let mut rows: Vec<_> = evaluation
        .ethnicity()
        .rows()?
        .into_iter()
        .map(|x| x.dissolve())
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    ensure!(
        rows == vec![
            ("Denmark".to_string(), 1, 50.0),
            ("Germany".to_string(), 1, 50.0)
        ],
        "Unexpected rows: {rows:?}"
    );
    ensure!(*evaluation.ethnicity().total() == 2, "Both bins must resolve");
    Ok(())
}

#[test]
fn trio() -> Result<()> {
    let child = normalize_matches(CHILD_MATCHES.iter().copied())?;
    let parent = normalize_matches(PARENT_MATCHES.iter().copied())?;
    let segments = normalize_segments(CHILD_SEGMENTS.iter().copied())?;
    ensure!(child.len() == 6, "Rows with empty fields must be dropped");
    ensure!(segments.len() == 6, "Sex chromosomes and empty rows must be dropped");

    let engine = Engine::new(Config::default())?;
    let result = engine.evaluate_trio(&child, &segments, &parent)?;
    let labels: Vec<_> = result.iter().map(|x| x.0).collect();
    ensure!(labels == Inheritance::ALL, "Unexpected group order: {labels:?}");

    let get = |inheritance: Inheritance| {
        result
            .iter()
            .find(|x| x.0 == inheritance)
            .map(|x| &x.1)
            .ok_or_else(|| eyre!("Missing group: {inheritance}"))
    };

    // Aunt Ida shares less with the child than with the parent, but her segment is too long.
    // The second Jan Kowalski block stays with the parent: 45 cM <= 60 cM.
    let parent = get(Inheritance::Parent)?;
    ensure!(*parent.summary().close_relatives() == 1, "Close relative must be skipped");
    ensure!(parent.ethnicity().countries().len() == 1, "Only Poland is expected");
    ensure!(parent.ethnicity().count("Poland") == 2, "Poland must hold two bins");

    // Unknown to the parent: two Irish matches and an excluded one
    let other = get(Inheritance::OtherParent)?;
    ensure!(*other.summary().excluded() == 1, "USA must be excluded");
    ensure!(other.ethnicity().count("Ireland") == 3, "Ireland must hold three bins");
    ensure!(*other.ethnicity().total() == 3, "Unexpected total");

    // The first Jan Kowalski shares more with the child (80 cM) than with the parent (40 cM)
    let both = get(Inheritance::BothParents)?;
    ensure!(both.ethnicity().count("Poland") == 5, "Poland must hold five bins");
    let rows = both.ethnicity().rows()?;
    ensure!(rows.len() == 1 && *rows[0].percentage() == 100.0, "Unexpected rows: {rows:?}");

    Ok(())
}

#[test]
fn birth_country_ties_leave_bins_unresolved() -> Result<()> {
    let matches = normalize_matches([["P", "Poland", "50"]])?;
    let segments = normalize_segments([["P", "5", "0", "3000000"]])?;

    let mut config = Config::default();
    config.set_birth_country("Ireland");
    let engine = Engine::new(config)?;
    let evaluation = engine.evaluate(&matches, &segments)?;

    // Every bin holds {Poland: 1, Ireland: 1}
    ensure!(*evaluation.summary().reinforced() == 3, "Birth country must reinforce populated bins");
    ensure!(evaluation.ethnicity().is_empty(), "Ties must stay unresolved");

    let err = evaluation
        .ethnicity()
        .rows()
        .err()
        .ok_or_else(|| eyre!("Percentages must be undefined without resolved bins"))?;
    ensure!(
        err.downcast_ref::<Error>() == Some(&Error::DivisionUndefined),
        "Unexpected error: {err}"
    );
    Ok(())
}
