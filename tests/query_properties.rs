//! Catalog and search properties checked against the built-in dataset.

#![allow(clippy::unwrap_used)]

use movie_explorer::catalog::{Catalog, DatasetProvider};
use movie_explorer::query::{query_to_url_param, url_param_to_query, QueryEngine};
use movie_explorer::{DecodeError, ExplorerError};

fn engine() -> QueryEngine<Catalog> {
    QueryEngine::new(Catalog::builtin().unwrap())
}

fn titles(results: &[&movie_explorer::Movie]) -> Vec<String> {
    results.iter().map(|movie| movie.title.clone()).collect()
}

#[test]
fn every_movie_is_found_by_its_id() {
    let engine = engine();
    for movie in engine.all() {
        assert_eq!(engine.provider().get_by_id(&movie.id), Some(movie));
        assert_eq!(engine.open_detail(&movie.id).unwrap(), movie);
    }
    assert!(matches!(
        engine.open_detail("tt9999999"),
        Err(ExplorerError::NotFound { id }) if id == "tt9999999"
    ));
}

#[test]
fn results_keep_catalog_order() {
    let engine = engine();
    let all = engine.all();

    for query in ["the", "1994", "drama", "a", "sci-fi", "o"] {
        let results = engine.search(Some(query));
        let mut cursor = all.iter();
        for hit in &results {
            assert!(
                cursor.any(|movie| movie.id == hit.id),
                "{query:?} broke catalog order at {}",
                hit.title
            );
        }
    }
}

#[test]
fn full_title_finds_its_movie() {
    let engine = engine();
    for movie in engine.all() {
        let results = engine.search(Some(&movie.title));
        assert!(results.iter().any(|hit| hit.id == movie.id), "{}", movie.title);
    }
}

#[test]
fn absent_and_empty_queries_return_everything() {
    let engine = engine();
    let everything: Vec<_> = engine.all().iter().collect();
    assert_eq!(engine.search(None), everything);
    assert_eq!(engine.search(Some("")), everything);
}

#[test]
fn search_is_idempotent() {
    let engine = engine();
    for query in [None, Some("matrix"), Some("199"), Some("Crime")] {
        assert_eq!(engine.search(query), engine.search(query));
    }
}

#[test]
fn matrix_scenario() {
    let engine = engine();

    assert_eq!(titles(&engine.search(Some("matrix"))), ["The Matrix"]);
    assert_eq!(titles(&engine.search(Some("1999"))), ["The Matrix"]);
    assert_eq!(
        titles(&engine.search(Some("sci-fi"))),
        ["The Matrix", "Inception", "Back to the Future"]
    );
    assert!(engine.search(Some("zzz-nomatch")).is_empty());
}

#[test]
fn matching_ignores_case_on_every_field() {
    let engine = engine();
    assert_eq!(engine.search(Some("MATRIX")).len(), 1);
    assert_eq!(engine.search(Some("DrAmA")).len(), 2);
    assert_eq!(
        titles(&engine.search(Some("1994"))),
        ["The Shawshank Redemption", "Forrest Gump", "Pulp Fiction"]
    );
}

#[test]
fn query_survives_the_location_round_trip() {
    for query in ["Sci-Fi 1999", "a+b", "100% fun", "Amélie", "rock & roll", "?q=x"] {
        let param = query_to_url_param(Some(query));
        assert_eq!(
            url_param_to_query(param.as_deref()).unwrap().as_deref(),
            Some(query)
        );
    }
}

#[test]
fn canonical_params_survive_the_reverse_round_trip() {
    for param in ["Sci-Fi%201999", "a%2Bb", "Am%C3%A9lie", "plain"] {
        let query = url_param_to_query(Some(param)).unwrap();
        assert_eq!(query_to_url_param(query.as_deref()).as_deref(), Some(param));
    }
}

#[test]
fn damaged_params_are_decode_errors() {
    assert!(matches!(
        url_param_to_query(Some("%E0%A4%A")),
        Err(DecodeError::MalformedEscape { .. })
    ));
    assert!(matches!(
        url_param_to_query(Some("100%")),
        Err(DecodeError::MalformedEscape { position: 3 })
    ));
    assert_eq!(url_param_to_query(Some("%FF%FE")), Err(DecodeError::InvalidUtf8));
}
