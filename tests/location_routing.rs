//! Location parsing, rewriting, and routing through the public API.

use movie_explorer::query::{Location, Route};

#[test]
fn display_is_canonical() {
    for input in ["/", "/?q=matrix", "/?page=2&q=Sci-Fi%201999", "/movies/42"] {
        assert_eq!(Location::parse(input).to_string(), input);
    }
    assert_eq!(Location::parse("").to_string(), "/");
    assert_eq!(Location::parse("/?").to_string(), "/");
}

#[test]
fn with_query_keeps_sibling_params() {
    let location = Location::parse("/?page=2&q=old&sort=year");
    assert_eq!(
        location.with_query(Some("Sci-Fi 1999")).to_string(),
        "/?page=2&q=Sci-Fi%201999&sort=year"
    );
    assert_eq!(location.with_query(None).to_string(), "/?page=2&sort=year");
    assert_eq!(location.with_query(Some("")).to_string(), "/?page=2&sort=year");
}

#[test]
fn with_query_always_targets_home() {
    let rewritten = Location::parse("/movies/42").with_query(Some("matrix"));
    assert_eq!(rewritten.to_string(), "/?q=matrix");
    assert_eq!(rewritten.route(), Route::Home);
}

#[test]
fn query_decodes_through_the_location() {
    let location = Location::parse("/?q=a+b%20c");
    assert_eq!(location.query().unwrap().as_deref(), Some("a+b c"));
    assert_eq!(Location::parse("/").query().unwrap(), None);
    assert_eq!(Location::parse("/?q=").query().unwrap(), None);
    assert!(Location::parse("/?q=%zz").query().is_err());
}

#[test]
fn unknown_paths_route_to_not_found() {
    assert_eq!(Location::parse("/?q=x").route(), Route::Home);
    assert_eq!(
        Location::parse("/movies/42?q=x").route(),
        Route::NotFound {
            path: "/movies/42".to_string()
        }
    );
}
