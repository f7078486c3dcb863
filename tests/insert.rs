use http::Method;
use pathtrie::{InsertError, Router, WildcardPolicy};

struct InsertTest(Vec<(&'static str, Result<(), InsertError>)>);

impl InsertTest {
    fn run(self) {
        let mut router = Router::new();
        router.wildcard_policy = WildcardPolicy::Strict;

        for (route, expected) in self.0 {
            let got = router.get(route, route.to_owned());
            assert_eq!(got, expected, "{route}");
        }
    }

    // Merging never fails, whatever the routes.
    fn run_merged(self) {
        let mut router = Router::new();

        for (route, _) in self.0 {
            assert_eq!(router.get(route, route.to_owned()), Ok(()), "{route}");
        }
    }
}

fn conflict(segment: &'static str, with: &'static str) -> InsertError {
    InsertError::Conflict {
        segment: segment.into(),
        with: with.into(),
    }
}

fn wildcard_routes() -> InsertTest {
    InsertTest(vec![
        ("/cmd/:tool/:sub", Ok(())),
        ("/cmd/vet", Err(conflict("vet", "/cmd/:tool/:sub"))),
        ("/foo/bar", Ok(())),
        ("/foo/:name", Ok(())),
        ("/foo/:names", Err(conflict(":names", "/foo/:name"))),
        ("/cmd/*path", Err(conflict("*path", "/cmd/:tool/:sub"))),
        ("/cmd/:tool/names", Err(conflict("names", "/cmd/:tool/:sub"))),
        ("/cmd/:tool/:sub/foo", Ok(())),
        ("/src/*filepath", Ok(())),
        ("/src/:file", Err(conflict(":file", "/src/*filepath"))),
        ("/src/static.json", Err(conflict("static.json", "/src/*filepath"))),
        ("/search/valid", Ok(())),
        ("/search/:query", Ok(())),
        ("/id/:id", Ok(())),
        ("/id/:id", Ok(())),
        ("/id/:id/", Ok(())),
    ])
}

#[test]
fn wildcard_conflict() {
    wildcard_routes().run()
}

#[test]
fn wildcard_merge() {
    wildcard_routes().run_merged()
}

#[test]
fn unnamed_param() {
    InsertTest(vec![
        ("/user/:", Err(InsertError::UnnamedParam)),
        ("/src/*", Err(InsertError::UnnamedParam)),
        ("/user/:name", Ok(())),
        ("/src/*filepath", Ok(())),
    ])
    .run()
}

#[test]
fn child_conflict() {
    InsertTest(vec![
        ("/cmd/vet", Ok(())),
        ("/cmd/:tool", Ok(())),
        ("/cmd/:tool/:sub", Ok(())),
        ("/cmd/:tool/misc", Err(conflict("misc", "/cmd/:tool/:sub"))),
        ("/cmd/:tool/:bad", Err(conflict(":bad", "/cmd/:tool/:sub"))),
        ("/src/AUTHORS", Ok(())),
        ("/src/*filepath", Ok(())),
        ("/user_x", Ok(())),
        ("/user_:name", Ok(())),
        ("/id/:id", Ok(())),
        ("/id:id", Ok(())),
        ("/:id", Ok(())),
        ("/*filepath", Err(conflict("*filepath", "/:id"))),
    ])
    .run()
}

#[test]
fn catch_all_tail_is_ignored() {
    let mut router = Router::new();
    router.wildcard_policy = WildcardPolicy::Strict;

    assert_eq!(router.get("/src/*filepath/x", 1), Ok(()));
    assert_eq!(router.get("/src/*filepath", 2), Ok(()));

    let matched = router.lookup(&Method::GET, "/src/x").unwrap();
    assert_eq!(matched.pattern, "/src/*filepath");
    assert_eq!(*matched.value, 2);
}

#[test]
fn failed_insert_keeps_existing_routes() {
    let mut router = Router::new();
    router.wildcard_policy = WildcardPolicy::Strict;

    router.get("/users/:id", "user").unwrap();
    assert!(router.get("/users/:name", "by name").is_err());

    let matched = router.lookup(&Method::GET, "/users/42").unwrap();
    assert_eq!(*matched.value, "user");
    assert_eq!(matched.params.get("id"), Some("42"));
    assert_eq!(matched.params.get("name"), None);
}

#[test]
fn error_messages() {
    assert_eq!(
        conflict(":name", "/users/:id").to_string(),
        "segment ':name' conflicts with previously registered route: /users/:id"
    );
    assert_eq!(
        InsertError::UnnamedParam.to_string(),
        "parameters must be registered with a name"
    );
}
