use http::Method;
use pathtrie::{MatchError, Router};

fn hello_router() -> Router<Method, &'static str> {
    let mut router = Router::new();
    router.get("/", "index").unwrap();
    router.get("/hello/:name", "hello").unwrap();
    router.get("/hello/b/c", "hello b c").unwrap();
    router.get("/hi/:name", "hi").unwrap();
    router.get("/assets/*filepath", "assets").unwrap();
    router
}

#[test]
fn lookup_values_and_params() {
    let router = hello_router();

    let matched = router.lookup(&Method::GET, "/").unwrap();
    assert_eq!(*matched.value, "index");
    assert!(matched.params.is_empty());

    let matched = router.lookup(&Method::GET, "/hello/world").unwrap();
    assert_eq!(*matched.value, "hello");
    assert_eq!(matched.pattern, "/hello/:name");
    assert_eq!(matched.params.get("name"), Some("world"));

    let matched = router.lookup(&Method::GET, "/hello/b/c").unwrap();
    assert_eq!(*matched.value, "hello b c");
    assert!(matched.params.is_empty());

    let matched = router.lookup(&Method::GET, "/assets/css/a.css").unwrap();
    assert_eq!(*matched.value, "assets");
    assert_eq!(matched.params.get("filepath"), Some("css/a.css"));

    assert_eq!(
        router.lookup(&Method::GET, "/xyz").map(|m| *m.value),
        Err(MatchError::NotFound)
    );
}

#[test]
fn methods_have_separate_trees() {
    let mut router = hello_router();
    router.post("/hello/:name", "post hello").unwrap();
    router.delete("/hello/:id", "delete hello").unwrap();

    assert_eq!(
        router.lookup(&Method::POST, "/hello/x").map(|m| *m.value),
        Ok("post hello")
    );
    assert_eq!(
        router
            .lookup(&Method::DELETE, "/hello/x")
            .map(|m| m.params.get("id").map(str::to_owned)),
        Ok(Some("x".to_owned()))
    );
    assert_eq!(
        router.lookup(&Method::POST, "/hi/x").map(|m| *m.value),
        Err(MatchError::NotFound)
    );
    assert_eq!(
        router.lookup(&Method::PUT, "/").map(|m| *m.value),
        Err(MatchError::NotFound)
    );

    assert!(router.tree(&Method::POST).is_some());
    assert!(router.tree(&Method::PATCH).is_none());
}

#[test]
fn reregistering_replaces_value() {
    let mut router = Router::new();
    router.get("/p/:name/", 1).unwrap();
    router.get("/p/:name", 2).unwrap();
    router.get("//p//:name", 3).unwrap();

    let matched = router.lookup(&Method::GET, "/p/x").unwrap();
    assert_eq!(*matched.value, 3);
    assert_eq!(matched.pattern, "//p//:name");
    assert_eq!(matched.params.get("name"), Some("x"));
}

#[test]
fn registration_order_decides_ties() {
    let mut literal_first = Router::new();
    literal_first.get("/p/go/doc", "go").unwrap();
    literal_first.get("/p/:lang/doc", "lang").unwrap();

    assert_eq!(
        literal_first.lookup(&Method::GET, "/p/go/doc").map(|m| *m.value),
        Ok("go")
    );
    assert_eq!(
        literal_first.lookup(&Method::GET, "/p/rust/doc").map(|m| *m.value),
        Ok("lang")
    );

    let mut wildcard_first = Router::new();
    wildcard_first.get("/p/:lang/doc", "lang").unwrap();
    wildcard_first.get("/p/go/doc", "go").unwrap();

    // the literal route was merged into the wildcard branch and replaced it
    assert_eq!(
        wildcard_first.lookup(&Method::GET, "/p/go/doc").map(|m| *m.value),
        Ok("go")
    );
    assert_eq!(
        wildcard_first.lookup(&Method::GET, "/p/rust/doc").map(|m| *m.value),
        Ok("go")
    );
}

#[test]
fn catch_all_matches_empty_tail() {
    let mut router = Router::new();
    router.get("/files/*filepath", "files").unwrap();

    for (path, expected) in [
        ("/files", ""),
        ("/files/", ""),
        ("/files/LICENSE", "LICENSE"),
        ("/files/templates/article.html", "templates/article.html"),
    ] {
        let matched = router.lookup(&Method::GET, path).unwrap();
        assert_eq!(matched.params.get("filepath"), Some(expected), "{}", path);
    }
}

#[test]
fn clean_path() {
    let mut router = Router::new();
    router.get("/a/c", "ac").unwrap();
    router.get("/a/:b/c", "abc").unwrap();

    assert!(router.lookup(&Method::GET, "/a/./b/../c").is_err());

    router.clean_path = true;
    assert_eq!(
        router.lookup(&Method::GET, "/a/./b/../c").map(|m| *m.value),
        Ok("ac")
    );
    assert_eq!(
        router.lookup(&Method::GET, "/../../a/x/./c").map(|m| *m.value),
        Ok("abc")
    );
}

#[test]
fn allowed_methods() {
    let mut router = Router::new();
    router.get("/products", "all products").unwrap();
    router.post("/products", "product created").unwrap();
    router.put("/products/:id", "product updated").unwrap();
    router.options("/products", "options").unwrap();

    assert_eq!(router.allowed("/products"), ["GET", "POST", "OPTIONS"]);
    assert_eq!(router.allowed("/products/1"), ["PUT", "OPTIONS"]);
    assert_eq!(router.allowed("*"), ["GET", "POST", "PUT", "OPTIONS"]);
    assert!(router.allowed("/nothing").is_empty());
}

#[test]
fn generic_keys() {
    let mut router: Router<&str, u32> = Router::new();
    router.handle("/v1/users/:id", "api", 1).unwrap();
    router.handle("/users/:id", "web", 2).unwrap();

    let matched = router.lookup(&"api", "/v1/users/9").unwrap();
    assert_eq!(*matched.value, 1);
    assert_eq!(matched.params.get("id"), Some("9"));

    assert_eq!(
        router.lookup(&"web", "/v1/users/9").map(|m| *m.value),
        Err(MatchError::NotFound)
    );
}
