use std::sync::{Arc, Mutex};

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::ALLOW;
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tower::service_fn;
use tower::util::BoxCloneService;
use tower::Service as _;

type Body = Full<Bytes>;

// The matched route's parameters, copied out of the router so handlers can
// read them from the request extensions.
#[derive(Clone, Debug, Default)]
struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

// GET /
async fn index(_req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    Ok(Response::new(Body::from("Hello, world!")))
}

// GET /hello/:name
async fn hello(req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    let name = req
        .extensions()
        .get::<RouteParams>()
        .and_then(|params| params.get("name"))
        .unwrap_or("stranger");

    Ok(Response::new(Body::from(format!("Hello, {}!", name))))
}

// GET /assets/*filepath
async fn assets(req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    let filepath = req
        .extensions()
        .get::<RouteParams>()
        .and_then(|params| params.get("filepath"))
        .unwrap_or_default();

    Ok(Response::new(Body::from(format!("serving '{}'", filepath))))
}

// 404 handler
async fn not_found(_req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    Ok(Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::default())
        .unwrap())
}

// We can use `BoxCloneService` to erase the type of each handler service.
//
// We still need a `Mutex` around each service because `BoxCloneService` doesn't
// require the service to implement `Sync`.
type Service = Mutex<BoxCloneService<Request<Incoming>, Response<Body>, hyper::Error>>;

// The router keeps one tree per request method.
type Router = pathtrie::Router<Method, Service>;

async fn route(router: Arc<Router>, mut req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    // find the service and parameters for this request
    let found = match router.lookup(req.method(), req.uri().path()) {
        Ok(found) => {
            let params = found
                .params
                .iter()
                .map(|(key, value)| (key.to_owned(), value.to_owned()))
                .collect();

            // lock the service for a very short time, just to clone the service
            let service = found.value.lock().unwrap().clone();
            Some((service, RouteParams(params)))
        }
        Err(_) => None,
    };

    match found {
        Some((mut service, params)) => {
            req.extensions_mut().insert(params);
            service.call(req).await
        }
        None => {
            // the path exists under another method: 405 Method Not Allowed
            let allowed = router.allowed(req.uri().path());
            if !allowed.is_empty() {
                return Ok(Response::builder()
                    .status(StatusCode::METHOD_NOT_ALLOWED)
                    .header(ALLOW, allowed.join(", "))
                    .body(Body::default())
                    .unwrap());
            }

            not_found(req).await
        }
    }
}

#[tokio::main]
async fn main() {
    // Create a router and register our routes.
    let mut router = Router::new();

    // GET / => `index`
    router
        .get("/", BoxCloneService::new(service_fn(index)).into())
        .unwrap();

    // GET /hello/:name => `hello`
    router
        .get("/hello/:name", BoxCloneService::new(service_fn(hello)).into())
        .unwrap();

    // GET /assets/*filepath => `assets`
    router
        .get("/assets/*filepath", BoxCloneService::new(service_fn(assets)).into())
        .unwrap();

    let listener = TcpListener::bind(("127.0.0.1", 3000)).await.unwrap();

    // boilerplate for the hyper service
    let router = Arc::new(router);

    loop {
        let router = router.clone();
        let (tcp, _) = listener.accept().await.unwrap();
        tokio::task::spawn(async move {
            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(
                    TokioIo::new(tcp),
                    hyper::service::service_fn(|request| async {
                        route(router.clone(), request).await
                    }),
                )
                .await
            {
                println!("Error serving connection: {:?}", err);
            }
        });
    }
}
