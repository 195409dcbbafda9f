//! Integration tests for the skill endpoint over real HTTP.

use std::{net::SocketAddr, sync::Arc};

use {
    serde_json::{Value, json},
    skillroute_gateway::build_app,
    skillroute_routing::{
        Dispatcher, Outcome, handler_fn, intent, launch, session_ended, with_slots,
    },
    tokio::net::TcpListener,
};

/// Start a server with a small skill and return its address.
async fn start_server() -> SocketAddr {
    let dispatcher = Dispatcher::new()
        .route(intent(
            "Stop",
            handler_fn(|_| async { Ok(Outcome::Matched(json!({ "speech": "Goodbye" }))) }),
        ))
        .route(intent(
            "Weather",
            with_slots(|_, slots| async move {
                Ok(Outcome::Matched(json!({ "slots": slots })))
            }),
        ))
        .route(intent(
            "Broken",
            handler_fn(|_| async {
                Err::<Outcome<Value>, _>(anyhow::anyhow!("db password=hunter2"))
            }),
        ))
        .route(launch(handler_fn(|_| async {
            Ok(Outcome::Matched(json!({ "speech": "Welcome" })))
        })))
        .route(session_ended(handler_fn(|_| async { Ok(Outcome::<Value>::Skipped) })));

    let app = build_app(Arc::new(dispatcher), "/skill");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn post(addr: SocketAddr, body: Value) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/skill"))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn intent_request_reaches_its_handler() {
    let addr = start_server().await;
    let (status, body) = post(
        addr,
        json!({ "request": { "type": "IntentRequest", "intent": { "name": "Stop" } } }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "speech": "Goodbye" }));
}

#[tokio::test]
async fn launch_request_reaches_launch_handler() {
    let addr = start_server().await;
    let (status, body) = post(addr, json!({ "request": { "type": "LaunchRequest" } })).await;
    assert_eq!(status, 200);
    assert_eq!(body["speech"], "Welcome");
}

#[tokio::test]
async fn unmatched_event_is_404_route_not_found() {
    let addr = start_server().await;
    let (status, body) = post(
        addr,
        json!({ "request": { "type": "IntentRequest", "intent": { "name": "Help" } } }),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(
        body,
        json!({ "code": "NOT_FOUND", "message": "Route not found", "status": 404 })
    );
}

/// A handler that declines counts as no match.
#[tokio::test]
async fn skipped_handler_is_404() {
    let addr = start_server().await;
    let (status, _) = post(addr, json!({ "request": { "type": "SessionEndedRequest" } })).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn slots_are_normalized_in_response() {
    let addr = start_server().await;
    let (status, body) = post(
        addr,
        json!({ "request": { "type": "IntentRequest", "intent": {
            "name": "Weather",
            "slots": { "city": {
                "name": "city",
                "value": "Settle",
                "resolutions": { "resolutionsPerAuthority": [{
                    "status": { "code": "ER_SUCCESS_MATCH" },
                    "values": [{ "value": { "id": "E1", "name": "Seattle" } }]
                }]}
            }}
        }}}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(
        body["slots"]["city"],
        json!({ "name": "city", "id": "E1", "value": "Seattle", "match": "Settle", "resolved": true })
    );
}

#[tokio::test]
async fn malformed_resolution_is_422() {
    let addr = start_server().await;
    let (status, body) = post(
        addr,
        json!({ "request": { "type": "IntentRequest", "intent": {
            "name": "Weather",
            "slots": { "city": {
                "name": "city",
                "value": "Settle",
                "resolutions": { "resolutionsPerAuthority": [] }
            }}
        }}}),
    )
    .await;
    assert_eq!(status, 422);
    assert_eq!(body["code"], "MALFORMED_RESOLUTION");
}

#[tokio::test]
async fn handler_failure_is_500_without_details() {
    let addr = start_server().await;
    let (status, body) = post(
        addr,
        json!({ "request": { "type": "IntentRequest", "intent": { "name": "Broken" } } }),
    )
    .await;
    assert_eq!(status, 500);
    assert_eq!(body["code"], "HANDLER_FAILED");
    assert!(!body.to_string().contains("hunter2"));
}

#[tokio::test]
async fn unknown_request_type_is_rejected() {
    let addr = start_server().await;
    let (status, body) = post(
        addr,
        json!({ "request": { "type": "CanFulfillIntentRequest" } }),
    )
    .await;
    assert_eq!(status, 422);
    assert_eq!(body["code"], "INVALID_REQUEST");
}
