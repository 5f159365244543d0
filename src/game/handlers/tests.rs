use crate::http::tests::test_server;
use axum_test::TestServer;
use serde_json::{json, Value};

async fn start_session(server: &TestServer, body: Value) -> Value {
    let response = server.post("/sessions").json(&body).await;
    response.assert_status_ok();
    response.json::<Value>()
}

fn session_id(body: &Value) -> String {
    body["session"]["sessionId"]
        .as_str()
        .expect("Response should carry a session id.")
        .to_string()
}

#[tokio::test]
async fn test_list_divisions() {
    let server = test_server();

    let response = server.get("/divisions").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["error"], json!(false));
    let divisions = body["divisions"]
        .as_array()
        .expect("Divisions should be a list.");
    assert_eq!(divisions.len(), 28);
    assert_eq!(divisions[0], json!("Andhra Pradesh"));
    assert_eq!(divisions[27], json!("West Bengal"));
}

#[tokio::test]
async fn test_create_session_hides_truth() {
    let server = test_server();

    let body = start_session(&server, json!({})).await;

    assert_eq!(body["error"], json!(false));
    let session = &body["session"];
    assert_eq!(session["state"], json!("roundActive"));
    assert_eq!(session["totalRounds"], json!(5));
    assert_eq!(session["currentRoundIndex"], json!(1));
    assert_eq!(session["cumulativeScore"], json!(0));
    assert_eq!(session["round"]["index"], json!(1));
    assert!(session["round"]["sampledPoint"]["lat"].is_f64());
    assert!(session["round"]["sampledPoint"]["lng"].is_f64());
    assert!(session["round"].get("truth").is_none());
    assert!(session.get("outcome").is_none());
}

#[tokio::test]
async fn test_create_session_with_custom_and_invalid_round_count() {
    let server = test_server();

    let body = start_session(&server, json!({ "totalRounds": 2 })).await;
    assert_eq!(body["session"]["totalRounds"], json!(2));

    let body = start_session(&server, json!({ "totalRounds": 0 })).await;
    assert_eq!(
        body,
        json!({ "error": true, "errorCode": "invalidRoundCount" })
    );
}

#[tokio::test]
async fn test_unknown_session() {
    let server = test_server();

    let response = server.get("/sessions/doesNotExist").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "error": true, "errorCode": "sessionNotFound" }));

    let response = server
        .post("/sessions/doesNotExist/guess")
        .json(&json!({ "division": "Goa" }))
        .await;
    response.assert_json(&json!({ "error": true, "errorCode": "sessionNotFound" }));
}

#[tokio::test]
async fn test_unknown_division_is_rejected() {
    let server = test_server();
    let id = session_id(&start_session(&server, json!({})).await);

    let response = server
        .post(&format!("/sessions/{id}/guess"))
        .json(&json!({ "division": "Atlantis" }))
        .await;
    response.assert_json(&json!({ "error": true, "errorCode": "invalidDivisionName" }));

    let response = server
        .post(&format!("/sessions/{id}/select"))
        .json(&json!({ "division": "Atlantis" }))
        .await;
    response.assert_json(&json!({ "error": true, "errorCode": "invalidDivisionName" }));

    let body = server.get(&format!("/sessions/{id}")).await.json::<Value>();
    assert_eq!(body["session"]["state"], json!("roundActive"));
    assert_eq!(body["session"]["cumulativeScore"], json!(0));
}

#[tokio::test]
async fn test_guess_reveals_truth_and_scores() {
    let server = test_server();
    let id = session_id(&start_session(&server, json!({})).await);

    let response = server
        .post(&format!("/sessions/{id}/guess"))
        .json(&json!({ "division": "Kerala" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["error"], json!(false));
    let outcome = &body["outcome"];
    assert_eq!(outcome["guessedDivisionName"], json!("Kerala"));
    let truth = body["session"]["round"]["truth"]["name"]
        .as_str()
        .expect("Truth should be revealed after a guess.");
    let points = outcome["pointsAwarded"].as_u64().expect("Points are a number.");
    if truth == "Kerala" {
        assert_eq!(outcome["isExactMatch"], json!(true));
        assert_eq!(points, 5000);
    } else {
        let distance = outcome["distanceKm"].as_f64().expect("Distance is a number.");
        let expected = (5000.0 - 8.0 * distance).round().max(0.0) as u64;
        assert_eq!(outcome["isExactMatch"], json!(false));
        assert_eq!(points, expected);
    }
    assert_eq!(body["session"]["state"], json!("roundRevealed"));
    assert_eq!(body["session"]["cumulativeScore"], json!(points));

    let response = server
        .post(&format!("/sessions/{id}/guess"))
        .json(&json!({ "division": "Kerala" }))
        .await;
    response.assert_json(&json!({ "error": true, "errorCode": "sequenceViolation" }));
}

#[tokio::test]
async fn test_reveal_uses_selection_once() {
    let server = test_server();
    let id = session_id(&start_session(&server, json!({})).await);

    let response = server
        .post(&format!("/sessions/{id}/select"))
        .json(&json!({ "division": "Goa" }))
        .await;
    response.assert_json(&json!({ "error": false }));
    let body = server.get(&format!("/sessions/{id}")).await.json::<Value>();
    assert_eq!(body["session"]["selection"], json!("Goa"));

    let first = server
        .post(&format!("/sessions/{id}/reveal"))
        .await
        .json::<Value>();
    assert_eq!(first["outcome"]["guessedDivisionName"], json!("Goa"));
    let second = server
        .post(&format!("/sessions/{id}/reveal"))
        .await
        .json::<Value>();
    assert_eq!(first, second);
    assert_eq!(
        second["session"]["cumulativeScore"],
        first["outcome"]["pointsAwarded"]
    );
}

#[tokio::test]
async fn test_next_requires_a_revealed_round() {
    let server = test_server();
    let id = session_id(&start_session(&server, json!({})).await);

    let response = server.post(&format!("/sessions/{id}/next")).await;

    response.assert_json(&json!({ "error": true, "errorCode": "sequenceViolation" }));
}

#[tokio::test]
async fn test_full_game_accumulates_and_finishes() {
    let server = test_server();
    let id = session_id(&start_session(&server, json!({ "totalRounds": 5 })).await);
    let mut total = 0;

    for round_number in 1..=5 {
        let body = server
            .post(&format!("/sessions/{id}/guess"))
            .json(&json!({ "division": "Bihar" }))
            .await
            .json::<Value>();
        assert_eq!(body["session"]["currentRoundIndex"], json!(round_number));
        total += body["outcome"]["pointsAwarded"]
            .as_u64()
            .expect("Points are a number.");

        let body = server
            .post(&format!("/sessions/{id}/next"))
            .await
            .json::<Value>();
        assert_eq!(body["error"], json!(false));
        if round_number < 5 {
            assert_eq!(body["progress"], json!("nextRound"));
            assert_eq!(body["session"]["state"], json!("roundActive"));
            assert_eq!(body["session"]["round"]["index"], json!(round_number + 1));
        } else {
            assert_eq!(body["progress"], json!("finished"));
            assert_eq!(body["session"]["state"], json!("finished"));
        }
    }

    let body = server.get(&format!("/sessions/{id}")).await.json::<Value>();
    assert_eq!(body["session"]["cumulativeScore"], json!(total));
    assert!(body["session"].get("round").is_none());

    let response = server.post(&format!("/sessions/{id}/reveal")).await;
    response.assert_json(&json!({ "error": true, "errorCode": "sequenceViolation" }));
}

#[tokio::test]
async fn test_create_session_without_body_uses_defaults() {
    let server = test_server();

    let response = server.post("/sessions").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["error"], json!(false));
    assert_eq!(body["session"]["state"], json!("roundActive"));
    assert_eq!(body["session"]["totalRounds"], json!(5));
}
