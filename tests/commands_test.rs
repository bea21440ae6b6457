//! Integration tests for the player command

use fpl_cli::{
    commands::player::{run_player, PlayerParams},
    CacheTtl, FplError, GameweekFilter, PlayerId,
};
use serde_json::json;
use std::str::FromStr;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn mock_api() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bootstrap-static/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [
                {
                    "id": 355, "web_name": "Haaland", "first_name": "Erling",
                    "second_name": "Haaland", "known_as": "", "team": 13,
                    "element_type": 4, "now_cost": 141, "selected_by_percent": "55.2",
                    "total_points": 224, "form": "8.5", "ict_index": "301.1"
                },
                {
                    "id": 400, "web_name": "Haalan", "first_name": "Erik",
                    "second_name": "Haalan", "known_as": "", "team": 99,
                    "element_type": 9, "now_cost": 45, "selected_by_percent": "0.1",
                    "total_points": 3, "form": "0.0", "ict_index": "1.0"
                }
            ],
            "teams": [
                { "id": 13, "name": "Man City", "short_name": "MCI" },
                { "id": 6, "name": "Chelsea", "short_name": "CHE" },
                { "id": 11, "name": "Ipswich", "short_name": "IPS" }
            ],
            "element_types": [
                { "id": 4, "singular_name": "Forward", "singular_name_short": "FWD" }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/element-summary/355/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "history": [
                { "round": 3, "opponent_team": 11, "was_home": false, "total_points": 2,
                  "minutes": 90, "goals_scored": 0, "assists": 0, "clean_sheets": 0 },
                { "round": 1, "opponent_team": 6, "was_home": false, "total_points": 5,
                  "minutes": 90, "goals_scored": 1, "assists": 0, "clean_sheets": 0 },
                { "round": 2, "opponent_team": 11, "was_home": true, "total_points": 0,
                  "minutes": 0, "goals_scored": 0, "assists": 0, "clean_sheets": 0 }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/element-summary/400/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "history": [] })))
        .mount(&server)
        .await;

    server
}

fn params(server: &MockServer) -> PlayerParams {
    PlayerParams {
        id: None,
        name: None,
        gameweeks: GameweekFilter::default(),
        as_json: false,
        cache_ttl: CacheTtl::default(),
        base_url: server.uri(),
    }
}

async fn run(params: PlayerParams) -> fpl_cli::Result<String> {
    let mut out = Vec::new();
    run_player(params, &mut out).await?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[tokio::test]
async fn test_player_by_id_json_with_filter() {
    let server = mock_api().await;
    let text = run(PlayerParams {
        id: Some(PlayerId::new(355)),
        gameweeks: GameweekFilter::from_str("1,3").unwrap(),
        as_json: true,
        ..params(&server)
    })
    .await
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["player"]["name"], "Erling Haaland");
    assert_eq!(value["player"]["team"], "Man City (MCI)");
    assert_eq!(value["player"]["position"], "Forward");
    assert_eq!(value["player"]["cost"], 14.1);

    let rounds: Vec<u64> = value["gameweeks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["round"].as_u64().unwrap())
        .collect();
    assert_eq!(rounds, vec![1, 3]);
    assert_eq!(value["gameweeks"][0]["opponent"], "CHE (A)");
    assert_eq!(value["totals"]["points"], 7);
    assert_eq!(value["totals"]["gameweeks"], json!([1, 3]));
}

#[tokio::test]
async fn test_player_by_name_table() {
    let server = mock_api().await;
    let text = run(PlayerParams {
        name: Some("haaland".to_string()),
        ..params(&server)
    })
    .await
    .unwrap();

    assert!(text.starts_with("Erling Haaland | Man City (MCI) | Forward | £14.1\n"));
    assert!(text.contains("Totals (GW 1-3): 3 matches | 7 pts | 180 min | 1 G | 0 A | 0 CS"));
    assert!(!text.contains("Other close matches"));
}

#[tokio::test]
async fn test_weak_name_match_lists_alternatives() {
    let server = mock_api().await;
    let text = run(PlayerParams {
        name: Some("hln".to_string()),
        ..params(&server)
    })
    .await
    .unwrap();

    assert!(text.starts_with("Erik Haalan | Unknown | Unknown | £4.5\n"));
    assert!(text.contains("No fixtures recorded for the selected gameweeks."));
    assert!(text.contains("Other close matches:"));
    assert!(text.contains("- Erik Haalan (alias: Haalan, distance: 3)"));
    assert!(text.contains("- Erling Haaland (alias: Haaland, distance: 4)"));
}

#[tokio::test]
async fn test_missing_id_and_name() {
    let server = mock_api().await;
    match run(params(&server)).await {
        Err(FplError::InvalidInput { message }) => {
            assert_eq!(message, "either --id or --name must be provided")
        }
        other => panic!("Expected InvalidInput error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_id() {
    let server = mock_api().await;
    let result = run(PlayerParams {
        id: Some(PlayerId::new(9999)),
        ..params(&server)
    })
    .await;
    assert!(matches!(result, Err(FplError::PlayerNotFound { id: 9999 })));
}

#[tokio::test]
async fn test_unmatched_name() {
    let server = mock_api().await;
    let result = run(PlayerParams {
        name: Some("xyz".to_string()),
        ..params(&server)
    })
    .await;
    assert!(matches!(result, Err(FplError::NoMatch { .. })));
}
