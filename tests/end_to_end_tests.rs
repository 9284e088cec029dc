use matchday_sheets::config::{Config, RendererConfig};
use matchday_sheets::data_fetcher::api::create_http_client_with_timeout;
use matchday_sheets::data_fetcher::models::Game;
use matchday_sheets::documents::{HtmlRenderer, renderer_from_config};
use matchday_sheets::sheets::{SheetForm, SheetOutcome, generate_sheets};
use matchday_sheets::testing_utils::TestDataBuilder;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LUBBEEK: &str = "BVBL500075";
const BOUTERSEM: &str = "BVBL500419";

async fn mount_team(server: &MockServer, guid: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/TeamMatchesByGuid"))
        .and(query_param("teamguid", guid))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn test_config(server: &MockServer, output_dir: &std::path::Path) -> Config {
    Config {
        api_base_url: server.uri(),
        output_dir: output_dir.to_string_lossy().to_string(),
        ..Config::default()
    }
}

fn form(teams: &[&str], venues: &[&str], date: &str) -> SheetForm {
    SheetForm {
        teams: teams.iter().map(|s| s.to_string()).collect(),
        venues: venues.iter().map(|s| s.to_string()).collect(),
        date: date.to_string(),
    }
}

fn files_in(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// One matching record at the selected venue yields exactly one sheet and
/// one referee document.
#[tokio::test]
async fn test_single_game_produces_both_documents() {
    let server = MockServer::start().await;
    let temp_dir = tempdir().unwrap();
    let output_dir = temp_dir.path().join("generated");
    let config = test_config(&server, &output_dir);

    mount_team(
        &server,
        "BVBL1447A",
        json!([
            {
                "wedID": "BVBL24259120LIHSE31AAA",
                "datumString": "01-02-2025",
                "beginTijd": "14:30",
                "accGUID": LUBBEEK,
                "accNaam": "Lubbeek",
                "tTNaam": "Hageland United HSE A",
                "tUNaam": "Basket Leuven B",
                "wedOff": ["Jan Peeters"]
            },
            {
                "wedID": "other-day",
                "datumString": "08-02-2025",
                "beginTijd": "14:30",
                "accGUID": LUBBEEK,
                "accNaam": "Lubbeek",
                "tTNaam": "Hageland United HSE A",
                "tUNaam": "Basket Tienen",
                "wedOff": null
            },
            {
                "wedID": "other-venue",
                "datumString": "2025-02-01",
                "beginTijd": "18:00",
                "accGUID": BOUTERSEM,
                "accNaam": "Boutersem",
                "tTNaam": "Hageland United HSE A",
                "tUNaam": "Basket Diest",
                "wedOff": []
            }
        ]),
    )
    .await;

    let client = create_http_client_with_timeout(5).unwrap();
    let request = form(&["A"], &["Lubbeek"], "2025-02-01")
        .validate(&config)
        .unwrap();

    let outcome = generate_sheets(&client, &config, &HtmlRenderer, &request)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SheetOutcome::Generated {
            changing_room: "Kleedkamer-Lubbeek-01-02-2025.html".to_string(),
            referee_payments: vec!["Refs-Lubbeek-01-02-2025.html".to_string()],
        }
    );
    assert_eq!(
        files_in(&output_dir),
        vec![
            "Kleedkamer-Lubbeek-01-02-2025.html",
            "Refs-Lubbeek-01-02-2025.html"
        ]
    );

    let sheet = std::fs::read_to_string(output_dir.join("Kleedkamer-Lubbeek-01-02-2025.html")).unwrap();
    assert!(sheet.contains("Basket Leuven B"));
    assert!(!sheet.contains("Basket Tienen"));
    assert!(!sheet.contains("Basket Diest"));

    let refs = std::fs::read_to_string(output_dir.join("Refs-Lubbeek-01-02-2025.html")).unwrap();
    assert!(refs.contains("BVBL24259120LIHSE31AAA"));
    assert!(refs.contains("Jan Peeters"));
    assert!(refs.contains("Scheidsrechter 2:"));
}

#[tokio::test]
async fn test_games_from_several_teams_share_one_sheet() {
    let server = MockServer::start().await;
    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, temp_dir.path());

    let game = |id: &str, time: &str, home: &str| Game {
        venue_name: "Sporthal Boutersem".to_string(),
        home_team: home.to_string(),
        ..TestDataBuilder::game_at(id, "01-02-2025", time, BOUTERSEM)
    };
    mount_team(&server, "BVBL1447SEN1", json!([game("G2", "16:00", "Seniors")])).await;
    mount_team(&server, "BVBL1447U141", json!([game("G1", "9:00", "Under 14")])).await;

    let client = create_http_client_with_timeout(5).unwrap();
    let request = form(&["SEN1", "U141"], &["Boutersem"], "2025-02-01")
        .validate(&config)
        .unwrap();

    let outcome = generate_sheets(&client, &config, &HtmlRenderer, &request)
        .await
        .unwrap();

    assert_eq!(
        outcome.file_names(),
        vec![
            "Kleedkamer-Sporthal_Boutersem-01-02-2025.html",
            "Refs-Sporthal_Boutersem-01-02-2025.html"
        ]
    );

    let sheet = std::fs::read_to_string(
        temp_dir
            .path()
            .join("Kleedkamer-Sporthal_Boutersem-01-02-2025.html"),
    )
    .unwrap();
    let under_14 = sheet.find("Under 14").unwrap();
    let seniors = sheet.find("Seniors").unwrap();
    assert!(under_14 < seniors, "earlier game should be the first row");
    // First row gets rooms A/1, second row B/2
    let room_a = sheet.find(">A</td>").unwrap();
    let room_b = sheet.find(">B</td>").unwrap();
    assert!(room_a < under_14 && under_14 < room_b && room_b < seniors);
}

#[tokio::test]
async fn test_no_matching_games_writes_nothing() {
    let server = MockServer::start().await;
    let temp_dir = tempdir().unwrap();
    let output_dir = temp_dir.path().join("generated");
    let config = test_config(&server, &output_dir);

    mount_team(&server, "BVBL1447A", json!([])).await;
    Mock::given(method("GET"))
        .and(path("/TeamMatchesByGuid"))
        .and(query_param("teamguid", "BVBL1447B"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = create_http_client_with_timeout(5).unwrap();
    let request = form(&["A", "B"], &["Lubbeek"], "2025-02-01")
        .validate(&config)
        .unwrap();

    let outcome = generate_sheets(&client, &config, &HtmlRenderer, &request)
        .await
        .unwrap();

    assert_eq!(outcome, SheetOutcome::NoGames);
    assert!(!output_dir.exists());
}

#[cfg(unix)]
#[tokio::test]
async fn test_command_renderer_produces_pdf_names() {
    let server = MockServer::start().await;
    let temp_dir = tempdir().unwrap();
    let mut config = test_config(&server, temp_dir.path());
    config.renderer = RendererConfig {
        command: Some(
            ["sh", "-c", "cat > \"$0\"", "{output}"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
    };

    mount_team(
        &server,
        "BVBL1447A",
        json!([TestDataBuilder::game_on("G1", "01-02-2025", "10:00")]),
    )
    .await;

    let client = create_http_client_with_timeout(5).unwrap();
    let renderer = renderer_from_config(&config.renderer).unwrap();
    let request = form(&["A"], &["Lubbeek"], "2025-02-01")
        .validate(&config)
        .unwrap();

    let outcome = generate_sheets(&client, &config, renderer.as_ref(), &request)
        .await
        .unwrap();

    assert_eq!(
        outcome.file_names(),
        vec![
            "Kleedkamer-Lubbeek-01-02-2025.pdf",
            "Refs-Lubbeek-01-02-2025.pdf"
        ]
    );
    let content =
        std::fs::read_to_string(temp_dir.path().join("Kleedkamer-Lubbeek-01-02-2025.pdf")).unwrap();
    assert!(content.contains("KLEEDKAMERS BASKET"));
}
