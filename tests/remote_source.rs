mod common;

use common::{CannedResponse, MockHttpServer};
use pump_ticker::{
    RemoteIndexSource, SourceError, TokenSource,
    data::load_tokens,
};

const FIVE_ENTRIES: &str = r#"{
    "zeta":  { "name": "Zeta Fund",    "id": "id-zeta",  "supply": 1000 },
    "alpha": { "assetName": "Alpha",   "identifier": "id-alpha", "supply": "2500" },
    "mu":    { "asset_name": "Mu Labs", "assetId": "id-mu",  "supply": 3e6 },
    "beta":  { "name": "Beta",         "id": "id-beta",  "supply": 4 },
    "gamma": { "name": "Gamma",        "id": "id-gamma", "supply": 5 }
}"#;

fn source_for(server: &MockHttpServer) -> RemoteIndexSource {
    RemoteIndexSource::new(server.url("/index"), server.url("/details"))
}

#[tokio::test]
async fn server_error_gives_empty_list() {
    let server = MockHttpServer::start(vec![(
        "/index",
        CannedResponse::json(500, r#"{"error":"boom"}"#),
    )])
    .await;
    let source = source_for(&server);

    assert!(source.get_tokens(3).await.is_empty());
    assert!(matches!(
        source.try_get_tokens(3).await,
        Err(SourceError::Fetch(_))
    ));
    assert!(load_tokens(&source, 3).await.is_empty());
}

#[tokio::test]
async fn first_entries_in_source_order() {
    let server =
        MockHttpServer::start(vec![("/index", CannedResponse::json(200, FIVE_ENTRIES))]).await;
    let infos = source_for(&server).get_tokens(3).await;

    let ids: Vec<&str> = infos.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["id-zeta", "id-alpha", "id-mu"]);
    assert_eq!(infos[0].name, "Zeta Fund");
    assert_eq!(infos[1].supply, 2500);
    assert_eq!(infos[2].supply, 3_000_000);
}

#[tokio::test]
async fn wrong_shape_is_a_parse_error() {
    let server = MockHttpServer::start(vec![(
        "/index",
        CannedResponse::json(200, r#"[{"name":"A","id":"a","supply":1}]"#),
    )])
    .await;
    let source = source_for(&server);

    assert!(matches!(
        source.try_get_tokens(1).await,
        Err(SourceError::Parse(_))
    ));
    assert!(source.get_tokens(1).await.is_empty());
}

#[tokio::test]
async fn load_expands_index_entries() {
    let server =
        MockHttpServer::start(vec![("/index", CannedResponse::json(200, FIVE_ENTRIES))]).await;
    let source = source_for(&server).with_seed(Some(3));

    let tokens = source.load(5).await.unwrap();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].id, "id-zeta");
    assert_eq!(tokens[0].name, "Zeta Fund");
    assert_eq!(tokens[3].supply, Some(4));
    for token in &tokens {
        assert!(token.price > 0.0);
        assert!(token.volume_24h >= 0.0 && token.market_cap >= 0.0);
        assert!(!token.symbol.is_empty());
    }
}

#[tokio::test]
async fn details_expose_leaves() {
    let server = MockHttpServer::start(vec![(
        "/details/id-alpha",
        CannedResponse::json(200, r#"{"leaves":["a","b","c"],"root":"ff"}"#),
    )])
    .await;
    let source = source_for(&server);

    let details = source.fetch_details("id-alpha").await.unwrap();
    assert_eq!(details.leaf_count(), Some(3));

    assert!(matches!(
        source.fetch_details("id-missing").await,
        Err(SourceError::Fetch(_))
    ));
}
