use mockito::Matcher;
use serde_json::json;
use ticketflow_sentiment::{GoogleLanguageClient, Sentiment, SentimentAnalyzer};

const PATH: &str = "/v1/documents:analyzeSentiment";

fn client_for(server: &mockito::ServerGuard) -> GoogleLanguageClient {
    GoogleLanguageClient::builder()
        .api_key("test-key")
        .base_url(format!("{}/v1", server.url()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_analyze_parses_document_sentiment() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "document": { "type": "PLAIN_TEXT", "content": "I am furious" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"documentSentiment": {"magnitude": 0.9, "score": -0.8}, "language": "en"}"#)
        .create_async()
        .await;

    let sentiment = client_for(&server).analyze("I am furious").await.unwrap();

    assert_eq!(sentiment, Sentiment::new(-0.8, 0.9));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_analyze_surfaces_api_errors() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .with_status(403)
        .with_body(r#"{"error": {"message": "API key not valid"}}"#)
        .create_async()
        .await;

    let err = client_for(&server).analyze("hello").await.unwrap_err();

    assert!(err.to_string().contains("403"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_analyze_empty_sentiment_is_neutral() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"documentSentiment": {}}"#)
        .create_async()
        .await;

    let sentiment = client_for(&server).analyze("ok").await.unwrap();

    assert_eq!(sentiment, Sentiment::neutral());
}
