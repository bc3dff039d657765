use bitrise_io_plugin::api::{ApiClient, ApiError};
use bitrise_io_plugin::pagination::PaginationQuery;
use httpmock::prelude::*;

fn query(pairs: &[(&str, &str)]) -> PaginationQuery {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn list_apps_sends_bearer_token_and_query_params() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/me/apps")
                .header("authorization", "Bearer test-token")
                .query_param("limit", "10")
                .query_param("sort_by", "last_build_at");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{
                        "data": [
                            {
                                "slug": "13533d589b89fb4b",
                                "title": "sample-app",
                                "project_type": "ios",
                                "repo_owner": "bitrise-io",
                                "is_disabled": false
                            }
                        ],
                        "paging": {
                            "total_item_count": 25,
                            "page_item_limit": 10,
                            "next": "8a2b4cd1e0f93567"
                        }
                    }"#,
                );
        })
        .await;

    let client = ApiClient::new("test-token", server.base_url()).unwrap();
    let page = client
        .list_apps(&query(&[("limit", "10"), ("sort_by", "last_build_at")]))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].slug, "13533d589b89fb4b");
    assert_eq!(page.data[0].title, "sample-app");
    assert_eq!(page.data[0].repo_owner.as_deref(), Some("bitrise-io"));
    assert!(!page.data[0].is_disabled);

    let paging = page.paging.unwrap();
    assert_eq!(paging.total_item_count, Some(25));
    assert_eq!(paging.next.as_deref(), Some("8a2b4cd1e0f93567"));
}

#[tokio::test]
async fn list_builds_scopes_the_request_to_the_app() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/apps/13533d589b89fb4b/builds")
                .header("authorization", "Bearer test-token")
                .query_param("next", "cursor-1");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{
                        "data": [
                            {
                                "slug": "9fb6874e1c5a23d0",
                                "build_number": 42,
                                "status_text": "success",
                                "branch": "main",
                                "triggered_workflow": "primary",
                                "triggered_at": "2023-04-18T11:27:45Z"
                            },
                            {
                                "slug": "0d32ac5e7b481f96"
                            }
                        ],
                        "paging": {
                            "total_item_count": 2,
                            "page_item_limit": 50
                        }
                    }"#,
                );
        })
        .await;

    let client = ApiClient::new("test-token", server.base_url()).unwrap();
    let page = client
        .list_builds("13533d589b89fb4b", &query(&[("next", "cursor-1")]))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].build_number, Some(42));
    assert_eq!(page.data[0].status_text.as_deref(), Some("success"));
    // sparse rows deserialize with every optional field absent
    assert_eq!(page.data[1].build_number, None);
    assert_eq!(page.data[1].branch, None);
    assert!(page.paging.unwrap().next.is_none());
}

#[tokio::test]
async fn an_empty_query_adds_no_parameters() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/me/apps");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"data": []}"#);
        })
        .await;

    let client = ApiClient::new("test-token", server.base_url()).unwrap();
    let page = client.list_apps(&PaginationQuery::new()).await.unwrap();

    mock.assert_async().await;
    assert!(page.data.is_empty());
    assert!(page.paging.is_none());
}

#[tokio::test]
async fn a_rejected_token_surfaces_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/me/apps");
            then.status(401)
                .header("content-type", "application/json")
                .body(r#"{"message":"Unauthorized"}"#);
        })
        .await;

    let client = ApiClient::new("bad-token", server.base_url()).unwrap();
    let err = client
        .list_apps(&PaginationQuery::new())
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("Unauthorized"));
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}
