use anyhow::Result;
use httpmock::prelude::*;
use regex::Regex;
use reqwest::Client;
use saju_core::domain::model::{AdminSettings, GeoDefaults, TimeCalculationMode};
use saju_core::{AdminClient, SajuError};
use serde_json::json;
use std::time::Duration;

fn client_for(server: &MockServer) -> AdminClient {
    AdminClient::new(Client::new(), server.base_url(), Duration::from_secs(5))
}

#[tokio::test]
async fn test_get_settings() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/saju/settings");
            then.status(200).json_body(json!({
                "time_calculation": "true_solar_time",
                "geo_defaults": {
                    "city": "Busan",
                    "latitude": 35.1796,
                    "longitude": 129.0756,
                    "timezone": "Asia/Seoul"
                },
                "engine": {
                    "use_solar_terms": true,
                    "split_midnight_hour": true,
                    "apply_daylight_saving": false
                }
            }));
        })
        .await;

    let settings = client_for(&server).get_settings().await?;

    mock.assert_async().await;
    assert_eq!(settings.time_calculation, TimeCalculationMode::TrueSolarTime);
    assert_eq!(settings.geo_defaults.city, "Busan");
    assert!(settings.engine.split_midnight_hour);
    Ok(())
}

#[tokio::test]
async fn test_update_settings_sends_full_body() -> Result<()> {
    let server = MockServer::start_async().await;
    let settings = AdminSettings {
        time_calculation: TimeCalculationMode::LocalMeanTime,
        ..AdminSettings::default()
    };
    let expected = serde_json::to_value(&settings)?;

    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/saju/settings")
                .json_body(expected.clone());
            then.status(200).json_body(expected.clone());
        })
        .await;

    let updated = client_for(&server).update_settings(&settings).await?;

    mock.assert_async().await;
    assert_eq!(updated, settings);
    Ok(())
}

#[tokio::test]
async fn test_invalid_settings_never_reach_the_server() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/saju/settings");
            then.status(200);
        })
        .await;

    let settings = AdminSettings {
        geo_defaults: GeoDefaults {
            longitude: 200.0,
            ..GeoDefaults::default()
        },
        ..AdminSettings::default()
    };
    let err = client_for(&server).update_settings(&settings).await.unwrap_err();

    assert!(matches!(err, SajuError::InvalidConfigValueError { .. }));
    assert_eq!(mock.hits_async().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_list_users() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user-management/users");
            then.status(200).json_body(json!([
                {"id": "u1", "name": "김민수", "email": "minsu@example.com", "grade": "premium",
                 "created_at": "2024-03-01T00:00:00Z"},
                {"id": "u2", "name": "이지은", "grade": "basic"}
            ]));
        })
        .await;

    let users = client_for(&server).list_users().await?;

    mock.assert_async().await;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].grade, "premium");
    assert!(users[0].created_at.is_some());
    assert_eq!(users[1].email, None);
    Ok(())
}

#[tokio::test]
async fn test_update_user_grade_body_shape() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/user-management/users/u1/grade")
                .json_body(json!({"new_grade": "vip", "reason": "annual plan"}));
            then.status(200)
                .json_body(json!({"id": "u1", "name": "김민수", "grade": "vip"}));
        })
        .await;

    let user = client_for(&server)
        .update_user_grade("u1", "vip", "annual plan")
        .await?;

    mock.assert_async().await;
    assert_eq!(user.grade, "vip");
    Ok(())
}

#[tokio::test]
async fn test_reserved_characters_in_ids_stay_in_the_path() -> Result<()> {
    let server = MockServer::start_async().await;
    let truncated = server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/user-management/users/u1");
            then.status(200)
                .json_body(json!({"id": "u1", "name": "wrong", "grade": "vip"}));
        })
        .await;
    let grade = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path_matches(Regex::new(r"^/api/user-management/users/u1(%3F|\?)x=1/grade$").unwrap());
            then.status(200)
                .json_body(json!({"id": "u1?x=1", "name": "이서연", "grade": "vip"}));
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path_matches(Regex::new(r"^/api/content-management/contents/a(%2F|/)b(%23|#)c$").unwrap());
            then.status(204);
        })
        .await;

    let client = client_for(&server);
    let user = client.update_user_grade("u1?x=1", "vip", "").await?;
    client.delete_content("a/b#c").await?;

    grade.assert_async().await;
    delete.assert_async().await;
    assert_eq!(truncated.hits_async().await, 0);
    assert_eq!(user.id, "u1?x=1");

    let err = tokio_test::assert_err!(client.delete_content("..").await);
    assert!(matches!(err, SajuError::ValidationError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_content_status_and_delete() -> Result<()> {
    let server = MockServer::start_async().await;
    let status_mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/content-management/contents/c9/status")
                .json_body(json!({"status": "published"}));
            then.status(200).json_body(
                json!({"id": "c9", "title": "2025 운세", "status": "published"}),
            );
        })
        .await;
    let delete_mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/content-management/contents/c9");
            then.status(204);
        })
        .await;

    let client = client_for(&server);
    let item = client.update_content_status("c9", "published").await?;
    client.delete_content("c9").await?;

    status_mock.assert_async().await;
    delete_mock.assert_async().await;
    assert_eq!(item.status, "published");
    Ok(())
}

#[tokio::test]
async fn test_send_notification_body_shape() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/notification/send")
                .json_body(json!({
                    "notification_type": "push",
                    "user_ids": ["u1", "u2"],
                    "content": "오늘의 운세가 도착했습니다"
                }));
            then.status(200).json_body(json!({"sent": 2}));
        })
        .await;

    let users = vec!["u1".to_string(), "u2".to_string()];
    let response = client_for(&server)
        .send_notification("push", &users, "오늘의 운세가 도착했습니다")
        .await?;

    mock.assert_async().await;
    assert_eq!(response["sent"], 2);
    Ok(())
}

#[tokio::test]
async fn test_list_notifications() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/notification/history");
            then.status(200).json_body(json!([
                {"id": "n1", "notification_type": "email", "content": "welcome",
                 "recipient_count": 120, "sent_at": "2024-05-01T09:00:00Z"}
            ]));
        })
        .await;

    let history = client_for(&server).list_notifications().await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].recipient_count, Some(120));
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_typed() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/content-management/contents");
            then.status(500).body("database unavailable");
        })
        .await;

    let err = client_for(&server).list_contents().await.unwrap_err();

    match &err {
        SajuError::ApiStatusError {
            status,
            endpoint,
            body,
        } => {
            assert_eq!(*status, 500);
            assert_eq!(endpoint, "/api/content-management/contents");
            assert_eq!(body, "database unavailable");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.is_retryable());
    Ok(())
}

#[tokio::test]
async fn test_request_timeout() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user-management/users");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!([]));
        })
        .await;

    let client = AdminClient::new(Client::new(), server.base_url(), Duration::from_millis(100));
    let err = client.list_users().await.unwrap_err();

    match err {
        SajuError::ApiError(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}
