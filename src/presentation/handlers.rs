// HTTP request handlers for the v1alpha1 JSON gateway
use crate::application::error::ServiceError;
use crate::infrastructure::wire::{
    AddFishRequest, AddFishResponse, AddTankRequest, AddTankResponse, AddTankStatisticRequest,
    AddTankStatisticResponse, DeleteFishRequest, DeleteFishResponse, DeleteTankRequest,
    DeleteTankResponse, DeleteTankStatisticRequest, DeleteTankStatisticResponse, Fish,
    HeartbeatRequest, HeartbeatResponse, ListFishRequest, ListFishResponse,
    ListTankStatisticsRequest, ListTankStatisticsResponse, ListTanksRequest, ListTanksResponse,
    Tank, TankStatistic,
};
use crate::presentation::app_state::AppState;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{delete, get},
};
use std::sync::Arc;

type ApiResult<T> = Result<Json<T>, ServiceError>;

/// Unreadable bodies are reported like any other invalid request.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ServiceError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ServiceError::Validation(rejection.body_text()))
}

/// Routes of the API, relative to where they are mounted.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/heartbeat", get(heartbeat))
        .route("/fish", get(list_fish).post(add_fish))
        .route("/fish/:id", delete(delete_fish))
        .route("/tank/statistics", get(list_tank_statistics).post(add_tank_statistic))
        .route("/tank/statistics/:id", delete(delete_tank_statistic))
        .route("/tanks", get(list_tanks).post(add_tank))
        .route("/tanks/:id", delete(delete_tank))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn heartbeat(State(state): State<Arc<AppState>>) -> ApiResult<HeartbeatResponse> {
    Ok(Json(state.service.heartbeat(HeartbeatRequest {}).await?))
}

pub async fn add_fish(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Fish>, JsonRejection>,
) -> ApiResult<AddFishResponse> {
    let req = AddFishRequest {
        fish: Some(json_body(payload)?),
    };
    Ok(Json(state.service.add_fish(req).await?))
}

pub async fn list_fish(State(state): State<Arc<AppState>>) -> ApiResult<ListFishResponse> {
    Ok(Json(state.service.list_fish(ListFishRequest {}).await?))
}

pub async fn delete_fish(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<DeleteFishResponse> {
    Ok(Json(state.service.delete_fish(DeleteFishRequest { id }).await?))
}

pub async fn add_tank_statistic(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TankStatistic>, JsonRejection>,
) -> ApiResult<AddTankStatisticResponse> {
    let req = AddTankStatisticRequest {
        tank_statistic: Some(json_body(payload)?),
    };
    Ok(Json(state.service.add_tank_statistic(req).await?))
}

pub async fn list_tank_statistics(
    State(state): State<Arc<AppState>>,
) -> ApiResult<ListTankStatisticsResponse> {
    Ok(Json(
        state
            .service
            .list_tank_statistics(ListTankStatisticsRequest {})
            .await?,
    ))
}

pub async fn delete_tank_statistic(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<DeleteTankStatisticResponse> {
    Ok(Json(
        state
            .service
            .delete_tank_statistic(DeleteTankStatisticRequest { id })
            .await?,
    ))
}

pub async fn add_tank(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Tank>, JsonRejection>,
) -> ApiResult<AddTankResponse> {
    let req = AddTankRequest {
        tank: Some(json_body(payload)?),
    };
    Ok(Json(state.service.add_tank(req).await?))
}

pub async fn list_tanks(State(state): State<Arc<AppState>>) -> ApiResult<ListTanksResponse> {
    Ok(Json(state.service.list_tanks(ListTanksRequest {}).await?))
}

pub async fn delete_tank(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<DeleteTankResponse> {
    Ok(Json(state.service.delete_tank(DeleteTankRequest { id }).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryStore;
    use crate::application::track_my_fish_service::{Store, TrackMyFishService};
    use crate::domain::fish::Fish as StoredFish;
    use crate::domain::tank::Tank as StoredTank;
    use crate::domain::tank_statistic::TankStatistic as StoredTankStatistic;
    use serde_json::{Value, json};

    async fn spawn_gateway() -> String {
        let service = TrackMyFishService::new(
            Store::from_repository(Arc::new(MemoryStore::<StoredFish>::new())),
            Store::from_repository(Arc::new(MemoryStore::<StoredTankStatistic>::new())),
            Store::from_repository(Arc::new(MemoryStore::<StoredTank>::new())),
            None,
        );
        let state = Arc::new(AppState { service });
        let router = Router::new()
            .route("/healthz", get(health_check))
            .nest("/api/v1alpha1", api_router())
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_health_check() {
        let base = spawn_gateway().await;
        let body = reqwest::get(format!("{}/healthz", base)).await.unwrap().text().await.unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_heartbeat_without_directory() {
        let base = spawn_gateway().await;
        let body: Value = reqwest::get(format!("{}/api/v1alpha1/heartbeat", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn test_tank_statistic_round_trip_over_http() {
        let base = spawn_gateway().await;
        let client = reqwest::Client::new();

        let added: Value = client
            .post(format!("{}/api/v1alpha1/tank/statistics", base))
            .json(&json!({"testDate": "2021-04-03", "ph": 7.5, "nitrite": 0}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let stat = &added["tankStatistic"];
        assert_eq!(stat["id"], json!(1));
        assert_eq!(stat["testDate"], json!("2021-04-03"));
        assert_eq!(stat["ph"], json!(7.5));
        assert_eq!(stat["nitrite"], json!(0.0));
        assert!(stat.get("gh").is_none());

        let listed: Value = client
            .get(format!("{}/api/v1alpha1/tank/statistics", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(listed["tankStatistics"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_and_delete_fish_over_http() {
        let base = spawn_gateway().await;
        let client = reqwest::Client::new();

        let added: Value = client
            .post(format!("{}/api/v1alpha1/fish", base))
            .json(&json!({"type": "Gourami", "subtype": "Pearl", "gender": "male", "count": 3}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(added["fish"]["gender"], json!("MALE"));
        assert_eq!(added["fish"]["type"], json!("Gourami"));

        let id = added["fish"]["id"].as_i64().unwrap();
        let deleted = client
            .delete(format!("{}/api/v1alpha1/fish/{}", base, id))
            .send()
            .await
            .unwrap();
        assert_eq!(deleted.status(), reqwest::StatusCode::OK);

        let missing = client
            .delete(format!("{}/api/v1alpha1/fish/{}", base, id))
            .send()
            .await
            .unwrap();
        assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
        let body: Value = missing.json().await.unwrap();
        assert_eq!(
            body["message"],
            json!(format!("unable to delete fish: fish with id {} not found", id))
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_json_bad_request() {
        let base = spawn_gateway().await;
        let client = reqwest::Client::new();

        let rsp = client
            .post(format!("{}/api/v1alpha1/tank/statistics", base))
            .json(&json!({"ph": "seven"}))
            .send()
            .await
            .unwrap();
        assert_eq!(rsp.status(), reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(
            rsp.headers()[reqwest::header::CONTENT_TYPE],
            "application/json"
        );
        let body: Value = rsp.json().await.unwrap();
        assert_eq!(body["error"], json!("400 Bad Request"));
        assert!(body["message"].as_str().unwrap().starts_with("invalid request: "));

        let listed: Value = client
            .get(format!("{}/api/v1alpha1/tank/statistics", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(listed, json!({"tankStatistics": []}));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_a_bad_request() {
        let base = spawn_gateway().await;

        let rsp = reqwest::Client::new()
            .post(format!("{}/api/v1alpha1/fish", base))
            .body(r#"{"type": "Gourami"}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(rsp.status(), reqwest::StatusCode::BAD_REQUEST);
        let body: Value = rsp.json().await.unwrap();
        assert!(body["message"].as_str().unwrap().starts_with("invalid request: "));
    }

    #[tokio::test]
    async fn test_out_of_range_reading_is_a_bad_request() {
        let base = spawn_gateway().await;

        let rsp = reqwest::Client::new()
            .post(format!("{}/api/v1alpha1/tank/statistics", base))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(r#"{"testDate": "2021-04-03", "ph": 1e50}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(rsp.status(), reqwest::StatusCode::BAD_REQUEST);
        let body: Value = rsp.json().await.unwrap();
        assert_eq!(
            body["message"],
            json!("invalid request: ph must be a finite number, got inf")
        );
    }

    #[tokio::test]
    async fn test_list_tanks_empty() {
        let base = spawn_gateway().await;
        let body: Value = reqwest::get(format!("{}/api/v1alpha1/tanks", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body, json!({"tanks": []}));
    }
}
