//! Episode rundown endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use showbuild_core::RundownRepository;
use showbuild_models::{EpisodeId, RundownItem};
use tracing::debug;

use crate::client::ApiClient;
use crate::colors::Ack;

#[derive(Debug, Deserialize)]
struct RundownResponse {
    #[serde(default)]
    items: Vec<RundownItem>,
}

/// One entry of the reorder request.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct SegmentOrder {
    filename: String,
    order: i64,
}

#[derive(Debug, Serialize)]
struct ReorderRequest {
    segments: Vec<SegmentOrder>,
}

impl ReorderRequest {
    /// Items without a backing file are addressed as `<slug>.md`.
    fn from_items(items: &[RundownItem]) -> Self {
        let segments = items
            .iter()
            .map(|item| SegmentOrder {
                filename: item
                    .filename
                    .clone()
                    .unwrap_or_else(|| format!("{}.md", item.slug)),
                order: item.position,
            })
            .collect();
        Self { segments }
    }
}

#[async_trait]
impl RundownRepository for ApiClient {
    async fn fetch(&self, episode: &EpisodeId) -> showbuild_core::Result<Vec<RundownItem>> {
        let url = self.endpoint(&["episodes", episode.as_str(), "rundown"])?;
        let response: RundownResponse = self.get_json(url, &[]).await?;
        debug!(episode = %episode, items = response.items.len(), "Fetched rundown");
        Ok(response.items)
    }

    async fn save(&self, episode: &EpisodeId, items: &[RundownItem]) -> showbuild_core::Result<()> {
        let url = self.endpoint(&["episodes", "rundown", episode.as_str(), "reorder"])?;
        let ack: Option<Ack> = self.post_json(url, &ReorderRequest::from_items(items)).await?;
        Ack::check(ack)?;
        debug!(episode = %episode, items = items.len(), "Saved rundown order");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve;
    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use showbuild_core::CoreError;
    use showbuild_models::{ItemStatus, ItemType};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Seen {
        bodies: Arc<Mutex<Vec<(String, Value)>>>,
        auth: Arc<Mutex<Vec<String>>>,
    }

    async fn rundown(Path(episode): Path<String>) -> Result<Json<Value>, StatusCode> {
        if episode != "0237" {
            return Err(StatusCode::NOT_FOUND);
        }
        Ok(Json(json!({"items": [
            {"id": "20 Weather", "type": "weather", "slug": "weather", "title": "Weather",
             "duration": "00:02:00", "order": 20, "filename": "20 Weather.md"},
            {"id": "10 Opening", "type": "segment", "slug": "opening", "title": "Opening",
             "duration": 90, "order": 10, "status": "approved", "filename": "10 Opening.md"}
        ]})))
    }

    async fn reorder(
        State(seen): State<Seen>,
        Path(episode): Path<String>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
            seen.auth.lock().unwrap().push(auth.to_string());
        }
        seen.bodies.lock().unwrap().push((episode, body));
        Json(json!({"success": true}))
    }

    async fn client() -> (ApiClient, Seen) {
        let seen = Seen::default();
        let app = Router::new()
            .route("/episodes/:episode/rundown", get(rundown))
            .route("/episodes/rundown/:episode/reorder", post(reorder))
            .with_state(seen.clone());
        (serve(app).await, seen)
    }

    #[tokio::test]
    async fn test_fetch_rundown() {
        let (client, _) = client().await;
        let items = client.fetch(&EpisodeId::from_string("0237")).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_type, ItemType::Weather);
        assert_eq!(items[1].position, 10);
        assert_eq!(items[1].status, ItemStatus::Approved);
    }

    #[tokio::test]
    async fn test_fetch_missing_episode() {
        let (client, _) = client().await;
        let err = client.fetch(&EpisodeId::from_string("9999")).await.unwrap_err();
        assert!(matches!(err, CoreError::Transport(msg) if msg.contains("404")));
    }

    #[tokio::test]
    async fn test_save_posts_segment_order_with_bearer() {
        let (client, seen) = client().await;
        let client = client.with_token("jwt-123");

        let mut opening = RundownItem::new(ItemType::Segment, "opening", "Opening");
        opening.filename = Some("10 Opening.md".into());
        opening.position = 10;
        let mut tease = RundownItem::new(ItemType::Tease, "tease", "Tease");
        tease.position = 20;

        client
            .save(&EpisodeId::from_string("0237"), &[opening, tease])
            .await
            .unwrap();

        let bodies = seen.bodies.lock().unwrap();
        assert_eq!(bodies[0].0, "0237");
        assert_eq!(
            bodies[0].1,
            json!({"segments": [
                {"filename": "10 Opening.md", "order": 10},
                {"filename": "tease.md", "order": 20}
            ]})
        );
        assert_eq!(seen.auth.lock().unwrap().as_slice(), ["Bearer jwt-123"]);
    }
}
