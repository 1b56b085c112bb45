//! HTTP implementation of [`ListService`] on top of `reqwest`.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{ListService, SyncError};
use crate::models::{Item, ItemId, ItemPatch, ListKind, NewItem};

#[derive(Debug, Clone)]
pub struct HttpListService {
    client: reqwest::Client,
    api_base: String,
}

impl HttpListService {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self, kind: ListKind) -> String {
        format!("{}/{}", self.api_base, kind.path())
    }

    fn item_url(&self, kind: ListKind, id: &ItemId) -> String {
        format!("{}/{}/{}", self.api_base, kind.path(), id)
    }
}

fn transport(e: reqwest::Error) -> SyncError {
    SyncError::Transport(e.to_string())
}

/// Map the status line to a [`SyncError`]; 404 means the id is gone.
fn check_status(response: Response, id: Option<&ItemId>) -> Result<Response, SyncError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => Err(SyncError::NotFound(id.clone())),
        _ => Err(SyncError::Transport(format!("unexpected status {}", status))),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SyncError> {
    response.json::<T>().await.map_err(transport)
}

#[async_trait(?Send)]
impl ListService for HttpListService {
    async fn list(&self, kind: ListKind) -> Result<Vec<Item>, SyncError> {
        let url = self.collection_url(kind);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(transport)?;
        decode(check_status(response, None)?).await
    }

    async fn create(&self, kind: ListKind, item: &NewItem) -> Result<Item, SyncError> {
        let url = self.collection_url(kind);
        log::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(item)
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(response, None)?).await
    }

    async fn update(
        &self,
        kind: ListKind,
        id: &ItemId,
        patch: &ItemPatch,
    ) -> Result<Item, SyncError> {
        let url = self.item_url(kind, id);
        log::debug!("PATCH {} {:?}", url, patch);
        let response = self
            .client
            .patch(&url)
            .json(patch)
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(response, Some(id))?).await
    }

    async fn delete(&self, kind: ListKind, id: &ItemId) -> Result<(), SyncError> {
        let url = self.item_url(kind, id);
        log::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await.map_err(transport)?;
        check_status(response, Some(id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let service = HttpListService::new("http://localhost:3000/api/");
        assert_eq!(
            service.collection_url(ListKind::Ideas),
            "http://localhost:3000/api/ideas"
        );
        assert_eq!(
            service.item_url(ListKind::Features, &ItemId::new("7")),
            "http://localhost:3000/api/features/7"
        );
    }

    fn response(status: u16, body: &str) -> Response {
        let response = http::Response::builder()
            .status(status)
            .body(body.to_string())
            .expect("response");
        Response::from(response)
    }

    #[test]
    fn test_404_for_an_item_is_not_found() {
        let id = ItemId::new("7");
        let result = check_status(response(404, r#"{"error":"Idea not found"}"#), Some(&id));
        assert_eq!(result.err(), Some(SyncError::NotFound(id)));
    }

    #[test]
    fn test_404_for_a_collection_is_transport() {
        let result = check_status(response(404, ""), None);
        assert!(matches!(result, Err(SyncError::Transport(_))));
    }

    #[test]
    fn test_server_error_is_transport() {
        let id = ItemId::new("7");
        let result = check_status(response(500, r#"{"error":"Internal server error"}"#), Some(&id));
        assert_eq!(
            result.err(),
            Some(SyncError::Transport("unexpected status 500 Internal Server Error".to_string()))
        );
    }

    #[test]
    fn test_success_passes_through() {
        assert!(check_status(response(200, "[]"), None).is_ok());
    }

    #[tokio::test]
    async fn test_undecodable_body_is_transport() {
        let ok = check_status(response(200, "<html>oops</html>"), None).expect("status ok");
        let result = decode::<Vec<Item>>(ok).await;
        assert!(matches!(result, Err(SyncError::Transport(_))));
    }

    #[tokio::test]
    async fn test_decode_item() {
        let body = r#"{"id":"3","text":"Export CSV","favorite":true,"done":false}"#;
        let item: Item = decode(response(200, body)).await.expect("decode");
        assert_eq!(item.id, ItemId::new("3"));
        assert!(item.favorite);
    }
}
