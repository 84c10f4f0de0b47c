//! HTTP client for the catalog API

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use shared::catalog::{CatalogMeta, ProductPage, ProductQuery};
use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::error::{ApiErrorBody, ClientError, ClientResult};

/// Admin identity returned by login.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Response of `POST /api/admin/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminInfo,
}

/// Response of `POST /api/admin/upload-image`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub image_url: String,
}

/// Catalog API client
///
/// Read endpoints need no token; admin write endpoints send the bearer
/// token captured by [`login`](CatalogClient::login).
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// GET /api/products - one filtered catalog page
    pub async fn products(&self, query: &ProductQuery) -> ClientResult<ProductPage> {
        let url = format!("{}/api/products{}", self.base_url, query.to_query_string());
        let response = self.http.get(url).send().await?;
        handle_response(response).await
    }

    /// GET /api/products/{id}
    pub async fn product(&self, id: i64) -> ClientResult<Product> {
        let url = format!("{}/api/products/{id}", self.base_url);
        let response = self.http.get(url).send().await?;
        handle_response(response).await
    }

    /// GET /api/products/meta - facet metadata for the filter UI
    pub async fn meta(&self) -> ClientResult<CatalogMeta> {
        let url = format!("{}/api/products/meta", self.base_url);
        let response = self.http.get(url).send().await?;
        handle_response(response).await
    }

    /// POST /api/admin/login - authenticate and keep the token
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let url = format!("{}/api/admin/login", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let login: LoginResponse = handle_response(response).await?;
        self.token = Some(login.token.clone());
        Ok(login)
    }

    /// POST /api/products
    pub async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product> {
        let url = format!("{}/api/products", self.base_url);
        let response = self.authed(self.http.post(url)).json(payload).send().await?;
        handle_response(response).await
    }

    /// PUT /api/products/{id}
    pub async fn update_product(
        &self,
        id: i64,
        payload: &ProductUpdate,
    ) -> ClientResult<Product> {
        let url = format!("{}/api/products/{id}", self.base_url);
        let response = self.authed(self.http.put(url)).json(payload).send().await?;
        handle_response(response).await
    }

    /// DELETE /api/products/{id}
    pub async fn delete_product(&self, id: i64) -> ClientResult<bool> {
        let url = format!("{}/api/products/{id}", self.base_url);
        let response = self.authed(self.http.delete(url)).send().await?;
        handle_response(response).await
    }

    /// POST /api/admin/upload-image - store an image, get its public URL
    pub async fn upload_image(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<UploadResponse> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("image", part);

        let url = format!("{}/api/admin/upload-image", self.base_url);
        let response = self.authed(self.http.post(url)).multipart(form).send().await?;
        handle_response(response).await
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let text = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), "catalog API request failed");
    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized(text));
    }
    match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => Err(ClientError::Api {
            status: status.as_u16(),
            code: body.code,
            message: body.message,
        }),
        Err(_) => Err(ClientError::Api {
            status: status.as_u16(),
            code: "unknown".to_string(),
            message: text,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = CatalogClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert!(client.token().is_none());
    }
}
