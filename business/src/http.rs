//! Platform-abstracted HTTP client with Send-safe futures.
//!
//! On wasm32, `reqwest::Response` is not `Send` because it wraps JS types
//! that are inherently single-threaded, but commands must return `Send`
//! futures on every target. The split here keeps both sides honest:
//!
//! - on **native**, reqwest is used directly (its futures are `Send`);
//! - on **wasm32**, the request runs on the JS thread via
//!   `wasm_bindgen_futures::spawn_local` and the outcome comes back through
//!   a `flume` channel, which is Send-safe.
//!
//! The surface is deliberately narrow: Roster only ever talks JSON to one
//! REST resource, so the builder knows four methods and one body shape.

/// HTTP method for requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A response reduced to Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response body as bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as text, lossily decoded. Used for surfacing error bodies,
    /// where a replacement character beats losing the message.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Attempt to deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failure: the request produced no HTTP response at all.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// A builder for the one request shape Roster sends: an optional JSON body
/// against a fixed URL.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    json_body: Option<Vec<u8>>,
}

impl RequestBuilder {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            json_body: None,
        }
    }

    /// Set the request body as JSON (and the matching content type).
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        self.json_body = Some(serde_json::to_vec(value)?);
        Ok(self)
    }

    /// Send the request and return a Send-safe future.
    pub async fn send(self) -> HttpResult<Response> {
        log::debug!("http: {} {}", self.method.as_str(), self.url);

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::execute(self.method, self.url, self.json_body).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.send_wasm().await
        }
    }

    /// Hop onto the JS thread for the non-Send part and channel the result
    /// back; `flume::Receiver` is `Send`, so the returned future is too.
    #[cfg(target_arch = "wasm32")]
    async fn send_wasm(self) -> HttpResult<Response> {
        let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);

        let method = self.method;
        let url = self.url;
        let json_body = self.json_body;

        wasm_bindgen_futures::spawn_local(async move {
            let result = Self::execute(method, url, json_body).await;
            let _ = tx.send_async(result).await;
        });

        rx.recv_async()
            .await
            .map_err(|_| HttpError::new("request dropped before completion"))?
    }

    async fn execute(
        method: Method,
        url: String,
        json_body: Option<Vec<u8>>,
    ) -> HttpResult<Response> {
        let client = reqwest::Client::new();

        let mut request = match method {
            Method::Get => client.get(&url),
            Method::Post => client.post(&url),
            Method::Put => client.put(&url),
            Method::Delete => client.delete(&url),
        };

        if let Some(body) = json_body {
            request = request
                .header("content-type", "application/json")
                .body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .to_vec();

        Ok(Response { status, body })
    }
}

/// HTTP client entry points with Send-safe futures on all platforms.
///
/// # Example
///
/// ```ignore
/// use roster_business::http::Client;
///
/// async fn fetch() -> Result<Vec<User>, HttpError> {
///     let response = Client::get("http://localhost:3000/users").send().await?;
///     Ok(response.json().unwrap_or_default())
/// }
/// ```
pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Put, url)
    }

    pub fn delete(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Delete, url)
    }
}
