use std::fs;
use std::path::Path;

use serde::Serialize;

use super::errors::ApiError;

/// Closed set of static asset types the app serves. Anything outside this
/// set has no content type and fails the response outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Script,
    Style,
}

impl AssetKind {
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "js" => Some(AssetKind::Script),
            "css" => Some(AssetKind::Style),
            _ => None,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            AssetKind::Script => "text/javascript",
            AssetKind::Style => "text/css",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Text(String),
    Bytes(Vec<u8>),
}

impl Body {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Body::Text(text) => text.as_bytes(),
            Body::Bytes(bytes) => bytes,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    title: &'static str,
    msg: &'static str,
}

/// An HTTP-style result: status line, content type and body, fixed at
/// construction. JSON bodies are serialized up front so a late serialization
/// failure can never corrupt an already-started response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: &'static str,
    content_type: &'static str,
    body: Body,
}

impl Response {
    pub fn html(markup: String) -> Self {
        Self { status: "200 OK", content_type: "text/html", body: Body::Text(markup) }
    }

    pub fn json<T: Serialize>(body: &T) -> Result<Self, ApiError> {
        Ok(Self {
            status: "200 OK",
            content_type: "application/json",
            body: Body::Text(serde_json::to_string(body)?),
        })
    }

    pub fn static_file(path: &Path, suffix: &str) -> Result<Self, ApiError> {
        let kind = AssetKind::from_suffix(suffix)
            .ok_or_else(|| ApiError::UnknownSuffix(suffix.to_string()))?;
        Ok(Self {
            status: "200 OK",
            content_type: kind.content_type(),
            body: Body::Bytes(fs::read(path)?),
        })
    }

    pub fn bad_request() -> Self {
        let body = ErrorBody {
            title: "リクエストが正しくありません",
            msg: "管理者にお問い合わせください",
        };
        Self {
            status: "400 Bad Request",
            content_type: "application/json",
            body: Body::Text(serde_json::to_string(&body).expect("static body")),
        }
    }

    pub fn not_found(page: String) -> Self {
        Self { status: "404 Not Found", content_type: "text/html", body: Body::Text(page) }
    }

    pub fn internal_server_error() -> Self {
        let body = ErrorBody {
            title: "サーバエラーです",
            msg: "管理者にお問い合わせください",
        };
        Self {
            status: "500 Internal Server Error",
            content_type: "application/json",
            body: Body::Text(serde_json::to_string(&body).expect("static body")),
        }
    }

    pub fn status(&self) -> &'static str {
        self.status
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn into_body(self) -> Body {
        self.body
    }
}
