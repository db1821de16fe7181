use crate::core::errors::TorusError;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use url::form_urlencoded::byte_serialize;

/// Percent-encode a caller-supplied id for use as one path segment.
///
/// Everything outside `[A-Za-z0-9*-._]` is escaped, so `/`, `?` and `#` in an
/// id can't change which route is hit.
pub fn path_segment(segment: &str) -> String {
    // form encoding turns spaces into '+'; a literal '+' is already %2B
    byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// A single API call, assembled by an endpoint wrapper and consumed by
/// [`RestClient::execute`](crate::core::kernel::RestClient::execute).
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    method: String,
    path: String,
    signature: Option<String>,
    query: QueryParams,
    form: Option<Vec<(String, FormValue)>>,
    body: Option<Value>,
}

impl RequestSpec {
    /// Create a request with an arbitrary verb.
    ///
    /// The verb is only checked at dispatch time; anything
    /// [`parse_method`](crate::core::kernel::rest::parse_method) rejects
    /// fails there without touching the network.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            signature: None,
            query: QueryParams::new(),
            form: None,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new("POST", path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new("PUT", path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new("PATCH", path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new("DELETE", path)
    }

    pub fn head(path: impl Into<String>) -> Self {
        Self::new("HEAD", path)
    }

    #[must_use]
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body. Serialization happens here so the error surfaces
    /// before any I/O.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, TorusError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach multipart form fields. Takes precedence over a JSON body.
    #[must_use]
    pub fn with_form(mut self, fields: Vec<(String, FormValue)>) -> Self {
        self.form = Some(fields);
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn form(&self) -> Option<&[(String, FormValue)]> {
        self.form.as_deref()
    }

    /// Split into the parts the transport needs.
    pub fn into_parts(self) -> RequestParts {
        RequestParts {
            method: self.method,
            path: self.path,
            signature: self.signature,
            query: self.query,
            form: self.form,
            body: self.body,
        }
    }
}

/// Owned pieces of a [`RequestSpec`].
#[derive(Debug)]
pub struct RequestParts {
    pub method: String,
    pub path: String,
    pub signature: Option<String>,
    pub query: QueryParams,
    pub form: Option<Vec<(String, FormValue)>>,
    pub body: Option<Value>,
}

/// Ordered query string pairs. Values are already stringified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Push only when a value was supplied.
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn push_bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.push(key, if value { "true" } else { "false" })
    }

    /// Push a float rendered with a fixed number of decimals.
    pub fn push_float(&mut self, key: &str, value: f64, precision: usize) -> &mut Self {
        self.push(key, format!("{:.*}", precision, value))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

/// One multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File(FileAttachment),
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<FileAttachment> for FormValue {
    fn from(value: FileAttachment) -> Self {
        Self::File(value)
    }
}

/// An in-memory file sent as a multipart part.
#[derive(Clone, PartialEq, Eq)]
pub struct FileAttachment {
    file_name: String,
    content: Vec<u8>,
}

impl FileAttachment {
    pub fn from_bytes(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// Read a file from disk, keeping its base name as the part file name.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, TorusError> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { file_name, content })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn into_content(self) -> Vec<u8> {
        self.content
    }

    pub fn content_type(&self) -> &'static str {
        content_type_for(&self.file_name)
    }
}

impl std::fmt::Debug for FileAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileAttachment")
            .field("file_name", &self.file_name)
            .field("len", &self.content.len())
            .finish()
    }
}

/// Infer a MIME type from a file name's extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("csv") => "text/csv",
        Some("txt") => "text/plain",
        Some("json") => "application/json",
        Some("xls") => "application/vnd.ms-excel",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}
