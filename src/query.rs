//! View query builder.
//!
//! Compiles a CouchDB view request path like
//! `/db/_design/app/_view/by_name?key=%22alice%22&limit=10` for use with
//! [`DocStoreClient::get`](crate::DocStoreClient::get) or
//! [`DocStoreClient::query_view`](crate::DocStoreClient::query_view).

use std::fmt;

use serde_json::Value;

/// Fluent builder for a view request path.
///
/// # Example
/// ```
/// use couchlite::query::ViewQuery;
///
/// let path = ViewQuery::new("albums", "app", "by_artist")
///     .key("barcelona")
///     .limit(10)
///     .compile();
/// assert_eq!(path, "/albums/_design/app/_view/by_artist?key=%22barcelona%22&limit=10");
/// ```
pub struct ViewQuery {
    database: String,
    design: String,
    view: String,
    key: Option<Value>,
    start_key: Option<Value>,
    end_key: Option<Value>,
    limit: Option<usize>,
    skip: Option<usize>,
    descending: bool,
    include_docs: bool,
    reduce: Option<bool>,
    group: bool,
}

impl ViewQuery {
    /// Query the view `view` of design document `_design/<design>` in `database`.
    pub fn new(
        database: impl Into<String>,
        design: impl Into<String>,
        view: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            design: design.into(),
            view: view.into(),
            key: None,
            start_key: None,
            end_key: None,
            limit: None,
            skip: None,
            descending: false,
            include_docs: false,
            reduce: None,
            group: false,
        }
    }

    /// Return only rows matching this key exactly.
    pub fn key(mut self, key: impl Into<Value>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Start the row range at this key.
    pub fn start_key(mut self, key: impl Into<Value>) -> Self {
        self.start_key = Some(key.into());
        self
    }

    /// End the row range at this key.
    pub fn end_key(mut self, key: impl Into<Value>) -> Self {
        self.end_key = Some(key.into());
        self
    }

    /// Cap the number of returned rows.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Skip this many rows before the first returned one.
    pub fn skip(mut self, n: usize) -> Self {
        self.skip = Some(n);
        self
    }

    /// Return rows in reverse key order.
    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }

    /// Include the full document in each row.
    pub fn include_docs(mut self) -> Self {
        self.include_docs = true;
        self
    }

    /// Force the reduce step on or off.
    pub fn reduce(mut self, on: bool) -> Self {
        self.reduce = Some(on);
        self
    }

    /// Group reduce results by key.
    pub fn group(mut self) -> Self {
        self.group = true;
        self
    }

    /// Compile to the request path, query parameters included.
    pub fn compile(&self) -> String {
        let mut path = format!(
            "/{}/_design/{}/_view/{}",
            self.database, self.design, self.view
        );

        let mut params = Vec::new();

        if let Some(ref key) = self.key {
            params.push(format!("key={}", encode_json(key)));
        }
        if let Some(ref key) = self.start_key {
            params.push(format!("startkey={}", encode_json(key)));
        }
        if let Some(ref key) = self.end_key {
            params.push(format!("endkey={}", encode_json(key)));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        if let Some(skip) = self.skip {
            params.push(format!("skip={}", skip));
        }
        if self.descending {
            params.push("descending=true".to_string());
        }
        if self.include_docs {
            params.push("include_docs=true".to_string());
        }
        if let Some(reduce) = self.reduce {
            params.push(format!("reduce={}", reduce));
        }
        if self.group {
            params.push("group=true".to_string());
        }

        if !params.is_empty() {
            path.push('?');
            path.push_str(&params.join("&"));
        }

        path
    }
}

impl fmt::Display for ViewQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compile())
    }
}

/// Create a view query builder.
pub fn view(
    database: impl Into<String>,
    design: impl Into<String>,
    view: impl Into<String>,
) -> ViewQuery {
    ViewQuery::new(database, design, view)
}

// Keys are JSON values on the wire, so they are JSON-encoded first and
// percent-encoded second: the string key ka becomes %22ka%22.
fn encode_json(value: &Value) -> String {
    let json = serde_json::to_string(value).unwrap_or_default();
    urlencoding::encode(&json).into_owned()
}
