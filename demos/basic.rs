//! Basic example demonstrating couchlite usage.
//!
//! Expects a CouchDB-compatible server on localhost:5984. Create a couple
//! of databases and a view first to see non-empty output.

use couchlite::{view, DocStoreClient};

#[tokio::main]
async fn main() -> couchlite::Result<()> {
  tracing_subscriber::fmt::init();

  let client = DocStoreClient::new("localhost", "admin", "password");

  // Server and software version info
  let info = client.account_info().await?;
  println!("Connected: {info}");

  // Databases visible to these credentials (requires admin access)
  let dbs = client.databases().await?;
  println!("Databases: {dbs:?}");

  // Run a view through the typed path
  let query = view("albums", "app", "by_artist").limit(10);
  println!("GET {query}");

  let result = client.query_view(&query).await?;
  println!(
    "{} of {:?} rows, offset {:?}",
    result.rows.len(),
    result.total_rows,
    result.offset
  );
  for row in &result.rows {
    println!("  {} [{}] -> {}", row.id, row.key, row.value);
  }

  // Or fetch the raw document and pick fields out of it
  let doc = client.get(&query.compile()).await?;
  if let Some(rows) = couchlite::view::rows(&doc) {
    if let Some(key) = couchlite::view::row_key(rows, 0) {
      println!("First key: {key}");
    }
  }

  Ok(())
}
