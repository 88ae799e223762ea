use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// One joke as the remote API serializes it. `url` is omitted from the JSON
/// when absent, which lets tests exercise missing-key tolerance in clients.
/// `categories` is the payload's own label list and may disagree with the
/// category the joke is filed under.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Joke {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub value: String,
    pub categories: Vec<String>,
}

impl Joke {
    pub fn new(value: &str, categories: &[&str]) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            url: Some(format!("https://jokes.example.com/{id}")),
            value: value.to_string(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn without_url(value: &str, categories: &[&str]) -> Self {
        Self {
            url: None,
            ..Self::new(value, categories)
        }
    }
}

/// Jokes filed by category. A `BTreeMap` keeps the category listing stable
/// across runs.
pub type Db = Arc<RwLock<BTreeMap<String, Vec<Joke>>>>;

/// Router over a representative seeded dataset: two ordinary categories,
/// one whose joke carries no `url`, and one with no jokes at all (its
/// random call answers JSON `null`).
pub fn app() -> Router {
    let mut jokes = BTreeMap::new();
    jokes.insert(
        "dev".to_string(),
        vec![Joke::new(
            "Why do programmers confuse Halloween and Christmas? Because OCT 31 == DEC 25.",
            &["dev", "career"],
        )],
    );
    jokes.insert(
        "food".to_string(),
        vec![Joke::new(
            "I'm on a seafood diet. I see food, and I eat it.",
            &["food"],
        )],
    );
    jokes.insert(
        "history".to_string(),
        vec![Joke::without_url(
            "I would tell you a history joke, but it's dated.",
            &["history"],
        )],
    );
    jokes.insert("sport".to_string(), Vec::new());
    app_with(Arc::new(RwLock::new(jokes)))
}

/// Router over caller-supplied state.
pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/random", get(random_joke))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_categories(State(db): State<Db>) -> Json<Vec<String>> {
    let jokes = db.read().await;
    Json(jokes.keys().cloned().collect())
}

/// `?category=name` picks from that category: 404 for an unknown category,
/// `null` for a known one with nothing in it. Without the parameter any
/// joke will do.
async fn random_joke(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Option<Joke>>, StatusCode> {
    let jokes = db.read().await;
    match params.get("category") {
        Some(category) => {
            let filed = jokes.get(category).ok_or(StatusCode::NOT_FOUND)?;
            Ok(Json(filed.first().cloned()))
        }
        None => Ok(Json(jokes.values().flatten().next().cloned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joke_serializes_id_as_string() {
        let joke = Joke::new("Test", &["dev"]);
        let json = serde_json::to_value(&joke).unwrap();
        assert_eq!(json["id"], joke.id.to_string());
        assert_eq!(json["value"], "Test");
        assert_eq!(json["categories"], serde_json::json!(["dev"]));
    }

    #[test]
    fn absent_url_is_omitted_from_json() {
        let joke = Joke::without_url("No link", &["history"]);
        let json = serde_json::to_value(&joke).unwrap();
        assert!(json.get("url").is_none());
    }

    #[test]
    fn present_url_points_at_the_joke_id() {
        let joke = Joke::new("Linked", &["dev"]);
        let json = serde_json::to_value(&joke).unwrap();
        let url = json["url"].as_str().unwrap();
        assert!(url.ends_with(&joke.id.to_string()));
    }

    #[test]
    fn none_serializes_as_null() {
        let body = serde_json::to_string(&None::<Joke>).unwrap();
        assert_eq!(body, "null");
    }
}
