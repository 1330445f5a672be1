use axum::response::Html;

/// Single-page upload form. Talks to the API on its own origin.
const INDEX_HTML: &str = include_str!("index.html");

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
