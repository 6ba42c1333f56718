pub mod activities;
pub mod health;

use axum::response::Redirect;

/// Send browsers hitting the root to the static UI.
pub async fn index() -> Redirect {
    Redirect::temporary("/static/index.html")
}
