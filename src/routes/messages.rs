use actix_web::{get, web, HttpResponse, Responder};
use log::error;
use minijinja::{context, Environment};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::databases::messages::recent_messages;
use crate::templates::render_page;

/// Display window for the list page. Affects the query only; rows are never
/// expired from storage.
const RECENT_WINDOW_MINUTES: i64 = 30;

#[derive(Serialize)]
struct MessageView {
    content: String,
    timestamp: String,
}

#[get("/messages")]
pub async fn get_messages(
    db: web::Data<SqlitePool>,
    templates: web::Data<Environment<'static>>,
) -> impl Responder {
    let rows = match recent_messages(db.get_ref(), RECENT_WINDOW_MINUTES).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Error fetching messages: {:?}", e);
            return HttpResponse::InternalServerError().body("Database error");
        }
    };

    let messages: Vec<MessageView> = rows
        .into_iter()
        .map(|m| MessageView {
            content: m.content,
            timestamp: m.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
        .collect();

    render_page(&templates, "messages.html", context! { messages })
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(get_messages);
}
