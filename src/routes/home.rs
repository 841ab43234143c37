use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use log::error;
use minijinja::{context, Environment};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::databases::messages::save_message;
use crate::services::webhook::WebhookNotifier;
use crate::templates::render_page;

/// One-shot status message, carried to the next page load in a cookie and
/// cleared the first time it is rendered. Only the short code below ever
/// goes over the wire, never user input.
const FLASH_COOKIE: &str = "flash";

fn flash_message(code: &str) -> Option<(&'static str, &'static str)> {
    match code {
        "saved" => Some(("success", "your message has been saved")),
        "empty" => Some(("error", "No text provided")),
        _ => None,
    }
}

fn flash_cookie(code: &str) -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, code.to_string()).path("/").finish()
}

#[derive(Deserialize)]
pub struct InputForm {
    text: Option<String>,
}

#[get("/")]
pub async fn index(
    req: HttpRequest,
    templates: web::Data<Environment<'static>>,
) -> impl Responder {
    let pending = req.cookie(FLASH_COOKIE);
    let consumed = pending.is_some();
    let flash = pending
        .and_then(|c| flash_message(c.value()))
        .map(|(category, message)| context! { category, message });

    let mut response = render_page(&templates, "index.html", context! { flash });

    if consumed {
        let mut removal = Cookie::new(FLASH_COOKIE, "");
        removal.set_path("/");
        if let Err(e) = response.add_removal_cookie(&removal) {
            error!("Failed to clear flash cookie: {:?}", e);
        }
    }

    response
}

#[post("/input_text")]
pub async fn input_text(
    form: web::Form<InputForm>,
    db: web::Data<SqlitePool>,
    notifier: web::Data<WebhookNotifier>,
) -> impl Responder {
    let text = form.into_inner().text.unwrap_or_default();

    if text.is_empty() {
        return HttpResponse::BadRequest()
            .cookie(flash_cookie("empty"))
            .body("No text provided");
    }

    // The webhook fires before the row is written; a crash between the two
    // steps can notify without persisting.
    notifier.notify(&text).await;

    if let Err(e) = save_message(db.get_ref(), &text).await {
        error!("Insert error: {:?}", e);
        return HttpResponse::InternalServerError().body("Database error");
    }

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(flash_cookie("saved"))
        .finish()
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
    cfg.service(input_text);
}
