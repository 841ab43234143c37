use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use log::error;
use minijinja::{Environment, Value};

/// Builds the template environment once at startup. Templates are embedded
/// in the binary; the `.html` names keep minijinja's auto-escaping on, so
/// submitted text cannot inject markup into a page.
pub fn build_templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("index.html", include_str!("../templates/index.html"))?;
    env.add_template("messages.html", include_str!("../templates/messages.html"))?;
    Ok(env)
}

pub fn render_page(env: &Environment<'static>, name: &str, ctx: Value) -> HttpResponse {
    match env.get_template(name).and_then(|tmpl| tmpl.render(ctx)) {
        Ok(html) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            error!("Failed to render template '{}': {:?}", name, e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}
