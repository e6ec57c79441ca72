pub mod main;

use actix_web::HttpResponse;
use tera::{Context, Tera};

/// Renders a Tera template into an HTML response, answering 500 when
/// rendering fails.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
