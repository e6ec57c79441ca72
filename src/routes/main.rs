use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::error;
use tera::{Context, Tera};

use crate::catalog::CatalogReader;
use crate::dto::main::IndexQuery;
use crate::routes::render_template;
use crate::services::main::load_index_page;

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    catalog: web::Data<dyn CatalogReader>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = IndexQuery::parse(req.query_string());

    let page_data = match load_index_page(catalog.get_ref(), query).await {
        Ok(data) => data,
        Err(err) => {
            error!("Failed to load index page: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("current_page", "index");
    context.insert("cars", &page_data.cars);
    context.insert("pagination", &page_data.pagination);
    context.insert("sort", &page_data.sort);

    render_template(&tera, "main/index.html", &context)
}
