//! HTTP handlers and the helpers they share.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

pub mod api;
pub mod main;
pub mod sort;

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").service(api::api_v1_clients))
        .service(main::show_index)
        .service(sort::add_sort_field)
        .service(sort::remove_sort_field)
        .service(sort::move_sort_field)
        .service(sort::set_sort_direction)
        .service(sort::clear_sort);
}

/// Responds with `303 See Other` pointing at `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders `template` or logs and returns `500` when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
