use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::dto::main::IndexPage;
use crate::forms::main::IndexQueryParams;
use crate::persistence::SessionSortStore;
use crate::repository::InMemoryRepository;
use crate::routes::{redirect, render_template};
use crate::services::main::load_index_page;

#[get("/")]
pub async fn show_index(
    params: web::Query<IndexQueryParams>,
    session: Session,
    repo: web::Data<InMemoryRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let store = SessionSortStore::new(session);

    let data = match load_index_page(repo.get_ref(), &store, params.into_inner().into()) {
        Ok(IndexPage::Render(data)) => data,
        Ok(IndexPage::Redirect(location)) => return redirect(&location),
        Err(err) => {
            log::error!("Failed to load index page: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("current_page", "index");
    context.insert("clients", &data.clients);
    context.insert("criteria", &data.criteria);
    context.insert("available_fields", &data.available_fields);
    context.insert("panel_open", &data.panel_open);
    context.insert("toggle_panel_url", &data.toggle_panel_url);
    if let Some(sort_param) = &data.sort_param {
        context.insert("sort_param", sort_param);
    }
    if let Some(search_query) = &data.search_query {
        context.insert("search_query", search_query);
    }

    render_template(&tera, "main/index.html", &context)
}
