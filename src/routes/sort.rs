use actix_session::Session;
use actix_web::{HttpResponse, Responder, post, web};

use crate::domain::sort::UuidIdentitySource;
use crate::forms::sort::{
    AddSortFieldForm, ClearSortForm, MoveSortFieldForm, RemoveSortFieldForm, SortDirectionForm,
    SortForm,
};
use crate::persistence::{SessionSortStore, hydrate, sort_location};
use crate::routes::redirect;
use crate::services::sort::apply_sort_form;

/// Shared tail of the editor handlers: apply, persist, go back to the table.
fn handle_sort_form<F: SortForm>(form: F, session: Session) -> HttpResponse {
    let store = SessionSortStore::new(session);
    match apply_sort_form(&form, &store, &UuidIdentitySource) {
        Ok(update) => redirect(&update.location),
        Err(err) => {
            log::error!("Failed to update sort criteria: {err}");
            let context = form.context();
            redirect(&sort_location(
                "/",
                context.search.as_deref(),
                &hydrate(context.sort.as_deref(), &store),
                true,
            ))
        }
    }
}

#[post("/sort/add")]
pub async fn add_sort_field(
    session: Session,
    web::Form(form): web::Form<AddSortFieldForm>,
) -> impl Responder {
    handle_sort_form(form, session)
}

#[post("/sort/remove")]
pub async fn remove_sort_field(
    session: Session,
    web::Form(form): web::Form<RemoveSortFieldForm>,
) -> impl Responder {
    handle_sort_form(form, session)
}

#[post("/sort/move")]
pub async fn move_sort_field(
    session: Session,
    web::Form(form): web::Form<MoveSortFieldForm>,
) -> impl Responder {
    handle_sort_form(form, session)
}

#[post("/sort/direction")]
pub async fn set_sort_direction(
    session: Session,
    web::Form(form): web::Form<SortDirectionForm>,
) -> impl Responder {
    handle_sort_form(form, session)
}

#[post("/sort/clear")]
pub async fn clear_sort(
    session: Session,
    web::Form(form): web::Form<ClearSortForm>,
) -> impl Responder {
    handle_sort_form(form, session)
}
