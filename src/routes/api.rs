use actix_web::{HttpResponse, Responder, get, web};

use crate::forms::main::ApiClientsQueryParams;
use crate::repository::InMemoryRepository;
use crate::services::api::list_clients;

#[get("/v1/clients")]
pub async fn api_v1_clients(
    params: web::Query<ApiClientsQueryParams>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match list_clients(repo.get_ref(), params.into_inner().into()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Failed to list clients: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
