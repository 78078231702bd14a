use crate::dto::api::{ClientsQuery, ClientsResponse};
use crate::persistence::decode_share_param;
use crate::repository::{ClientListQuery, ClientReader};
use crate::services::ServiceResult;
use crate::sorting::sort_clients;

/// Returns the filtered list of clients ordered by the `sort` parameter.
///
/// The API is stateless: only the shareable parameter is consulted.
pub fn list_clients<R>(repo: &R, params: ClientsQuery) -> ServiceResult<ClientsResponse>
where
    R: ClientReader + ?Sized,
{
    let mut query = ClientListQuery::new();
    if let Some(term) = params.search {
        query = query.search(term);
    }

    let criteria = params
        .sort
        .as_deref()
        .and_then(decode_share_param)
        .unwrap_or_default();

    let (total, mut clients) = repo.list_clients(query)?;
    sort_clients(&mut clients, &criteria);

    Ok(ClientsResponse { total, clients })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sort::{SequentialIdentitySource, SortCriteria, SortField};
    use crate::persistence::encode_share_param;
    use crate::repository::InMemoryRepository;

    #[test]
    fn sorts_demo_clients_by_id() {
        let repo = InMemoryRepository::with_demo_clients().expect("demo data");
        let criteria = SortCriteria::new().add(SortField::Id, &SequentialIdentitySource::new());
        let response = list_clients(
            &repo,
            ClientsQuery {
                search: None,
                sort: Some(encode_share_param(&criteria)),
            },
        )
        .expect("listed");
        let ids: Vec<_> = response.clients.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![3, 7, 9, 12, 20, 21, 44, 52, 68, 70]);
        assert_eq!(response.total, 10);
    }

    #[test]
    fn bad_sort_keeps_source_order() {
        let repo = InMemoryRepository::with_demo_clients().expect("demo data");
        let response = list_clients(
            &repo,
            ClientsQuery {
                search: Some("o".to_string()),
                sort: Some("nonsense".to_string()),
            },
        )
        .expect("listed");
        assert_eq!(response.clients[0].id.get(), 20);
    }
}
