use crate::catalog::{CarListQuery, CatalogReader};
use crate::dto::main::{CarCard, IndexPageData, IndexQuery, SortState};
use crate::pagination::Paginated;
use crate::services::ServiceResult;

/// Fetches one page of vehicles and assembles the index page view models.
///
/// Exactly one catalog call per invocation; a fetch failure fails the
/// whole page, no partial rendering.
pub async fn load_index_page<R>(catalog: &R, query: IndexQuery) -> ServiceResult<IndexPageData>
where
    R: CatalogReader + ?Sized,
{
    let mut list_query = CarListQuery::new(query.page);

    if let Some((field, order)) = query.sort_pair() {
        list_query = list_query.sort(field, order);
    }

    let listing = catalog.fetch_cars(list_query).await.map_err(|err| {
        log::error!("Failed to fetch cars: {err}");
        err
    })?;

    let pagination = Paginated::new(query.page, listing.meta.total_pages, query.sort_pair());
    let sort = SortState::new(&query);

    Ok(IndexPageData {
        cars: listing.cars.into_iter().map(CarCard::from).collect(),
        pagination,
        sort,
    })
}
