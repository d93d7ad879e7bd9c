//! Organization directory controller.

use crate::{
    extractors::DirectoryQuery,
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use reestr_core::Organization;
use reestr_service::DirectoryPage;
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

/// One page of the organization directory.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationPageResponse {
    /// Matching organizations on this page, in registry order.
    pub items: Vec<Organization>,
    /// Requested page (1-based, after clamping).
    pub current_page: usize,
    /// Page size.
    pub page_size: usize,
    /// Number of organizations matching the search.
    pub total_items: usize,
    /// `ceil(total_items / page_size)`.
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
    /// The search term as applied, lowercased.
    pub search_query: String,
}

impl From<DirectoryPage> for OrganizationPageResponse {
    fn from(page: DirectoryPage) -> Self {
        let info = page.page.info;
        Self {
            items: page.page.items,
            current_page: info.current_page,
            page_size: info.page_size,
            total_items: info.total_items,
            total_pages: info.total_pages,
            has_next: info.has_next,
            has_previous: info.has_previous,
            search_query: page.search_query,
        }
    }
}

/// Creates the organization router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_organizations))
}

/// Search and page through the organization directory.
#[utoipa::path(
    get,
    path = "/organizations",
    tag = "organizations",
    params(DirectoryQuery),
    responses(
        (status = 200, description = "One page of matching organizations", body = OrganizationPageResponse),
        (status = 502, description = "Registry returned an unusable response", body = reestr_core::ErrorResponse),
        (status = 503, description = "Registry unreachable and nothing cached", body = reestr_core::ErrorResponse)
    )
)]
pub async fn list_organizations(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> ApiResult<OrganizationPageResponse> {
    let page = query.page_number();
    debug!("List organizations request: search={:?} page={}", query.search_term(), page);

    let result = state
        .directory_service
        .get_page(query.search_term(), page)
        .await?;

    ok(result.into())
}
