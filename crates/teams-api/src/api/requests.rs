use cynic::{MutationBuilder, QueryBuilder};
use serde::Serialize;

use super::TeamsApi;
use crate::{
    errors::ApiError,
    graphql::{mutations, queries},
    pagination::{PageSource, Paginator, Termination},
    types::TeamRequest,
};

/// Number of requests the server returns per page of `requestsInCollection`.
pub const REQUESTS_PAGE_SIZE: usize = 10;

impl TeamsApi {
    /// Every request stored in a collection. Pagination stops at the first page holding fewer
    /// than [`REQUESTS_PAGE_SIZE`] requests.
    pub async fn get_collection_requests(&self, collection_id: &str) -> Result<Vec<TeamRequest>, ApiError> {
        self.collection_requests_pages(collection_id).collect_all().await
    }

    pub fn collection_requests_pages(&self, collection_id: &str) -> Paginator<CollectionRequests> {
        Paginator::new(
            CollectionRequests {
                api: self.clone(),
                collection_id: collection_id.to_owned(),
            },
            Termination::ShortPage(REQUESTS_PAGE_SIZE),
        )
    }

    /// Stores `request` in a collection of a team.
    ///
    /// The payload is serialized to JSON and kept as an opaque string by the server.
    pub async fn save_request_as_teams<R>(
        &self,
        request: &R,
        title: &str,
        team_id: &str,
        collection_id: &str,
    ) -> Result<(), ApiError>
    where
        R: Serialize + ?Sized,
    {
        let request = serde_json::to_string(request).map_err(ApiError::SerializePayload)?;

        let operation = mutations::CreateRequestInCollection::build(mutations::CreateRequestInCollectionArguments {
            data: mutations::CreateTeamRequestInput {
                team_id,
                title,
                request: &request,
            },
            collection_id,
        });
        let data = self.mutate("createRequestInCollection", &operation).await?;

        let collection = data.create_request_in_collection.collection;
        tracing::debug!(
            collection_id = collection.id.inner(),
            team_id = collection.team.id.inner(),
            team_name = %collection.team.name,
            "request saved"
        );

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_request(&self, request_id: &str) -> Result<bool, ApiError> {
        let operation = mutations::DeleteRequest::build(mutations::DeleteRequestArguments { request_id });
        let data = self.mutate("deleteRequest", &operation).await?;

        Ok(data.delete_request)
    }
}

/// Pages of requests in a collection, ending with a short page.
#[derive(Debug, Clone)]
pub struct CollectionRequests {
    api: TeamsApi,
    collection_id: String,
}

#[async_trait::async_trait]
impl PageSource for CollectionRequests {
    type Item = TeamRequest;

    async fn fetch_page(&self, cursor: &str) -> Result<Vec<TeamRequest>, ApiError> {
        let operation = queries::RequestsInCollection::build(queries::RequestsInCollectionArguments {
            collection_id: &self.collection_id,
            cursor: Some(cursor),
        });
        let data = self.api.query("requestsInCollection", &operation).await?;

        Ok(data.requests_in_collection.into_iter().map(TeamRequest::from).collect())
    }
}
