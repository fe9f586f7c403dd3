use cynic::{MutationBuilder, QueryBuilder};

use super::TeamsApi;
use crate::{
    errors::ApiError,
    graphql::{mutations, queries},
    pagination::{PageSource, Paginator, Termination},
    types::CollectionSummary,
};

impl TeamsApi {
    /// Every root collection of a team, following the cursor until an empty page comes back.
    pub async fn root_collections_of_team(&self, team_id: &str) -> Result<Vec<CollectionSummary>, ApiError> {
        self.root_collections_pages(team_id).collect_all().await
    }

    pub fn root_collections_pages(&self, team_id: &str) -> Paginator<RootCollections> {
        Paginator::new(
            RootCollections {
                api: self.clone(),
                team_id: team_id.to_owned(),
            },
            Termination::EmptyPage,
        )
    }

    /// The direct children of a collection, in server order.
    pub async fn get_collection_children(&self, collection_id: &str) -> Result<Vec<CollectionSummary>, ApiError> {
        let operation = queries::CollectionChildren::build(queries::CollectionChildrenArguments { collection_id });
        let data = self.query("collection", &operation).await?;

        let collection = data
            .collection
            .ok_or_else(|| ApiError::CollectionNotFound(collection_id.to_owned()))?;

        Ok(collection.children.into_iter().map(CollectionSummary::from).collect())
    }

    /// Returns the id of the renamed collection.
    #[tracing::instrument(skip(self))]
    pub async fn rename_collection(&self, new_title: &str, collection_id: &str) -> Result<String, ApiError> {
        let operation = mutations::RenameCollection::build(mutations::RenameCollectionArguments {
            new_title,
            collection_id,
        });
        let data = self.mutate_with_retries("renameCollection", &operation).await?;

        Ok(data.rename_collection.id.into_inner())
    }

    /// Creates a collection under `collection_id` and returns the new collection's id.
    #[tracing::instrument(skip(self))]
    pub async fn add_child_collection(&self, child_title: &str, collection_id: &str) -> Result<String, ApiError> {
        let operation = mutations::CreateChildCollection::build(mutations::CreateChildCollectionArguments {
            child_title,
            collection_id,
        });
        let data = self.mutate_with_retries("createChildCollection", &operation).await?;

        Ok(data.create_child_collection.id.into_inner())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_collection(&self, collection_id: &str) -> Result<bool, ApiError> {
        let operation = mutations::DeleteCollection::build(mutations::CollectionIdArguments { collection_id });
        let data = self.mutate_with_retries("deleteCollection", &operation).await?;

        Ok(data.delete_collection)
    }

    /// Creates a root collection in the team and returns its id.
    #[tracing::instrument(skip(self))]
    pub async fn create_new_root_collection(&self, title: &str, team_id: &str) -> Result<String, ApiError> {
        let operation = mutations::CreateRootCollection::build(mutations::CreateRootCollectionArguments { title, team_id });
        let data = self.mutate_with_retries("createRootCollection", &operation).await?;

        Ok(data.create_root_collection.id.into_inner())
    }
}

/// Pages of root collections, ending with an empty page.
#[derive(Debug, Clone)]
pub struct RootCollections {
    api: TeamsApi,
    team_id: String,
}

#[async_trait::async_trait]
impl PageSource for RootCollections {
    type Item = CollectionSummary;

    async fn fetch_page(&self, cursor: &str) -> Result<Vec<CollectionSummary>, ApiError> {
        let operation = queries::RootCollectionsOfTeam::build(queries::RootCollectionsOfTeamArguments {
            team_id: &self.team_id,
            cursor,
        });
        let data = self.api.query("rootCollectionsOfTeam", &operation).await?;

        Ok(data
            .root_collections_of_team
            .into_iter()
            .map(CollectionSummary::from)
            .collect())
    }
}
