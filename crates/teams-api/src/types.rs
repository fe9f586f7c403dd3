use serde::de::DeserializeOwned;

use crate::{
    graphql::{queries, TeamMemberRole},
    pagination::Cursor,
};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub my_role: TeamMemberRole,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub user_uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub role: TeamMemberRole,
}

/// A team as listed among the teams of the current user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: String,
    pub name: String,
    pub my_role: TeamMemberRole,
}

/// The id and title of a collection, as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CollectionSummary {
    pub id: String,
    pub title: String,
}

/// A request saved in a collection.
///
/// The `request` payload is opaque to the API: it is stored and returned as serialized JSON.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamRequest {
    pub id: String,
    pub title: String,
    pub request: String,
}

impl TeamRequest {
    /// Deserializes the stored payload into the caller's request type.
    pub fn payload<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.request)
    }
}

impl Cursor for TeamSummary {
    fn cursor(&self) -> &str {
        &self.id
    }
}

impl Cursor for CollectionSummary {
    fn cursor(&self) -> &str {
        &self.id
    }
}

impl Cursor for TeamRequest {
    fn cursor(&self) -> &str {
        &self.id
    }
}

impl From<queries::Team> for Team {
    fn from(team: queries::Team) -> Self {
        Team {
            id: team.id.into_inner(),
            name: team.name,
            my_role: team.my_role,
            members: team
                .members
                .into_iter()
                .map(|member| TeamMember {
                    user_uid: member.user.uid.into_inner(),
                    display_name: member.user.display_name,
                    email: member.user.email,
                    role: member.role,
                })
                .collect(),
        }
    }
}

impl From<queries::TeamSummary> for TeamSummary {
    fn from(team: queries::TeamSummary) -> Self {
        TeamSummary {
            id: team.id.into_inner(),
            name: team.name,
            my_role: team.my_role,
        }
    }
}

impl From<queries::TeamCollection> for CollectionSummary {
    fn from(collection: queries::TeamCollection) -> Self {
        CollectionSummary {
            id: collection.id.into_inner(),
            title: collection.title,
        }
    }
}

impl From<queries::TeamRequest> for TeamRequest {
    fn from(request: queries::TeamRequest) -> Self {
        TeamRequest {
            id: request.id.into_inner(),
            title: request.title,
            request: request.request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TeamRequest;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct RestRequest {
        method: String,
        endpoint: String,
    }

    #[test]
    fn payload_decodes_into_the_callers_type() {
        let request = TeamRequest {
            id: "r1".into(),
            title: "List users".into(),
            request: r#"{"method":"GET","endpoint":"https://example.com/users"}"#.into(),
        };

        let payload: RestRequest = request.payload().unwrap();

        assert_eq!(
            RestRequest {
                method: "GET".into(),
                endpoint: "https://example.com/users".into(),
            },
            payload
        );
    }
}
