pub mod mutations;
pub mod queries;

use std::{fmt, str::FromStr};

#[cynic::schema("teams")]
mod schema {}

/// The role a member holds within a team.
#[derive(cynic::Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TeamMemberRole {
    Owner,
    Editor,
    Viewer,
}

impl TeamMemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamMemberRole::Owner => "OWNER",
            TeamMemberRole::Editor => "EDITOR",
            TeamMemberRole::Viewer => "VIEWER",
        }
    }
}

impl fmt::Display for TeamMemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamMemberRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const VALUES: &[(&str, TeamMemberRole)] = &[
            ("owner", TeamMemberRole::Owner),
            ("editor", TeamMemberRole::Editor),
            ("viewer", TeamMemberRole::Viewer),
        ];

        VALUES
            .iter()
            .find(|(string, _role)| string.eq_ignore_ascii_case(s))
            .map(|(_, role)| *role)
            .ok_or_else(|| {
                format!(
                    r#""{s}" is not a valid team member role (expected one of {})."#,
                    VALUES
                        .iter()
                        .map(|(string, _role)| *string)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}
