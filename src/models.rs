use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccountSettings {
    #[serde(rename = "weekStart", default)]
    pub week_start: String,
    #[serde(rename = "timeZone", default)]
    pub time_zone: String,
    #[serde(rename = "timeFormat", default)]
    pub time_format: String,
    #[serde(rename = "dateFormat", default)]
    pub date_format: String,
}

/// The authenticated user, as returned by `GET /user`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Account {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub workspaces: Vec<Workspace>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clients: Vec<Client>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    #[serde(rename = "time_entries", default, deserialize_with = "null_as_default")]
    pub time_entries: Vec<TimeEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: AccountSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Workspace {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "rounding_minutes", default)]
    pub rounding_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Client {
    #[serde(rename = "workspaceId", default)]
    pub workspace_id: String,
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Project {
    #[serde(rename = "workspaceId", default)]
    pub workspace_id: String,
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub billable: bool,
}

impl Project {
    /// A project accepts new time entries until it is archived.
    ///
    /// This is the inverse of the JSON `archived` field: an archived project
    /// reports `false` here.
    pub fn is_active(&self) -> bool {
        !self.archived
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Task {
    #[serde(rename = "projectId", default)]
    pub project_id: String,
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tag {
    #[serde(rename = "workspaceId", default)]
    pub workspace_id: String,
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeInterval {
    /// ISO 8601 duration such as `PT1H30M`; `None` while the entry runs.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(rename = "end", default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<DateTime<Utc>>,
}

/// A time entry as the API reports it on reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeEntry {
    #[serde(rename = "workspaceId", default, skip_serializing_if = "String::is_empty")]
    pub workspace_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "projectId", alias = "pid", default, deserialize_with = "null_as_default")]
    pub project_id: String,
    #[serde(rename = "taskId", default, deserialize_with = "null_as_default")]
    pub task_id: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,
    #[serde(rename = "timeInterval", default)]
    pub time_interval: TimeInterval,
    #[serde(rename = "tagIds", default, deserialize_with = "null_as_default")]
    pub tag_ids: Vec<String>,
    #[serde(default)]
    pub billable: bool,
}

impl TimeEntry {
    pub fn is_running(&self) -> bool {
        self.time_interval.stop.is_none()
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tag_ids.iter().any(|id| id == tag_id)
    }
}

/// Write-side payload for creating, updating and stopping time entries.
///
/// The API accepts a flatter shape on writes than it returns on reads, and
/// never an id: the server assigns one on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeEntryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(rename = "projectId", default, skip_serializing_if = "String::is_empty")]
    pub project_id: String,
    #[serde(rename = "taskId", default, skip_serializing_if = "String::is_empty")]
    pub task_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(rename = "tagIds", default, skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub billable: bool,
}

impl TimeEntryRequest {
    /// Builds a request that restarts the work described by `entry`.
    pub fn continuing(entry: &TimeEntry, start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            project_id: entry.project_id.clone(),
            task_id: entry.task_id.clone(),
            description: entry.description.clone(),
            end: None,
            tag_ids: entry.tag_ids.clone(),
            billable: entry.billable,
        }
    }

    pub fn stopping(end: DateTime<Utc>) -> Self {
        Self {
            end: Some(end),
            ..Self::default()
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
