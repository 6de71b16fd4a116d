use chrono::{SubsecRound, Utc};

use crate::error::Result;
use crate::models::{Account, Project, Tag, Task, TimeEntry, TimeEntryRequest, Workspace};
use crate::session::Session;

impl Session {
    /// Returns the user's account information.
    pub fn get_account(&self) -> Result<Account> {
        let data = self.get("/user", None)?;
        self.decode(&data)
    }

    pub fn get_workspaces(&self) -> Result<Vec<Workspace>> {
        let data = self.get("/workspaces", None)?;
        self.decode(&data)
    }

    /// Lists every project in a workspace.
    pub fn get_projects(&self, workspace_id: &str) -> Result<Vec<Project>> {
        self.log(format_args!("Getting projects for workspace {workspace_id}"));
        let path = format!("/workspaces/{workspace_id}/projects");
        let data = self.get(&path, None)?;
        self.decode(&data)
    }

    pub fn get_tasks(&self, workspace_id: &str, project_id: &str) -> Result<Vec<Task>> {
        self.log(format_args!("Getting tasks for project {project_id}"));
        let path = format!("/workspaces/{workspace_id}/projects/{project_id}/tasks");
        let data = self.get(&path, None)?;
        self.decode(&data)
    }

    pub fn get_tags(&self, workspace_id: &str) -> Result<Vec<Tag>> {
        self.log(format_args!("Getting tags for workspace {workspace_id}"));
        let path = format!("/workspaces/{workspace_id}/tags");
        let data = self.get(&path, None)?;
        self.decode(&data)
    }

    pub fn get_time_entry(&self, workspace_id: &str, time_entry_id: &str) -> Result<TimeEntry> {
        let path = format!("/workspaces/{workspace_id}/time-entries/{time_entry_id}");
        let data = self.get(&path, None)?;
        self.decode(&data)
    }

    /// Creates a new time entry. Without an `end` the entry keeps running.
    pub fn start_time_entry(
        &self,
        workspace_id: &str,
        request: &TimeEntryRequest,
    ) -> Result<TimeEntry> {
        let path = format!("/workspaces/{workspace_id}/time-entries");
        let data = self.post(&path, Some(request))?;
        self.decode(&data)
    }

    /// Starts a new entry now with the project, task, description, tags and
    /// billable flag of `timer`.
    ///
    /// `duration_only` is accepted for callers tracking duration-only
    /// workspaces; the API has no separate continue call, so it does not
    /// change the request.
    pub fn continue_time_entry(&self, timer: &TimeEntry, duration_only: bool) -> Result<TimeEntry> {
        self.log(format_args!(
            "Continuing timer {} (duration only: {duration_only})",
            timer.id
        ));
        let request = TimeEntryRequest::continuing(timer, Utc::now().trunc_subsecs(0));
        self.start_time_entry(&timer.workspace_id, &request)
    }

    pub fn update_time_entry(
        &self,
        workspace_id: &str,
        time_entry_id: &str,
        request: &TimeEntryRequest,
    ) -> Result<TimeEntry> {
        self.log(format_args!("Updating time entry {time_entry_id}"));
        let path = format!("/workspaces/{workspace_id}/time-entries/{time_entry_id}");
        let data = self.put(&path, Some(request))?;
        self.decode(&data)
    }

    /// Stops the user's running timer in a workspace.
    pub fn stop_time_entry(&self, workspace_id: &str, user_id: &str) -> Result<TimeEntry> {
        self.log(format_args!("Stopping timer for user {user_id}"));
        let path = format!("/workspaces/{workspace_id}/user/{user_id}/time-entries");
        let request = TimeEntryRequest::stopping(Utc::now().trunc_subsecs(0));
        let data = self.patch(&path, Some(&request))?;
        self.decode(&data)
    }

    /// Deletes a time entry and hands back whatever the server replied with.
    pub fn delete_time_entry(&self, workspace_id: &str, time_entry_id: &str) -> Result<Vec<u8>> {
        self.log(format_args!("Deleting time entry {time_entry_id}"));
        let path = format!("/workspaces/{workspace_id}/time-entries/{time_entry_id}");
        self.delete(&path)
    }
}
