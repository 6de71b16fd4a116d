mod common;

use common::MockApi;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn get_projects_lists_workspace_projects() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path("/workspaces/ws1/projects"))
            .and(header("X-Api-Key", common::TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "workspaceId": "ws1",
                    "id": "p1",
                    "name": "Site",
                    "archived": false,
                    "billable": true
                },
                {
                    "workspaceId": "ws1",
                    "id": "p2",
                    "name": "Old site",
                    "archived": true,
                    "billable": false
                }
            ]))),
    );

    let projects = api.session().get_projects("ws1").unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "Site");
    assert!(projects[0].is_active());
    assert!(projects[0].billable);
    assert!(!projects[1].is_active());
}

#[test]
fn get_projects_accepts_empty_workspace() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path("/workspaces/empty/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]")),
    );

    assert!(api.session().get_projects("empty").unwrap().is_empty());
}

#[test]
fn get_workspaces_lists_memberships() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path("/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "ws1", "name": "Engine" }
            ]))),
    );

    let workspaces = api.session().get_workspaces().unwrap();
    assert_eq!(workspaces.len(), 1);
    assert_eq!(workspaces[0].id, "ws1");
    assert_eq!(workspaces[0].rounding_minutes, 0);
}

#[test]
fn get_tags_and_tasks_follow_ids() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path("/workspaces/ws1/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "workspaceId": "ws1", "id": "t1", "name": "urgent" }
            ]))),
    );
    api.mount(
        Mock::given(method("GET"))
            .and(path("/workspaces/ws1/projects/p1/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "projectId": "p1", "id": "k1", "name": "Design" },
                { "projectId": "p1", "id": "k2", "name": "Build" }
            ]))),
    );

    let session = api.session();
    let tags = session.get_tags("ws1").unwrap();
    assert_eq!(tags[0].name, "urgent");

    let tasks = session.get_tasks("ws1", "p1").unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|task| task.project_id == "p1"));
}
