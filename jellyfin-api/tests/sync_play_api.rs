//! HTTP-level tests for the sync play facade

use jellyfin_api::model::{
    GroupQueueMode, GroupStateType, JoinGroupRequestDto, NewGroupRequestDto, PingRequestDto,
    QueueRequestDto, SeekRequestDto,
};
use jellyfin_api::{ClientConfig, RestClient, SyncPlayApi};
use mockito::Matcher;
use uuid::Uuid;

fn api_for(server: &mockito::Server) -> SyncPlayApi {
    SyncPlayApi::new(&RestClient::new(ClientConfig::new(server.url())))
}

#[test]
fn get_groups_decodes_listing() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/SyncPlay/List")
        .with_status(200)
        .with_body(
            r#"[{
                "GroupId": "0f8fad5bd9cb469fa16570867728950e",
                "GroupName": "Movie night",
                "State": "Waiting",
                "Participants": ["alice", "bob"],
                "LastUpdatedAt": "2021-07-08T20:00:00.0000000Z"
            }]"#,
        )
        .create();

    let api = api_for(&server);
    let groups = api.get_groups().unwrap();

    mock.assert();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].state, GroupStateType::Waiting);
    assert_eq!(groups[0].participants, vec!["alice", "bob"]);
}

#[test]
fn create_group_posts_group_name() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/SyncPlay/New")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "GroupName": "Movie night"
        })))
        .with_status(204)
        .create();

    let api = api_for(&server);
    api.create_group(&NewGroupRequestDto {
        group_name: "Movie night".to_string(),
    })
    .unwrap();

    mock.assert();
}

#[test]
fn join_group_posts_group_id() {
    let mut server = mockito::Server::new();
    let group_id = Uuid::parse_str("0f8fad5b-d9cb-469f-a165-70867728950e").unwrap();
    let mock = server
        .mock("POST", "/SyncPlay/Join")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "GroupId": group_id.to_string()
        })))
        .with_status(204)
        .create();

    let api = api_for(&server);
    api.join_group(&JoinGroupRequestDto { group_id }).unwrap();

    mock.assert();
}

#[test]
fn transport_commands_post_without_body() {
    let mut server = mockito::Server::new();
    let pause = server.mock("POST", "/SyncPlay/Pause").with_status(204).create();
    let unpause = server
        .mock("POST", "/SyncPlay/Unpause")
        .with_status(204)
        .create();
    let stop = server.mock("POST", "/SyncPlay/Stop").with_status(204).create();
    let leave = server
        .mock("POST", "/SyncPlay/Leave")
        .with_status(204)
        .create();

    let api = api_for(&server);
    api.pause().unwrap();
    api.unpause().unwrap();
    api.stop().unwrap();
    api.leave_group().unwrap();

    pause.assert();
    unpause.assert();
    stop.assert();
    leave.assert();
}

#[test]
fn queue_posts_items_and_mode() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/SyncPlay/Queue")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "Mode": "QueueNext"
        })))
        .with_status(204)
        .create();

    let api = api_for(&server);
    api.queue(&QueueRequestDto {
        item_ids: vec![Uuid::nil()],
        mode: GroupQueueMode::QueueNext,
    })
    .unwrap();

    mock.assert();
}

#[test]
fn seek_posts_position_ticks() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/SyncPlay/Seek")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "PositionTicks": 120_000_000
        })))
        .with_status(204)
        .create();

    let api = api_for(&server);
    api.seek(&SeekRequestDto {
        position_ticks: 120_000_000,
    })
    .unwrap();

    mock.assert();
}

#[test]
fn ping_posts_latency() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/SyncPlay/Ping")
        .match_body(Matcher::PartialJson(serde_json::json!({"Ping": 42})))
        .with_status(204)
        .create();

    let api = api_for(&server);
    api.ping(&PingRequestDto { ping: 42 }).unwrap();

    mock.assert();
}
