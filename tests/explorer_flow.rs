//! End-to-end flows through the store, as a host page drives them.

use std::cell::RefCell;
use std::rc::Rc;

use canplayit::app::{
    Action, AnonymousSession, DisplayMode, Event, LoadStatus, LoginGate, StaticSession, Store,
};
use canplayit::catalog::{FilterField, SearchOutcome, HIGHLIGHT_COLOR};
use canplayit::source::{parse_pieces_payload, AUTH_HEADER};
use canplayit::ui::{BodyView, PagerInfo};
use canplayit::{Config, Difficulty, Piece, PieceId, Theme};

fn catalog(n: usize) -> Vec<Piece> {
    (0..n)
        .map(|i| {
            let d = i as f64 / n as f64;
            Piece::new(i as i64, format!("Piece {i}"), "Composer", "romantic", Difficulty::new(d, d))
        })
        .collect()
}

fn loaded_store<A: canplayit::app::AuthSession>(auth: A, pieces: Vec<Piece>) -> Store<A> {
    let mut store = Store::new(&Config::default(), Theme::default(), auth);
    store.dispatch(&Event::Mounted).unwrap();
    store.dispatch(&Event::PiecesLoaded(pieces)).unwrap();
    store
}

fn list_body(store: &Store<impl canplayit::app::AuthSession>) -> canplayit::ui::ListBody {
    match store.state().compute_viewmodel(40, 100).body {
        BodyView::List(list) => list,
        BodyView::Map(_) => panic!("expected list body"),
    }
}

#[test]
fn mount_requests_collection_once() {
    let mut store = Store::new(&Config::default(), Theme::default(), AnonymousSession);

    let actions = store.dispatch(&Event::Mounted).unwrap();
    let [Action::Fetch(request)] = actions.as_slice() else {
        panic!("expected a single fetch, got {actions:?}");
    };
    assert_eq!(request.url, "http://localhost:5000/api/pieces");
    assert_eq!(request.header(AUTH_HEADER), None);
    assert_eq!(store.state().load_status, LoadStatus::Loading);

    assert!(store.dispatch(&Event::Mounted).unwrap().is_empty());
}

#[test]
fn fetch_carries_bearer_credential() {
    let mut store = Store::new(
        &Config::default(),
        Theme::default(),
        StaticSession::new(Some("abc123".to_string())),
    );
    let actions = store.dispatch(&Event::Mounted).unwrap();
    let Some(Action::Fetch(request)) = actions.first() else {
        panic!("expected fetch");
    };
    assert_eq!(request.header(AUTH_HEADER), Some("Bearer abc123"));
    assert!(store.state().authenticated);
}

#[test]
fn twenty_pieces_paginate_into_three_pages() {
    let mut store = loaded_store(AnonymousSession, catalog(20));

    let first = list_body(&store);
    assert_eq!(first.items.len(), 7);
    assert_eq!(first.items[0].title, "Piece 0");
    assert_eq!(first.pager, PagerInfo { current_page: 1, total_pages: 3 });

    store.dispatch(&Event::SelectPage(2)).unwrap();
    let second = list_body(&store);
    assert_eq!(second.items.first().map(|i| i.title.as_str()), Some("Piece 7"));
    assert_eq!(second.items.last().map(|i| i.title.as_str()), Some("Piece 13"));

    store.dispatch(&Event::NextPage).unwrap();
    let third = list_body(&store);
    assert_eq!(third.items.len(), 6);
    assert_eq!(third.items.last().map(|i| i.title.as_str()), Some("Piece 19"));

    assert!(store.dispatch(&Event::NextPage).unwrap().is_empty());
    assert_eq!(store.state().pagination.current_page(), 3);
}

#[test]
fn exact_title_search_and_no_match() {
    let mut store = loaded_store(AnonymousSession, catalog(5));

    store.dispatch(&Event::EditQuery("Piece 3".to_string())).unwrap();
    store.dispatch(&Event::SubmitSearch).unwrap();
    let SearchOutcome::Found(summary) = &store.state().search_outcome else {
        panic!("expected a match");
    };
    assert_eq!(summary.title, "Piece 3");
    assert!(store.state().query_input.is_empty());

    store.dispatch(&Event::EditQuery("piece 3".to_string())).unwrap();
    store.dispatch(&Event::SubmitSearch).unwrap();
    assert_eq!(store.state().search_outcome, SearchOutcome::NoMatch);
}

#[test]
fn empty_search_keeps_previous_outcome() {
    let mut store = loaded_store(AnonymousSession, catalog(5));
    store.dispatch(&Event::EditQuery("Piece 3".to_string())).unwrap();
    store.dispatch(&Event::SubmitSearch).unwrap();
    assert!(store.state().query_input.is_empty());

    let renders = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&renders);
    store.subscribe(move |_| *counter.borrow_mut() += 1);

    let actions = store.dispatch(&Event::SubmitSearch).unwrap();
    assert!(actions.is_empty());
    assert_eq!(*renders.borrow(), 0);
    let SearchOutcome::Found(summary) = &store.state().search_outcome else {
        panic!("expected the earlier match to remain");
    };
    assert_eq!(summary.title, "Piece 3");
}

#[test]
fn reselecting_does_not_navigate_twice() {
    let mut store = loaded_store(AnonymousSession, catalog(5));
    let renders = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&renders);
    store.subscribe(move |_| *counter.borrow_mut() += 1);

    store.dispatch(&Event::SelectPiece(PieceId::from(2))).unwrap();
    store.dispatch(&Event::SelectPiece(PieceId::from(2))).unwrap();
    assert_eq!(*renders.borrow(), 1);

    let selected = list_body(&store);
    let row = selected.items.iter().find(|i| i.is_selected).unwrap();
    assert_eq!(row.swatch, HIGHLIGHT_COLOR);

    store.dispatch(&Event::SelectPiece(PieceId::from(4))).unwrap();
    assert_eq!(store.state().list_selection.selected(), Some(&PieceId::from(4)));

    let actions = store.dispatch(&Event::OpenSelected).unwrap();
    assert_eq!(actions, vec![Action::Navigate { path: "/pieces/4".to_string() }]);
    assert!(store.dispatch(&Event::OpenSelected).unwrap().is_empty());
}

#[test]
fn map_mode_prompts_anonymous_users_after_delay() {
    let mut store = loaded_store(StaticSession::new(None), catalog(3));

    store.dispatch(&Event::ToggleMapMode { at: 1_000 }).unwrap();
    assert_eq!(store.state().display_mode, DisplayMode::Map);
    assert_eq!(store.state().login_gate, LoginGate::Armed { armed_at: 1_000 });

    store.dispatch(&Event::Tick { now: 1_002 }).unwrap();
    assert_eq!(store.auth().prompts(), 0);

    let actions = store.dispatch(&Event::Tick { now: 1_005 }).unwrap();
    assert!(actions.is_empty(), "RequireLogin is consumed by the store");
    assert_eq!(store.auth().prompts(), 1);
    assert_eq!(store.state().login_gate, LoginGate::Prompted);

    store.dispatch(&Event::Tick { now: 1_100 }).unwrap();
    assert_eq!(store.auth().prompts(), 1);

    store.dispatch(&Event::LoginSkipped).unwrap();
    assert_eq!(store.state().login_gate, LoginGate::Skipped);
}

#[test]
fn skip_is_refused_when_not_allowed() {
    let config = Config {
        allow_skip: false,
        ..Config::default()
    };
    let mut store = Store::new(&config, Theme::default(), StaticSession::new(None));
    store.dispatch(&Event::Mounted).unwrap();
    store.dispatch(&Event::PiecesLoaded(catalog(3))).unwrap();

    store.dispatch(&Event::ToggleMapMode { at: 0 }).unwrap();
    store.dispatch(&Event::Tick { now: 10 }).unwrap();
    assert_eq!(store.state().login_gate, LoginGate::Prompted);

    store.dispatch(&Event::LoginSkipped).unwrap();
    assert_eq!(store.state().login_gate, LoginGate::Prompted);
}

#[test]
fn skip_before_prompt_does_not_disable_gate() {
    let mut store = loaded_store(StaticSession::new(None), catalog(3));

    store.dispatch(&Event::LoginSkipped).unwrap();
    assert_eq!(store.state().login_gate, LoginGate::Idle);

    store.dispatch(&Event::ToggleMapMode { at: 0 }).unwrap();
    store.dispatch(&Event::LoginSkipped).unwrap();
    assert_eq!(store.state().login_gate, LoginGate::Armed { armed_at: 0 });

    store.dispatch(&Event::Tick { now: 5 }).unwrap();
    assert_eq!(store.auth().prompts(), 1);
    assert_eq!(store.state().login_gate, LoginGate::Prompted);
}

#[test]
fn leaving_map_mode_before_delay_cancels_prompt() {
    let mut store = loaded_store(StaticSession::new(None), catalog(3));

    store.dispatch(&Event::ToggleMapMode { at: 0 }).unwrap();
    store.dispatch(&Event::ToggleMapMode { at: 2 }).unwrap();
    store.dispatch(&Event::Tick { now: 60 }).unwrap();

    assert_eq!(store.state().display_mode, DisplayMode::List);
    assert_eq!(store.auth().prompts(), 0);
}

#[test]
fn logged_in_users_are_never_prompted() {
    let mut store = loaded_store(StaticSession::new(Some("token".to_string())), catalog(3));

    store.dispatch(&Event::ToggleMapMode { at: 0 }).unwrap();
    store.dispatch(&Event::Tick { now: 600 }).unwrap();

    assert_eq!(store.auth().prompts(), 0);
    assert_eq!(store.state().login_gate, LoginGate::Idle);
}

#[test]
fn selections_are_kept_per_view() {
    let mut store = loaded_store(AnonymousSession, catalog(5));

    store.dispatch(&Event::SelectPiece(PieceId::from(1))).unwrap();
    store.dispatch(&Event::ToggleMapMode { at: 0 }).unwrap();
    assert_eq!(store.state().map_selection.selected(), None);

    store.dispatch(&Event::SelectPiece(PieceId::from(3))).unwrap();
    store.dispatch(&Event::HoverPiece(Some(PieceId::from(2)))).unwrap();
    assert_eq!(store.state().list_selection.selected(), Some(&PieceId::from(1)));
    assert_eq!(store.state().map_selection.selected(), Some(&PieceId::from(3)));
    assert_eq!(store.state().map_selection.hovered(), Some(&PieceId::from(2)));
}

#[test]
fn unmount_while_loading_aborts_and_ignores_late_result() {
    let mut store = Store::new(&Config::default(), Theme::default(), AnonymousSession);
    store.dispatch(&Event::Mounted).unwrap();

    let actions = store.dispatch(&Event::Unmounted).unwrap();
    assert_eq!(actions, vec![Action::CancelFetch]);
    assert_eq!(store.state().load_status, LoadStatus::Aborted);

    store.dispatch(&Event::PiecesLoaded(catalog(3))).unwrap();
    assert!(store.state().pieces.is_empty());
}

#[test]
fn load_failure_is_reported_in_view() {
    let mut store = Store::new(&Config::default(), Theme::default(), AnonymousSession);
    store.dispatch(&Event::Mounted).unwrap();
    store
        .dispatch(&Event::LoadFailed {
            message: "connection refused".to_string(),
        })
        .unwrap();

    let empty = store.state().compute_viewmodel(24, 80).empty_state.unwrap();
    assert_eq!(empty.message, "Could not load pieces");
}

#[test]
fn filter_form_is_captured_but_not_applied_by_default() {
    let mut store = loaded_store(AnonymousSession, catalog(10));

    store
        .dispatch(&Event::EditFilter {
            field: FilterField::Difficulty,
            value: "0-0.3".to_string(),
        })
        .unwrap();
    store.dispatch(&Event::SubmitFilter).unwrap();

    assert_eq!(store.state().filter.difficulty, "0-0.3");
    assert_eq!(store.state().visible_pieces.len(), 10);
}

#[test]
fn filter_applies_when_enabled() {
    let config = Config {
        apply_filters: true,
        ..Config::default()
    };
    let mut store = Store::new(&config, Theme::default(), AnonymousSession);
    store.dispatch(&Event::Mounted).unwrap();
    store.dispatch(&Event::PiecesLoaded(catalog(10))).unwrap();
    store.dispatch(&Event::NextPage).unwrap();

    store
        .dispatch(&Event::EditFilter {
            field: FilterField::Difficulty,
            value: "0-0.25".to_string(),
        })
        .unwrap();
    store.dispatch(&Event::SubmitFilter).unwrap();
    assert_eq!(store.state().visible_pieces.len(), 3);
    assert_eq!(store.state().pagination.current_page(), 1);

    store
        .dispatch(&Event::EditFilter {
            field: FilterField::Difficulty,
            value: "hard".to_string(),
        })
        .unwrap();
    store.dispatch(&Event::SubmitFilter).unwrap();
    assert_eq!(store.state().visible_pieces.len(), 10);
    assert!(store.state().filter_error.is_some());

    store.dispatch(&Event::ClearFilter).unwrap();
    assert!(store.state().filter_error.is_none());
    assert!(store.state().filter.is_empty());
}

#[test]
fn snapshots_are_immutable() {
    let mut store = loaded_store(AnonymousSession, catalog(10));
    let before = store.snapshot();

    store.dispatch(&Event::NextPage).unwrap();

    assert_eq!(before.pagination.current_page(), 1);
    assert_eq!(store.snapshot().pagination.current_page(), 2);
}

#[test]
fn api_payload_feeds_the_store() {
    let body = r#"{
        "_links": {},
        "array": [
            {"id": 12, "title": "Clair de lune", "author": "Debussy", "period": "impressionism",
             "difficulty": {"x1": 0.6, "x2": 0.8}, "key": "Db"},
            {"id": 13, "title": "Gymnopedie No.1", "author": "Satie", "period": "modern",
             "difficulty": {"x1": 0.1, "x2": 0.3}}
        ]
    }"#;
    let pieces = parse_pieces_payload(body).unwrap();
    let mut store = loaded_store(AnonymousSession, pieces);

    let actions = store.dispatch(&Event::OpenPiece(PieceId::from(12))).unwrap();
    assert_eq!(actions, vec![Action::Navigate { path: "/pieces/12".to_string() }]);
}
