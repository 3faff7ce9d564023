//! End-to-end tests: layout in, delivered text out.

use seltext::{
    Command, CommandOutcome, Delivery, DisplayRole, Endpoint, MemoryRenderer, RecordingTransport,
    SelectionRange, Status, TextLayer, TextSpan, Trigger, ViewState, Viewer, ViewerConfig,
};

fn report() -> Vec<TextLayer> {
    vec![
        TextLayer::new(vec![
            TextSpan::new("Báo cáo", 0, DisplayRole::Block),
            TextSpan::new("Phát triển", 1, DisplayRole::Inline),
            TextSpan::new("bền vững", 1, DisplayRole::Inline),
            TextSpan::new("Năm", 2, DisplayRole::Inline),
            TextSpan::new("2024", 3, DisplayRole::Inline),
        ]),
        TextLayer::new(vec![
            TextSpan::new("Mục tiêu", 0, DisplayRole::ListItem),
            TextSpan::new("Giảm phát thải", 1, DisplayRole::ListItem),
        ]),
    ]
}

fn viewer() -> Viewer<MemoryRenderer, RecordingTransport> {
    let mut viewer = Viewer::new(
        MemoryRenderer::from_layers(report()),
        RecordingTransport::new(),
        ViewerConfig::default(),
    );
    viewer.load();
    viewer
}

#[test]
fn whole_first_page_selection() {
    let mut v = viewer();
    let range = SelectionRange::new(
        v.view().boundary(0, 0, 0).unwrap(),
        v.view().boundary(0, 4, 4).unwrap(),
    );
    assert!(matches!(
        v.select(range, Trigger::PointerRelease),
        Delivery::Sent { .. }
    ));
    // Spans of one element are joined as-is; different inline elements get a space.
    assert_eq!(
        v.transport().sent_to(Endpoint::Selection),
        vec!["Báo cáo\nPhát triểnbền vững Năm 2024"]
    );
}

#[test]
fn list_items_break_lines_across_pages() {
    let mut v = viewer();
    let range = SelectionRange::new(
        v.view().boundary(0, 4, 0).unwrap(),
        v.view().boundary(1, 1, 4).unwrap(),
    );
    v.select(range, Trigger::DoubleClick);
    assert_eq!(
        v.transport().sent_to(Endpoint::Selection),
        vec!["2024\nMục tiêu\nGiảm"]
    );
}

#[test]
fn backwards_drag_is_ordered() {
    let mut v = viewer();
    let anchor = v.view().boundary(1, 1, 14).unwrap();
    let focus = v.view().boundary(1, 1, 5).unwrap();
    v.select(
        SelectionRange::from_anchor_focus(anchor, focus),
        Trigger::PointerRelease,
    );
    assert_eq!(v.transport().sent_to(Endpoint::Selection), vec!["phát thải"]);
}

#[test]
fn keyboard_session() {
    let mut v = viewer();
    let zoom_in = Command::from_key_chord(true, "=").unwrap();
    assert_eq!(v.handle_command(zoom_in), CommandOutcome::Zoom(true));
    assert_eq!(v.zoom().percent(), 140);
    assert_eq!(v.state(), ViewState::Ready);

    // Re-render dropped the old selection; select "hát tr" then widen it.
    let start = v.view().boundary(0, 1, 1).unwrap();
    let end = v.view().boundary(0, 1, 7).unwrap();
    v.set_selection(Some(SelectionRange::new(start, end)));
    let expand = Command::from_key_chord(true, "w").unwrap();
    assert!(matches!(v.handle_command(expand), CommandOutcome::Expanded(Some(_))));

    let save = Command::from_key_chord(true, "s").unwrap();
    let outcome = v.handle_command(save);
    assert!(matches!(outcome, CommandOutcome::Delivery(Delivery::Sent { .. })));
    assert!(matches!(v.status(), Status::Saved { .. }));
}

#[test]
fn full_text_export() {
    let mut v = viewer();
    assert!(matches!(v.export_full_text(), Delivery::Sent { .. }));
    assert_eq!(
        v.transport().sent_to(Endpoint::FullDocument),
        vec![
            "--- Page 1 ---\nBáo cáo\nPhát triểnbền vững Năm 2024\n--- Page 2 ---\nMục tiêu\nGiảm phát thải"
        ]
    );
}

#[cfg(feature = "serde")]
#[test]
fn viewer_from_json_layout() {
    let renderer = MemoryRenderer::from_json(
        r#"{"pages":[
            {"spans":[{"text":"end of page one.","owner":0,"role":"block"}]},
            {"spans":[{"text":"Start of page two.","owner":0,"role":"block"}]}
        ]}"#,
    )
    .unwrap();
    let mut v = Viewer::new(renderer, RecordingTransport::new(), ViewerConfig::default());
    v.load();
    let range = SelectionRange::new(
        v.view().boundary(0, 0, 0).unwrap(),
        v.view().boundary(1, 0, 18).unwrap(),
    );
    v.select(range, Trigger::PointerRelease);
    assert_eq!(
        v.transport().sent_to(Endpoint::Selection),
        vec!["end of page one.\nStart of page two."]
    );
}

#[cfg(feature = "serde")]
#[test]
fn viewer_config_round_trip() {
    let config = ViewerConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let restored: ViewerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, restored);
}
