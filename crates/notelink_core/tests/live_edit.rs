use notelink_core::{
    parse_content, ContentSegment, ImageAlign, ImageOverlay, ImageSize, LiveEditSession,
    OverlayError,
};

const CONTENT: &str = "intro [[Ref]] ![Chart|size:small|zoom:2](c.png) outro";

fn image_options_at(content: &str, index: usize) -> notelink_core::ImageOptions {
    match &parse_content(content)[index] {
        ContentSegment::Image { options, .. } => options.clone(),
        other => panic!("segment {index} is not an image: {other:?}"),
    }
}

#[test]
fn commit_rewrites_only_the_selected_image() {
    let mut session = LiveEditSession::new();
    session.select(3);
    session
        .adjust(ImageOverlay {
            size: Some(ImageSize::Large),
            align: Some(ImageAlign::Left),
            offset_x: Some(-10),
            ..ImageOverlay::default()
        })
        .unwrap();

    let base = image_options_at(CONTENT, 3);
    let preview = session.merged(3, &base);
    assert_eq!(preview.size.as_deref(), Some("large"));

    let committed = session.commit(CONTENT).unwrap();
    assert_eq!(
        committed,
        "intro [[Ref]] ![Chart|size:large|align:left|offsetX:-10](c.png) outro"
    );
    assert_eq!(session.active_index(), None);

    let reparsed = image_options_at(&committed, 3);
    assert_eq!(reparsed.size.as_deref(), Some("large"));
    assert_eq!(reparsed.offset_x, Some(-10));
}

#[test]
fn commit_on_non_image_keeps_session() {
    let mut session = LiveEditSession::new();
    session.select(1);
    assert_eq!(session.commit(CONTENT), Err(OverlayError::NotAnImage(1)));
    assert_eq!(session.active_index(), Some(1));

    session.select(9);
    assert_eq!(
        session.commit(CONTENT),
        Err(OverlayError::SegmentOutOfRange { index: 9, len: 5 })
    );
}

#[test]
fn deselect_discards_uncommitted_overlay() {
    let mut session = LiveEditSession::new();
    session.select(3);
    session
        .adjust(ImageOverlay {
            width: Some(320),
            ..ImageOverlay::default()
        })
        .unwrap();

    let discarded = session.deselect().expect("overlay was active");
    assert_eq!(discarded.width, Some(320));
    let base = image_options_at(CONTENT, 3);
    assert_eq!(session.merged(3, &base), base);
}
