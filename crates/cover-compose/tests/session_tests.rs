use std::sync::Arc;

use cover_compose::*;

fn test_image(width: u32, height: u32, color: [u8; 4]) -> Arc<DecodedImage> {
    let rgba_data = color.repeat((width * height) as usize);
    Arc::new(DecodedImage::new(width, height, rgba_data).unwrap())
}

#[test]
fn test_upload_confirm_commits_and_resets_transform() {
    let mut session = CoverSession::with_builtin(TemplateId::Classic);

    // Put the transform in a non-default state before uploading
    session.apply_transform(TransformPatch {
        offset_x: Some(40.0),
        offset_y: Some(-20.0),
        scale: Some(2.5),
        opacity: Some(0.3),
    });

    let image = test_image(4, 4, [10, 20, 30, 255]);
    let seq = session.begin_upload();
    assert!(session.is_loading());

    assert!(session.apply_decoded(seq, image.clone()));
    assert_eq!(session.phase(), UploadPhase::PendingConfirmation);
    assert!(session.pending().is_some());
    assert!(session.committed().is_none());

    assert!(session.confirm_pending());
    assert_eq!(session.phase(), UploadPhase::Idle);
    assert!(session.pending().is_none());
    assert!(Arc::ptr_eq(session.committed().unwrap(), &image));
    assert_eq!(session.transform(), ImageTransform::default());
}

#[test]
fn test_upload_cancel_leaves_state_unchanged() {
    let mut session = CoverSession::with_builtin(TemplateId::Classic);

    // Commit a first image and adjust its transform
    let first = test_image(4, 4, [1, 2, 3, 255]);
    let seq = session.begin_upload();
    assert!(session.apply_decoded(seq, first.clone()));
    assert!(session.confirm_pending());
    session.apply_transform(TransformPatch {
        scale: Some(1.8),
        opacity: Some(0.6),
        ..Default::default()
    });
    let transform_before = session.transform();

    // Upload a second image and cancel it
    let second = test_image(8, 8, [9, 9, 9, 255]);
    let seq = session.begin_upload();
    assert!(session.apply_decoded(seq, second));
    assert!(session.cancel_pending());

    assert_eq!(session.phase(), UploadPhase::Idle);
    assert!(session.pending().is_none());
    assert!(Arc::ptr_eq(session.committed().unwrap(), &first));
    assert_eq!(session.transform(), transform_before);
}

#[test]
fn test_stale_decode_result_discarded() {
    let mut session = CoverSession::with_builtin(TemplateId::Classic);

    let seq1 = session.begin_upload();
    let seq2 = session.begin_upload();
    assert_ne!(seq1, seq2);

    // The first upload resolves late; only the second may win
    let first = test_image(4, 4, [1, 1, 1, 255]);
    assert!(!session.apply_decoded(seq1, first));
    assert!(session.pending().is_none());
    assert!(session.is_loading());

    let second = test_image(4, 4, [2, 2, 2, 255]);
    assert!(session.apply_decoded(seq2, second.clone()));
    assert!(Arc::ptr_eq(session.pending().unwrap(), &second));
}

#[test]
fn test_decode_failure_returns_to_idle() {
    let mut session = CoverSession::with_builtin(TemplateId::Classic);

    let seq = session.begin_upload();
    assert!(session.decode_failed(seq));
    assert_eq!(session.phase(), UploadPhase::Idle);
    assert!(session.pending().is_none());
    assert!(session.committed().is_none());
}

#[test]
fn test_stale_decode_failure_ignored() {
    let mut session = CoverSession::with_builtin(TemplateId::Classic);

    let seq1 = session.begin_upload();
    let seq2 = session.begin_upload();

    assert!(!session.decode_failed(seq1));
    assert!(session.is_loading());

    assert!(session.decode_failed(seq2));
    assert_eq!(session.phase(), UploadPhase::Idle);
}

#[test]
fn test_confirm_and_cancel_are_noops_outside_pending() {
    let mut session = CoverSession::with_builtin(TemplateId::Classic);

    assert!(!session.confirm_pending());
    assert!(!session.cancel_pending());

    session.begin_upload();
    assert!(!session.confirm_pending());
    assert!(!session.cancel_pending());
    assert!(session.is_loading());
}

#[test]
fn test_new_upload_discards_pending() {
    let mut session = CoverSession::with_builtin(TemplateId::Classic);

    let seq = session.begin_upload();
    assert!(session.apply_decoded(seq, test_image(4, 4, [5, 5, 5, 255])));
    assert!(session.pending().is_some());

    session.begin_upload();
    assert!(session.pending().is_none());
    assert!(session.is_loading());
}

#[test]
fn test_set_text_changes_only_that_field() {
    let mut session = CoverSession::with_builtin(TemplateId::Classic);

    session.set_text("title", "EXAM PREP").unwrap();

    assert_eq!(session.text("title"), Some("EXAM PREP"));
    let template = Template::builtin(TemplateId::Classic);
    for field in template.fields.iter().filter(|f| f.key != "title") {
        assert_eq!(session.text(field.key), Some(field.default_text));
    }
}

#[test]
fn test_set_text_unknown_key_rejected() {
    let mut session = CoverSession::with_builtin(TemplateId::Classic);

    let result = session.set_text("banner", "oops");
    match result {
        Err(CoverError::UnknownField(key)) => assert_eq!(key, "banner"),
        _ => panic!("Expected UnknownField error"),
    }
}

#[test]
fn test_empty_text_allowed() {
    let mut session = CoverSession::with_builtin(TemplateId::Styled);

    session.set_text("subtitle", "").unwrap();
    assert_eq!(session.text("subtitle"), Some(""));
}

#[test]
fn test_text_style_clamped_at_model_boundary() {
    let mut session = CoverSession::with_builtin(TemplateId::Styled);

    session
        .set_text_style(
            "title",
            StylePatch {
                scale: Some(5.0),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(session.text_style("title").unwrap().scale, TEXT_SCALE_MAX);

    session
        .set_text_style(
            "title",
            StylePatch {
                scale: Some(0.01),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(session.text_style("title").unwrap().scale, TEXT_SCALE_MIN);

    session
        .set_text_style(
            "title",
            StylePatch {
                offset_x: Some(9000.0),
                offset_y: Some(-9000.0),
                ..Default::default()
            },
        )
        .unwrap();
    let style = session.text_style("title").unwrap();
    assert_eq!(style.offset.x, TEXT_OFFSET_LIMIT);
    assert_eq!(style.offset.y, -TEXT_OFFSET_LIMIT);
}

#[test]
fn test_text_style_merge_preserves_other_properties() {
    let mut session = CoverSession::with_builtin(TemplateId::Styled);

    let before = session.text_style("subtitle").unwrap();
    session
        .set_text_style(
            "subtitle",
            StylePatch {
                scale: Some(2.0),
                ..Default::default()
            },
        )
        .unwrap();

    let after = session.text_style("subtitle").unwrap();
    assert_eq!(after.scale, 2.0);
    assert_eq!(after.offset, before.offset);
    assert_eq!(after.color, before.color);
}

#[test]
fn test_text_style_ignored_by_fixed_template() {
    let mut session = CoverSession::with_builtin(TemplateId::Classic);

    session
        .set_text_style(
            "title",
            StylePatch {
                scale: Some(2.0),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(session.text_style("title").unwrap().scale, 1.0);

    let before = session.background_color();
    session.set_background_color(Rgba::rgb(0x11, 0x22, 0x33));
    assert_eq!(session.background_color(), before);
}

#[test]
fn test_image_transform_stored_unclamped() {
    let mut session = CoverSession::with_builtin(TemplateId::Classic);

    session.apply_transform(TransformPatch {
        scale: Some(12.0),
        opacity: Some(1.7),
        ..Default::default()
    });

    assert_eq!(session.transform().scale, 12.0);
    assert_eq!(session.transform().opacity, 1.7);
}

#[test]
fn test_snapshot_is_independent_of_later_edits() {
    let mut session = CoverSession::with_builtin(TemplateId::Styled);

    let snapshot = session.snapshot();
    session.set_text("title", "CHANGED").unwrap();
    session.set_background_color(Rgba::rgb(0, 0, 0));

    assert_eq!(snapshot.text("title"), "VTNE");
    assert_eq!(snapshot.base, BasePaint::Solid(Rgba::rgb(0x1E, 0x40, 0xAF)));
}
