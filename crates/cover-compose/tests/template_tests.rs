use cover_compose::*;

#[test]
fn test_classic_field_order() {
    let template = Template::builtin(TemplateId::Classic);
    let keys: Vec<_> = template.field_keys().collect();
    assert_eq!(
        keys,
        [
            "title",
            "subtitle",
            "edition",
            "description",
            "checkmark",
            "author"
        ]
    );
}

#[test]
fn test_styled_field_order() {
    let template = Template::builtin(TemplateId::Styled);
    let keys: Vec<_> = template.field_keys().collect();
    assert_eq!(
        keys,
        [
            "title",
            "subtitle",
            "year",
            "feature1",
            "feature2",
            "feature3",
            "author",
            "bottom_text"
        ]
    );
}

#[test]
fn test_design_resolution_and_export_names() {
    let classic = Template::builtin(TemplateId::Classic);
    assert_eq!((classic.width, classic.height), (1600, 2560));
    assert_eq!(classic.export_file_name, "cover.png");
    assert!(!classic.styleable);

    let styled = Template::builtin(TemplateId::Styled);
    assert_eq!((styled.width, styled.height), (1600, 2560));
    assert_eq!(styled.export_file_name, "cover-styled.png");
    assert!(styled.styleable);
}

#[test]
fn test_template_defaults() {
    let classic = Template::builtin(TemplateId::Classic);
    assert_eq!(classic.field("title").unwrap().default_text, "VTNE");
    assert_eq!(
        classic.field("author").unwrap().default_text,
        "AIDEN WHITLOCK"
    );
    assert!(classic.field("banner").is_none());

    let styled = Template::builtin(TemplateId::Styled);
    assert_eq!(
        styled.field("subtitle").unwrap().color,
        Rgba::rgb(0xFB, 0xBF, 0x24)
    );
    assert_eq!(styled.base, BasePaint::Solid(Rgba::rgb(0x1E, 0x40, 0xAF)));
}

#[test]
fn test_session_initialized_from_template() {
    for id in TemplateId::all() {
        let session = CoverSession::with_builtin(id);
        let template = Template::builtin(id);
        for field in &template.fields {
            assert_eq!(session.text(field.key), Some(field.default_text));
            let style = session.text_style(field.key).unwrap();
            assert_eq!(style, field.default_style());
        }
    }
}

#[test]
fn test_hex_color_round_trip() {
    let color = Rgba::from_hex("#1e40af").unwrap();
    assert_eq!(color, Rgba::rgb(0x1E, 0x40, 0xAF));
    assert_eq!(color.to_hex(), "#1E40AF");

    let translucent = Rgba::from_hex("#CCFFFFFF").unwrap();
    assert_eq!(translucent, Rgba::rgba(0xFF, 0xFF, 0xFF, 0xCC));
    assert_eq!(translucent.to_hex(), "#CCFFFFFF");

    assert!(Rgba::from_hex("#12345").is_err());
    assert!(Rgba::from_hex("not a color").is_err());
}
