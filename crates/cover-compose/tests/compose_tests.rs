use std::sync::Arc;

use cover_compose::*;
use image::RgbaImage;

/// Minimal styleable template with no text, for pixel-exact checks
fn solid_template(width: u32, height: u32, placement: ImagePlacement) -> Template {
    Template {
        id: TemplateId::Styled,
        name: "Test",
        width,
        height,
        export_file_name: "test.png",
        base: BasePaint::Solid(Rgba::BLACK),
        placement,
        styleable: true,
        fields: Vec::new(),
        decorations: Vec::new(),
    }
}

fn test_image(width: u32, height: u32, color: [u8; 4]) -> Arc<DecodedImage> {
    let rgba_data = color.repeat((width * height) as usize);
    Arc::new(DecodedImage::new(width, height, rgba_data).unwrap())
}

/// Render tests need a real font; skip quietly on systems without one
fn system_font() -> Option<FontBook> {
    match FontBook::from_system() {
        Ok(fonts) => Some(fonts),
        Err(_) => {
            eprintln!("skipping: no system font available");
            None
        }
    }
}

fn pixel(img: &RgbaImage, x: u32, y: u32) -> [u8; 4] {
    img.get_pixel(x, y).0
}

#[test]
fn test_solid_background_color_everywhere() {
    let Some(fonts) = system_font() else { return };

    let mut session = CoverSession::new(solid_template(40, 64, ImagePlacement::Contain));
    session.set_background_color(Rgba::from_hex("#112233").unwrap());

    let rendered = render(&session.snapshot(), &fonts).unwrap();
    assert_eq!(rendered.dimensions(), (40, 64));
    for px in rendered.pixels() {
        assert_eq!(px.0, [0x11, 0x22, 0x33, 0xFF]);
    }
}

#[test]
fn test_contain_placement_centers_image() {
    let Some(fonts) = system_font() else { return };

    let mut session = CoverSession::new(solid_template(100, 200, ImagePlacement::Contain));
    session.set_background_color(Rgba::BLACK);
    session.restore_committed(test_image(50, 50, [200, 30, 30, 255]));

    // 50×50 source fits a 100×200 canvas at 2×, centered vertically
    let rendered = render(&session.snapshot(), &fonts).unwrap();
    assert_eq!(pixel(&rendered, 50, 25), [0, 0, 0, 255]);
    assert_eq!(pixel(&rendered, 50, 100), [200, 30, 30, 255]);
    assert_eq!(pixel(&rendered, 50, 175), [0, 0, 0, 255]);
}

#[test]
fn test_cover_placement_fills_canvas() {
    let Some(fonts) = system_font() else { return };

    let mut session = CoverSession::new(solid_template(100, 200, ImagePlacement::Cover));
    session.set_background_color(Rgba::BLACK);
    session.restore_committed(test_image(50, 50, [200, 30, 30, 255]));

    let rendered = render(&session.snapshot(), &fonts).unwrap();
    for (x, y) in [(0, 0), (99, 0), (0, 199), (99, 199), (50, 100)] {
        assert_eq!(pixel(&rendered, x, y), [200, 30, 30, 255]);
    }
}

#[test]
fn test_image_opacity_blends_over_background() {
    let Some(fonts) = system_font() else { return };

    let mut session = CoverSession::new(solid_template(10, 10, ImagePlacement::Contain));
    session.set_background_color(Rgba::BLACK);
    session.restore_committed(test_image(10, 10, [255, 0, 0, 255]));
    session.apply_transform(TransformPatch {
        opacity: Some(0.5),
        ..Default::default()
    });

    let rendered = render(&session.snapshot(), &fonts).unwrap();
    let [r, g, b, a] = pixel(&rendered, 5, 5);
    assert_eq!((g, b, a), (0, 0, 255));
    assert!((126..=130).contains(&r), "expected ~50% red, got {r}");
}

#[test]
fn test_image_offset_moves_image() {
    let Some(fonts) = system_font() else { return };

    let mut session = CoverSession::new(solid_template(100, 100, ImagePlacement::Contain));
    session.set_background_color(Rgba::BLACK);
    session.restore_committed(test_image(100, 100, [200, 30, 30, 255]));
    session.apply_transform(TransformPatch {
        offset_x: Some(30.0),
        ..Default::default()
    });

    let rendered = render(&session.snapshot(), &fonts).unwrap();
    assert_eq!(pixel(&rendered, 10, 50), [0, 0, 0, 255]);
    assert_eq!(pixel(&rendered, 70, 50), [200, 30, 30, 255]);
}

#[test]
fn test_non_positive_scale_renders_no_image() {
    let Some(fonts) = system_font() else { return };

    let mut session = CoverSession::new(solid_template(20, 20, ImagePlacement::Contain));
    session.set_background_color(Rgba::BLACK);
    session.restore_committed(test_image(20, 20, [255, 255, 255, 255]));
    session.apply_transform(TransformPatch {
        scale: Some(-1.0),
        ..Default::default()
    });

    let rendered = render(&session.snapshot(), &fonts).unwrap();
    for px in rendered.pixels() {
        assert_eq!(px.0, [0, 0, 0, 255]);
    }
}

#[test]
fn test_set_text_changes_only_its_region() {
    let Some(fonts) = system_font() else { return };

    let mut session = CoverSession::with_builtin(TemplateId::Classic);
    let before = render(&session.snapshot(), &fonts).unwrap();

    session.set_text("title", "EXAM PREP").unwrap();
    let after = render(&session.snapshot(), &fonts).unwrap();

    // The title line changed
    let title_rows = 500..800;
    assert!(
        title_rows
            .clone()
            .any(|y| (0..before.width()).any(|x| before.get_pixel(x, y) != after.get_pixel(x, y))),
        "title region should have changed"
    );

    // The author line (and everything near it) did not
    for y in 2200..2400 {
        for x in 0..before.width() {
            assert_eq!(before.get_pixel(x, y), after.get_pixel(x, y));
        }
    }
}

#[test]
fn test_text_scale_enlarges_rendered_field() {
    let Some(fonts) = system_font() else { return };

    let mut template = solid_template(200, 100, ImagePlacement::Contain);
    template.fields.push(FieldSpec {
        key: "label",
        label: "Label",
        default_text: "Ink",
        font_px: 24.0,
        slot: Slot::left(10.0, 20.0),
        color: Rgba::WHITE,
        max_width: None,
    });

    let ink = |img: &RgbaImage| {
        img.pixels()
            .filter(|px| px.0 != [0, 0, 0, 255])
            .count()
    };

    let mut session = CoverSession::new(template.clone());
    session.set_background_color(Rgba::BLACK);
    let small = ink(&render(&session.snapshot(), &fonts).unwrap());

    session
        .set_text_style(
            "label",
            StylePatch {
                scale: Some(2.0),
                ..Default::default()
            },
        )
        .unwrap();
    let large = ink(&render(&session.snapshot(), &fonts).unwrap());

    assert!(small > 0);
    assert!(large > small, "scale 2.0 should cover more pixels");
}

#[test]
fn test_encode_decode_round_trip() {
    let mut img = RgbaImage::new(3, 3);
    for (i, px) in img.pixels_mut().enumerate() {
        *px = image::Rgba([i as u8 * 20, 100, 200, 255]);
    }

    let bytes = encode_png(&img).unwrap();
    let decoded = decode_image_bytes(&bytes).unwrap();

    assert_eq!((decoded.width, decoded.height), (3, 3));
    assert_eq!(decoded.rgba_data, img.into_raw());
}

#[test]
fn test_decode_invalid_bytes_fails() {
    let result = decode_image_bytes(b"definitely not an image");
    match result {
        Err(CoverError::Image(_)) => {}
        _ => panic!("Expected Image error"),
    }
}

#[tokio::test]
async fn test_decode_image_from_file() {
    use tempfile::NamedTempFile;

    let img = RgbaImage::from_pixel(5, 7, image::Rgba([10, 20, 30, 255]));
    let bytes = encode_png(&img).unwrap();

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), &bytes).unwrap();

    let decoded = decode_image(temp.path()).await.unwrap();
    assert_eq!((decoded.width, decoded.height), (5, 7));
}

#[tokio::test]
async fn test_export_at_design_resolution() {
    let Some(fonts) = system_font() else { return };

    let session = CoverSession::with_builtin(TemplateId::Styled);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cover-styled.png");

    let (width, height) = export_png(session.snapshot(), Arc::new(fonts), &output)
        .await
        .unwrap();
    assert_eq!((width, height), (1600, 2560));

    let on_disk = image::image_dimensions(&output).unwrap();
    assert_eq!(on_disk, (1600, 2560));
}

#[tokio::test]
async fn test_export_to_bad_path_fails() {
    let Some(fonts) = system_font() else { return };

    let session = CoverSession::new(solid_template(8, 8, ImagePlacement::Contain));
    let result = export_png(
        session.snapshot(),
        Arc::new(fonts),
        "/nonexistent-dir/out.png",
    )
    .await;

    match result {
        Err(CoverError::Io(_)) => {}
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_preview_is_downscaled_only() {
    let Some(fonts) = system_font() else { return };

    let session = CoverSession::new(solid_template(400, 640, ImagePlacement::Contain));
    let preview = render_preview(&session.snapshot(), &fonts, DISPLAY_SCALE).unwrap();

    assert_eq!(preview.dimensions(), (150, 240));
}
