use anyhow::Result;
use appicon::{pad_icon, Color, PadOpts};
use image::{ColorType, Rgba, RgbaImage};

#[test]
fn pads_landscape_image_onto_square_canvas() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("logo.png");
    let output = dir.path().join("logo_padded.png");
    RgbaImage::from_pixel(500, 300, Rgba([255, 0, 0, 255])).save(&input)?;

    let fit = pad_icon(&input, &output, &PadOpts::default())?;
    assert_eq!((fit.width, fit.height), (768, 461));
    assert_eq!((fit.x, fit.y), (128, 281));

    let img = image::open(&output)?;
    assert_eq!(img.color(), ColorType::Rgba8);
    let img = img.into_rgba8();
    assert_eq!(img.dimensions(), (1024, 1024));
    assert_eq!(*img.get_pixel(10, 10), Rgba([0x0b, 0x0f, 0x1a, 255]));
    assert_eq!(*img.get_pixel(512, 512), Rgba([255, 0, 0, 255]));
    assert_eq!(*img.get_pixel(512, 270), Rgba([0x0b, 0x0f, 0x1a, 255]));
    Ok(())
}

#[test]
fn output_is_always_canvas_sized() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("tiny.png");
    RgbaImage::from_pixel(1, 3, Rgba([0, 255, 0, 255])).save(&input)?;

    for (canvas, margin_pct) in [(1, 0.0), (57, 45.0), (180, 12.5), (256, 100.0), (300, -10.0)] {
        let output = dir.path().join(format!("out-{}-{}.png", canvas, margin_pct));
        let opts = PadOpts {
            canvas,
            margin_pct,
            background: Color::rgba(0, 0, 0, 0),
        };
        let fit = pad_icon(&input, &output, &opts)?;
        let img = image::open(&output)?;
        assert_eq!((img.width(), img.height()), (canvas, canvas));
        assert!(fit.x + fit.width <= canvas && fit.y + fit.height <= canvas);
    }
    Ok(())
}

#[test]
fn missing_input_fails_without_output() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("out.png");
    assert!(pad_icon(dir.path().join("nope.png"), &output, &PadOpts::default()).is_err());
    assert!(!output.exists());
    Ok(())
}

#[test]
fn unwritable_output_fails() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("logo.png");
    RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255])).save(&input)?;
    let output = dir.path().join("missing-dir").join("out.png");
    let err = pad_icon(&input, &output, &PadOpts::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to write"));
    Ok(())
}
