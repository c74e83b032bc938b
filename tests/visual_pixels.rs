//! Pixel-level checks on decoded renderer output.

use pixhold::{Color, FontFace, Renderer};
use sha2::{Digest, Sha256};

fn renderer() -> Renderer {
    Renderer::new(FontFace::embedded().expect("embedded font"))
}

fn decode(png_data: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(png_data);
    let mut reader = decoder.read_info().expect("decode");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("frame");
    assert_eq!(info.color_type, png::ColorType::Rgba);
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}

fn pixel(bytes: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let idx = ((y * width + x) * 4) as usize;
    [bytes[idx], bytes[idx + 1], bytes[idx + 2], bytes[idx + 3]]
}

#[test]
fn background_fills_the_canvas() {
    let png_data = renderer()
        .render(600, 600, Color::from_hex("FF5733").unwrap())
        .expect("render");
    let (width, height, bytes) = decode(&png_data);

    assert_eq!(width, 600);
    assert_eq!(height, 600);

    // Corners are untouched by the centered label
    for (x, y) in [(0, 0), (599, 0), (0, 599), (599, 599)] {
        assert_eq!(pixel(&bytes, width, x, y), [255, 87, 51, 255]);
    }
}

#[test]
fn label_ink_appears_near_the_vertical_center() {
    let png_data = renderer()
        .render(600, 600, Color::from_hex("FF5733").unwrap())
        .expect("render");
    let (width, height, bytes) = decode(&png_data);

    // The glyph band is centered on the midpoint; at 60px the line height
    // is about 70px, so scan a generous band around it.
    let mut found_ink = false;
    'scan: for y in (height / 2 - 80)..(height / 2 + 80) {
        for x in 0..width {
            if pixel(&bytes, width, x, y) == [60, 60, 60, 255] {
                found_ink = true;
                break 'scan;
            }
        }
    }
    assert!(found_ink, "expected label ink (60,60,60) near the vertical center");
}

#[test]
fn no_ink_outside_the_label_band() {
    let png_data = renderer()
        .render(600, 600, Color::from_hex("FFFFFF").unwrap())
        .expect("render");
    let (width, _, bytes) = decode(&png_data);

    // Top rows stay pure background
    for y in 0..50 {
        for x in 0..width {
            assert_eq!(pixel(&bytes, width, x, y), [255, 255, 255, 255]);
        }
    }
}

#[test]
fn output_is_deterministic() {
    let r = renderer();
    let color = Color::from_hex("#336699").unwrap();
    let a = r.render(300, 200, color).expect("render");
    let b = r.render(300, 200, color).expect("render");

    assert_eq!(a, b, "identical inputs must produce byte-identical PNGs");
    assert_eq!(Sha256::digest(&a), Sha256::digest(&b));
}

#[test]
fn oversized_label_clips_without_error() {
    // Width 10 gives a 1px font and a label wider than the canvas is tall;
    // rendering proceeds and clips rather than failing.
    let png_data = renderer()
        .render(10, 300, Color::from_hex("0F0").unwrap())
        .expect("render");
    let (width, height, _) = decode(&png_data);
    assert_eq!((width, height), (10, 300));
}

#[test]
fn non_square_dimensions_are_honored() {
    let png_data = renderer()
        .render(64, 128, Color::from_hex("ABC").unwrap())
        .expect("render");
    let (width, height, _) = decode(&png_data);
    assert_eq!((width, height), (64, 128));
}
