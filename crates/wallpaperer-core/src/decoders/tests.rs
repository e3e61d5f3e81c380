//! Tests for image decoding and RGBA normalization.

use super::*;

// ========================================================================
// DecodedImage Tests
// ========================================================================

#[test]
fn test_decoded_image_pixel_access() {
    let mut image = DecodedImage::from_rgba(2, 2, vec![0; 16]);
    image.put_pixel(1, 0, Rgba::new(1, 2, 3, 4));

    assert_eq!(image.pixel(1, 0), Rgba::new(1, 2, 3, 4));
    assert_eq!(image.pixel(0, 0), Rgba::new(0, 0, 0, 0));
    assert_eq!(image.size(), (2, 2));
}

// ========================================================================
// Normalization Tests
// ========================================================================

#[test]
fn test_expand_gray_to_rgba() {
    let rgba = expand_to_rgba(&[7, 9], 1).unwrap();
    assert_eq!(rgba, vec![7, 7, 7, 255, 9, 9, 9, 255]);
}

#[test]
fn test_expand_gray_alpha_to_rgba() {
    let rgba = expand_to_rgba(&[7, 128], 2).unwrap();
    assert_eq!(rgba, vec![7, 7, 7, 128]);
}

#[test]
fn test_expand_rgb_to_rgba() {
    let rgba = expand_to_rgba(&[1, 2, 3, 4, 5, 6], 3).unwrap();
    assert_eq!(rgba, vec![1, 2, 3, 255, 4, 5, 6, 255]);
}

#[test]
fn test_expand_rgba_passthrough() {
    let rgba = expand_to_rgba(&[1, 2, 3, 4], 4).unwrap();
    assert_eq!(rgba, vec![1, 2, 3, 4]);
}

#[test]
fn test_expand_rejects_ragged_buffer() {
    assert!(expand_to_rgba(&[1, 2, 3, 4], 3).is_err());
}

#[test]
fn test_narrow_16_bit_samples() {
    assert_eq!(narrow_u16_samples(&[0xff00, 0x0100, 0x00ff]), vec![0xff, 0x01, 0x00]);
    assert_eq!(narrow_u16_bytes(&[0xff, 0x00, 0x01, 0x00]).unwrap(), vec![0xff, 0x01]);
    assert!(narrow_u16_bytes(&[0xff, 0x00, 0x01]).is_err());
}

// ========================================================================
// Dispatch Tests
// ========================================================================

#[test]
fn test_unknown_extension_rejected() {
    let err = decode_image("image.webp").unwrap_err();
    assert!(err.contains("Unsupported file format"), "got: {}", err);
}

#[test]
fn test_missing_extension_rejected() {
    assert!(decode_image("image").is_err());
}

// ========================================================================
// PNG Round-Trip Tests
// ========================================================================

fn write_test_png(path: &std::path::Path, width: u32, height: u32, rgb: &[u8]) {
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = ::png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(::png::ColorType::Rgb);
    encoder.set_depth(::png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(rgb).unwrap();
    writer.finish().unwrap();
}

#[test]
fn test_decode_rgb_png_normalizes_to_rgba() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.png");
    write_test_png(&path, 2, 1, &[10, 20, 30, 40, 50, 60]);

    let decoded = decode_image(&path).unwrap();
    assert_eq!(decoded.size(), (2, 1));
    assert_eq!(decoded.source_channels, 3);
    assert_eq!(decoded.pixel(0, 0), Rgba::opaque(10, 20, 30));
    assert_eq!(decoded.pixel(1, 0), Rgba::opaque(40, 50, 60));
}

#[test]
fn test_decode_corrupt_png_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not a png").unwrap();

    assert!(decode_image(&path).is_err());
}
