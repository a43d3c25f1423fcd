use super::*;

fn frame(data: Vec<u8>, premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data,
        premultiplied,
    }
}

#[test]
fn png_decodes_to_straight_alpha() {
    let f = frame(vec![64, 32, 0, 128, 10, 20, 30, 255], true);
    let bytes = encode_png(&f).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.get_pixel(0, 0).0, [128, 64, 0, 128]);
    assert_eq!(decoded.get_pixel(1, 0).0, [10, 20, 30, 255]);
}

#[test]
fn straight_frames_pass_through() {
    let f = frame(vec![200, 100, 50, 100, 0, 0, 0, 0], false);
    let bytes = encode_png(&f).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(0, 0).0, [200, 100, 50, 100]);
}

#[test]
fn encoding_is_byte_stable() {
    let f = frame(vec![1, 2, 3, 255, 4, 5, 6, 255], true);
    assert_eq!(encode_png(&f).unwrap(), encode_png(&f).unwrap());
}

#[test]
fn short_buffer_is_rejected() {
    let f = frame(vec![0; 4], true);
    assert!(matches!(encode_png(&f), Err(PosterError::Render(_))));
}

#[test]
fn export_metadata() {
    let e = PngExport {
        bytes: vec![],
        width: 1,
        height: 1,
        dpi: 300,
    };
    assert_eq!(e.file_name(), "poster.png");
    assert_eq!(e.mime(), "image/png");
}
