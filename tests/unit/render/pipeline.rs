use super::*;
use crate::scene::params::FloatRange;

fn tiny_settings() -> RenderSettings {
    RenderSettings {
        preview_dpi: 10,
        export_dpi: 20,
        ..RenderSettings::default()
    }
}

#[test]
fn preview_and_export_use_their_own_dpi() {
    let mut r = PosterRenderer::new(tiny_settings());
    let params = RenderParameters::default();

    let preview = r.render(&params).unwrap();
    assert_eq!((preview.frame.width, preview.frame.height), (70, 100));
    assert_eq!(preview.dpi, 10);

    let png = r.export_png(&params).unwrap();
    assert_eq!(png.dpi, 20);
    let decoded = image::load_from_memory(&png.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (png.width, png.height));
}

#[test]
fn export_is_cropped_to_the_view() {
    let mut r = PosterRenderer::new(tiny_settings());
    let params = RenderParameters::default();

    let png = r.export_png(&params).unwrap();
    // 20 dpi page is 140x200; the view is the 140x140 square at rows 30..170.
    assert_eq!((png.width, png.height), (140, 140));

    let full = r.render_at(&params, 20).unwrap();
    assert_eq!(
        full.content,
        PixelRect {
            x: 0,
            y: 30,
            width: 140,
            height: 140,
        }
    );
    let cropped = full.frame.crop(full.content).unwrap();
    let decoded = image::load_from_memory(&png.bytes).unwrap().to_rgba8();
    // Export pixels are the view pixels, not the letterbox band.
    assert_eq!(cropped.pixel(70, 0), full.frame.pixel(70, 30));
    assert_eq!(
        decoded.get_pixel(70, 139).0,
        crate::foundation::math::unpremultiply_rgba8(cropped.pixel(70, 139).unwrap())
    );
}

#[test]
fn canvas_size_ignores_parameters() {
    let mut r = PosterRenderer::new(tiny_settings());
    let a = r.render(&RenderParameters::default()).unwrap();
    let b = r
        .render(&RenderParameters {
            n_layers: 30,
            radius: FloatRange::new(0.5, 0.6),
            label_on: false,
            ..RenderParameters::default()
        })
        .unwrap();
    assert_eq!(
        (a.frame.width, a.frame.height),
        (b.frame.width, b.frame.height)
    );
    assert_eq!(b.stats, RenderStats { blobs: 30, labels: 0 });
}

#[test]
fn free_function_matches_renderer() {
    let params = RenderParameters::default();
    let a = render_poster(&params, &tiny_settings()).unwrap();
    let b = PosterRenderer::new(tiny_settings()).render(&params).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.palette.len(), 6);
}

#[test]
fn invalid_parameters_surface_as_errors() {
    let mut r = PosterRenderer::new(tiny_settings());
    let err = r
        .render(&RenderParameters {
            alpha: FloatRange::new(0.8, 0.2),
            ..RenderParameters::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::PosterError::InvalidParameter(_)
    ));
}
