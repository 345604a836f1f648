use super::*;
use crate::{
    caption::CaptionSet,
    config::FrameConfig,
    foundation::core::ImageSize,
    layout::{
        engine::compute_layout,
        measure::{FontWeight, TextExtent, TextMeasurer},
    },
};

struct StubMeasurer;

impl TextMeasurer for StubMeasurer {
    fn measure(&mut self, text: &str, font: &FontSpec) -> PolaroidResult<TextExtent> {
        Ok(TextExtent {
            width: text.chars().count() as f64 * font.size_px * 0.5,
        })
    }
}

/// Records what would be drawn; yields no glyphs.
#[derive(Default)]
struct RecordingShaper {
    calls: Vec<(String, FontSpec, Rgba8)>,
    fail: bool,
}

impl TextShaper for RecordingShaper {
    fn shape(
        &mut self,
        text: &str,
        font: &FontSpec,
        color: Rgba8,
    ) -> PolaroidResult<Vec<ShapedRun>> {
        if self.fail {
            return Err(PolaroidError::measurement("shaper offline"));
        }
        self.calls.push((text.to_string(), *font, color));
        Ok(Vec::new())
    }
}

fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> ImageSource {
    let data = rgba
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 4)
        .collect();
    ImageSource::from_rgba8(width, height, data).unwrap()
}

fn captions(device: &str) -> CaptionSet {
    CaptionSet {
        device_name: device.to_string(),
        focal_length: 24.0,
        aperture: 1.8,
        shutter_speed: "1/400".to_string(),
        iso: 200,
        ..CaptionSet::default()
    }
}

fn layout_for(image: &ImageSource, caps: &CaptionSet) -> FrameLayout {
    compute_layout(image.size(), caps, &FrameConfig::default(), &mut StubMeasurer).unwrap()
}

fn is_white(px: [u8; 4]) -> bool {
    px == [255, 255, 255, 255]
}

fn is_reddish(px: [u8; 4]) -> bool {
    px[0] >= 250 && px[1] <= 5 && px[2] <= 5 && px[3] == 255
}

#[test]
fn paints_white_frame_around_upscaled_photo() {
    let image = solid_image(400, 600, [255, 0, 0, 255]);
    let layout = layout_for(&image, &captions("Pixel 8"));
    let mut surface = RasterSurface::new(1, 1).unwrap();

    render(&mut surface, &image, &layout, &mut RecordingShaper::default()).unwrap();

    assert_eq!(surface.width(), 840);
    assert_eq!(surface.height(), layout.canvas_height);

    let r = layout.image_draw_rect;
    let cx = (r.x + r.width / 2.0) as u32;
    let cy = (r.y + r.height / 2.0) as u32;
    assert!(is_reddish(surface.pixel(cx, cy).unwrap()));
    assert!(is_reddish(surface.pixel(22, 22).unwrap()));
    assert!(is_reddish(surface.pixel(818, 1218).unwrap()));

    assert!(is_white(surface.pixel(5, 5).unwrap()));
    assert!(is_white(surface.pixel(835, 5).unwrap()));
    assert!(is_white(surface.pixel(cx, 10).unwrap()));
    assert!(is_white(
        surface.pixel(cx, surface.height() - 2).unwrap()
    ));
}

#[test]
fn prior_surface_content_is_discarded() {
    let image = solid_image(800, 800, [0, 0, 255, 255]);
    let layout = layout_for(&image, &captions("X"));

    let mut surface = RasterSurface::new(2000, 2000).unwrap();
    surface.pixmap_mut().data_as_u8_slice_mut().fill(7);

    render(&mut surface, &image, &layout, &mut RecordingShaper::default()).unwrap();
    assert_eq!(surface.width(), layout.canvas_width);
    assert_eq!(surface.height(), layout.canvas_height);
    assert!(surface.data_premul().iter().all(|&b| b != 7));
}

#[test]
fn captions_are_shaped_in_draw_order_with_their_styles() {
    let image = solid_image(900, 600, [0, 255, 0, 255]);
    let layout = layout_for(&image, &captions("Samsung Galaxy A54"));
    let mut shaper = RecordingShaper::default();
    let mut surface = RasterSurface::new(1, 1).unwrap();

    render(&mut surface, &image, &layout, &mut shaper).unwrap();

    let texts: Vec<&str> = shaper.calls.iter().map(|(t, _, _)| t.as_str()).collect();
    assert_eq!(
        texts,
        ["Shot on", "Samsung Galaxy A54", "24mm f/1.8 1/400s ISO200"]
    );

    let (_, prefix_font, prefix_color) = &shaper.calls[0];
    assert_eq!(prefix_font.weight, FontWeight::Regular);
    assert_eq!(prefix_font.size_px, layout.normalized_title_size);
    assert_eq!(*prefix_color, Rgba8::MUTED_GRAY);

    let (_, title_font, title_color) = &shaper.calls[1];
    assert_eq!(title_font.weight, FontWeight::Bold);
    assert_eq!(title_font.size_px, layout.normalized_title_size);
    assert_eq!(*title_color, Rgba8::BLACK);

    let (_, footer_font, footer_color) = &shaper.calls[2];
    assert_eq!(footer_font.weight, FontWeight::Regular);
    assert_eq!(footer_font.size_px, layout.normalized_footer_size);
    assert_eq!(*footer_color, Rgba8::MUTED_GRAY);
}

#[test]
fn empty_device_name_skips_the_title_run() {
    let image = solid_image(800, 400, [0, 0, 0, 255]);
    let layout = layout_for(&image, &captions(""));
    let mut shaper = RecordingShaper::default();
    let mut surface = RasterSurface::new(1, 1).unwrap();

    render(&mut surface, &image, &layout, &mut shaper).unwrap();
    assert_eq!(shaper.calls.len(), 2);
    assert_eq!(shaper.calls[0].0, "Shot on");
}

#[test]
fn shaping_failure_leaves_surface_untouched() {
    let image = solid_image(800, 400, [0, 0, 0, 255]);
    let layout = layout_for(&image, &captions("X"));
    let mut surface = RasterSurface::new(3, 3).unwrap();
    let mut shaper = RecordingShaper {
        fail: true,
        ..RecordingShaper::default()
    };

    let err = render(&mut surface, &image, &layout, &mut shaper).unwrap_err();
    assert!(matches!(err, PolaroidError::Measurement(_)));
    assert_eq!((surface.width(), surface.height()), (3, 3));
    assert!(surface.data_premul().iter().all(|&b| b == 0));
}

#[test]
fn layout_for_another_image_is_rejected() {
    let a = solid_image(1000, 500, [0, 0, 0, 255]);
    let b = solid_image(1000, 700, [0, 0, 0, 255]);
    let layout = layout_for(&a, &captions("X"));
    let mut surface = RasterSurface::new(1, 1).unwrap();

    surface.pixmap_mut().data_as_u8_slice_mut().fill(7);

    let err = render(&mut surface, &b, &layout, &mut RecordingShaper::default()).unwrap_err();
    assert!(matches!(err, PolaroidError::Validation(_)));
    assert_eq!((surface.width(), surface.height()), (1, 1));
    assert!(surface.data_premul().iter().all(|&v| v == 7));
}

#[test]
fn photo_transform_maps_image_corners_onto_draw_rect() {
    let layout = compute_layout(
        ImageSize {
            width: 400,
            height: 600,
        },
        &captions("X"),
        &FrameConfig::default(),
        &mut StubMeasurer,
    )
    .unwrap();
    let t = photo_transform(&layout);
    let r = layout.image_draw_rect;

    let origin = t * kurbo::Point::new(0.0, 0.0);
    let corner = t * kurbo::Point::new(400.0, 600.0);
    assert!((origin.x - r.x).abs() < 1e-9 && (origin.y - r.y).abs() < 1e-9);
    assert!((corner.x - r.right()).abs() < 1e-9);
    assert!((corner.y - r.bottom()).abs() < 1e-9);
}
