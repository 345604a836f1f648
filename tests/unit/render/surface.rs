use super::*;

#[test]
fn new_surface_is_transparent() {
    let s = RasterSurface::new(4, 3).unwrap();
    assert_eq!((s.width(), s.height()), (4, 3));
    assert_eq!(s.data_premul().len(), 4 * 3 * 4);
    assert!(s.data_premul().iter().all(|&b| b == 0));
    assert_eq!(s.pixel(3, 2), Some([0, 0, 0, 0]));
    assert_eq!(s.pixel(4, 0), None);
    assert_eq!(s.pixel(0, 3), None);
}

#[test]
fn resize_discards_content() {
    let mut s = RasterSurface::new(2, 2).unwrap();
    s.pixmap_mut().data_as_u8_slice_mut().fill(255);

    s.resize(2, 2).unwrap();
    assert!(s.data_premul().iter().all(|&b| b == 0));

    s.resize(5, 1).unwrap();
    assert_eq!((s.width(), s.height()), (5, 1));
    assert_eq!(s.data_premul().len(), 5 * 4);
}

#[test]
fn oversized_surfaces_are_rejected() {
    assert!(matches!(
        RasterSurface::new(70_000, 10),
        Err(PolaroidError::Validation(_))
    ));
    let mut s = RasterSurface::new(1, 1).unwrap();
    assert!(s.resize(10, 65_536).is_err());
    assert_eq!((s.width(), s.height()), (1, 1));
}

#[test]
fn straight_export_unpremultiplies() {
    let mut s = RasterSurface::new(3, 1).unwrap();
    s.pixmap_mut()
        .data_as_u8_slice_mut()
        .copy_from_slice(&[50, 25, 100, 128, 10, 20, 30, 255, 0, 0, 0, 0]);

    let out = s.to_rgba8_straight();
    assert_eq!(&out[4..], &[10, 20, 30, 255, 0, 0, 0, 0]);
    assert_eq!(out[3], 128);
    assert_eq!(out[0], ((50u16 * 255 + 64) / 128) as u8);
    assert_eq!(out[2], ((100u16 * 255 + 64) / 128) as u8);
}

#[test]
fn save_png_round_trips_through_image() {
    let dir = std::path::PathBuf::from("target").join("surface_png");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("out.png");

    let mut s = RasterSurface::new(2, 2).unwrap();
    s.pixmap_mut().data_as_u8_slice_mut().fill(255);
    s.save_png(&path).unwrap();

    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (2, 2));
    assert!(back.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}
