use super::*;

use crate::core::color::{DEFAULT_PALETTE, Palette};

fn bare(input: &Path, w: u32, h: u32) -> Config {
    Config::builder(input)
        .width(w)
        .height(h)
        .decorated(false)
        .build()
        .unwrap()
}

fn ramp(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point {
            x: i as f64,
            y: (i * i) as f64,
        })
        .collect()
}

#[test]
fn output_path_replaces_extension() {
    assert_eq!(output_path(Path::new("data.txt")), PathBuf::from("data_plot.png"));
    assert_eq!(
        output_path(Path::new("runs/v1.2.dat")),
        PathBuf::from("runs/v1.2_plot.png")
    );
}

#[test]
fn output_path_without_extension() {
    assert_eq!(output_path(Path::new("series")), PathBuf::from("series_plot.png"));
}

#[test]
fn output_path_keeps_dotfile_name_as_stem() {
    assert_eq!(
        output_path(Path::new("dir/.data")),
        PathBuf::from("dir/.data_plot.png")
    );
}

#[test]
fn stroke_width_rounds_and_clamps() {
    assert_eq!(stroke_width(1.0), 1);
    assert_eq!(stroke_width(2.6), 3);
    assert_eq!(stroke_width(0.2), 1);
}

#[test]
fn saved_png_has_configured_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("d.txt");
    let out = output_path(&input);
    let cfg = bare(&input, 100, 50);

    create_plot(&ramp(10), &out, &cfg).unwrap();

    assert_eq!(image::image_dimensions(&out).unwrap(), (100, 50));
}

#[test]
fn background_and_line_colors_are_used() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("d.txt");
    let out = output_path(&input);
    let cfg = Config::builder(&input)
        .width(120)
        .height(80)
        .decorated(false)
        .colors(Palette {
            background: Rgb::BLUE,
            ..DEFAULT_PALETTE
        })
        .build()
        .unwrap();

    create_plot(&ramp(20), &out, &cfg).unwrap();

    let img = image::open(&out).unwrap().to_rgb8();
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255]);
    assert!(img.pixels().any(|p| p.0 == [0, 0, 0]));
}

#[test]
fn single_point_renders() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("one.txt");
    let out = output_path(&input);
    create_plot(&[Point { x: 3.0, y: 3.0 }], &out, &bare(&input, 40, 40)).unwrap();
    assert!(out.exists());
}

#[test]
fn unwritable_destination_is_a_chart_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("no_such_dir").join("d.txt");
    let out = output_path(&input);
    let err = create_plot(&ramp(3), &out, &bare(&input, 40, 40)).unwrap_err();
    assert!(matches!(err, ChartError::Render { .. }));
}

#[test]
fn non_finite_points_fail_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("inf.txt");
    let out = output_path(&input);
    let points = [
        Point { x: 0.0, y: 1.0 },
        Point {
            x: 1.0,
            y: f64::INFINITY,
        },
    ];

    let err = create_plot(&points, &out, &bare(&input, 40, 40)).unwrap_err();

    assert!(matches!(err, ChartError::NonFinite { index: 1, .. }));
    assert!(!out.exists());
}

#[test]
fn nan_is_not_finite() {
    assert!(check_finite(&[Point { x: f64::NAN, y: 0.0 }]).is_err());
    assert!(check_finite(&ramp(4)).is_ok());
}
