use common::Buffer2;

use super::*;

fn map_fixture() -> PixelGrid<u8> {
    Buffer2::from_rows(&[
        [[255, 40, 30], [255, 255, 255], [255, 255, 255]],
        [[255, 255, 255], [255, 10, 49], [255, 255, 255]],
        [[255, 255, 255], [10, 255, 255], [255, 42, 32]],
    ])
}

fn set_cells(mask: &BitBuffer2) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if mask.get_xy(x, y) {
                cells.push((x, y));
            }
        }
    }
    cells
}

#[test]
fn test_red_pixel_is_foreground() {
    let thresholds = Thresholds::new(100u8, 50);
    assert!(ColorCondition::Red.matches(&[255, 40, 30], &thresholds));
}

#[test]
fn test_cyan_pixel_is_foreground() {
    let thresholds = Thresholds::new(100u8, 50);
    assert!(ColorCondition::Cyan.matches(&[10, 255, 120], &thresholds));
}

#[test]
fn test_cyan_compares_green_and_blue_against_upper() {
    let thresholds = Thresholds::new(100u8, 50);
    // Above lower but not above upper: not cyan.
    assert!(!ColorCondition::Cyan.matches(&[10, 80, 80], &thresholds));
    assert!(!ColorCondition::Cyan.matches(&[10, 255, 100], &thresholds));
    assert!(ColorCondition::Cyan.matches(&[10, 101, 101], &thresholds));
}

#[test]
fn test_red_comparisons_are_strict() {
    let thresholds = Thresholds::new(100u8, 50);
    assert!(!ColorCondition::Red.matches(&[100, 0, 0], &thresholds));
    assert!(!ColorCondition::Red.matches(&[255, 50, 0], &thresholds));
    assert!(!ColorCondition::Red.matches(&[255, 0, 50], &thresholds));
    assert!(ColorCondition::Red.matches(&[101, 49, 49], &thresholds));
}

#[test]
fn test_classify_red_fixture() {
    let mask = classify(&map_fixture(), &ColorCondition::Red, &Thresholds::new(100, 50));
    assert_eq!(mask.width(), 3);
    assert_eq!(mask.height(), 3);
    assert_eq!(set_cells(&mask), vec![(0, 0), (1, 1), (2, 2)]);
}

#[test]
fn test_classify_cyan_fixture() {
    let mask = classify(&map_fixture(), &ColorCondition::Cyan, &Thresholds::new(100, 50));
    assert_eq!(set_cells(&mask), vec![(1, 2)]);
}

#[test]
fn test_evaluate_matches_classify() {
    let grid = map_fixture();
    let thresholds = Thresholds::new(100, 50);
    let mask = classify(&grid, &ColorCondition::Red, &thresholds);
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(
                evaluate(&grid, &ColorCondition::Red, &thresholds, x, y),
                mask.get_xy(x, y),
                "mismatch at ({x}, {y})"
            );
        }
    }
}

#[test]
#[should_panic(expected = "outside 3x3 grid")]
fn test_evaluate_out_of_bounds_panics() {
    evaluate(
        &map_fixture(),
        &ColorCondition::Red,
        &Thresholds::new(100, 50),
        3,
        0,
    );
}

#[test]
fn test_classify_float_channels() {
    let grid: PixelGrid<f32> = Buffer2::from_rows(&[[[0.9, 0.1, 0.1], [0.1, 0.9, 0.9]]]);
    let thresholds = Thresholds::new(0.5f32, 0.2);

    let red = classify(&grid, &ColorCondition::Red, &thresholds);
    assert_eq!(set_cells(&red), vec![(0, 0)]);

    let cyan = classify(&grid, &ColorCondition::Cyan, &thresholds);
    assert_eq!(set_cells(&cyan), vec![(1, 0)]);
}

#[test]
fn test_classify_empty_grid() {
    let grid: PixelGrid<u8> = Buffer2::new_filled(0, 0, [0; 3]);
    let mask = classify(&grid, &ColorCondition::Red, &Thresholds::default());
    assert!(mask.is_empty());
    assert_eq!(mask.count_ones(), 0);
}

#[test]
fn test_classify_with_custom_condition() {
    struct Bright;

    impl PixelCondition<u8> for Bright {
        fn matches(&self, pixel: &[u8; 3], thresholds: &Thresholds<u8>) -> bool {
            pixel.iter().all(|&c| c > thresholds.upper)
        }
    }

    let mask = classify(&map_fixture(), &Bright, &Thresholds::new(200, 0));
    assert_eq!(mask.count_ones(), 5);
    assert!(!mask.get_xy(0, 0));
}

#[test]
fn test_condition_parse_and_display() {
    assert_eq!("red".parse::<ColorCondition>(), Ok(ColorCondition::Red));
    assert_eq!(" Cyan ".parse::<ColorCondition>(), Ok(ColorCondition::Cyan));
    assert_eq!(
        "green".parse::<ColorCondition>(),
        Err(ParseConditionError("green".to_string()))
    );
    assert_eq!(ColorCondition::Cyan.to_string(), "cyan");
    assert_eq!(ColorCondition::Red.mask_file_stem(), "map-red-pixels");
}
