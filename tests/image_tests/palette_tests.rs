//! Palette Tests

use timebox::image::{bit_width, Palette, Rgb, MAX_COLORS};
use timebox::TimeboxError;

#[test]
fn test_first_occurrence_order() {
    let mut palette = Palette::new();
    let red = Rgb::new(255, 0, 0);
    let green = Rgb::new(0, 255, 0);

    assert_eq!(palette.index_of_or_insert(green).unwrap(), 0);
    assert_eq!(palette.index_of_or_insert(red).unwrap(), 1);
    assert_eq!(palette.index_of_or_insert(green).unwrap(), 0);
    assert_eq!(palette.colors(), &[green, red]);
    assert_eq!(palette.index_of(red), Some(1));
    assert_eq!(palette.index_of(Rgb::new(0, 0, 255)), None);
}

#[test]
fn test_palette_bytes() {
    let mut palette = Palette::new();
    palette.index_of_or_insert(Rgb::new(1, 2, 3)).unwrap();
    palette.index_of_or_insert(Rgb::new(4, 5, 6)).unwrap();
    assert_eq!(palette.to_bytes(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_palette_full() {
    let mut palette = Palette::new();
    for i in 0..MAX_COLORS {
        palette
            .index_of_or_insert(Rgb::new(i as u8, 0, 0))
            .unwrap();
    }
    assert_eq!(palette.len(), 256);
    assert_eq!(palette.bit_width(), 8);

    // Known colors still resolve once full
    assert_eq!(palette.index_of_or_insert(Rgb::new(7, 0, 0)).unwrap(), 7);

    let result = palette.index_of_or_insert(Rgb::new(0, 1, 0));
    assert!(matches!(result, Err(TimeboxError::PaletteTooLarge(257))));
}

#[test]
fn test_bit_width() {
    assert_eq!(bit_width(0), 1);
    assert_eq!(bit_width(1), 1);
    assert_eq!(bit_width(2), 1);
    assert_eq!(bit_width(3), 2);
    assert_eq!(bit_width(4), 2);
    assert_eq!(bit_width(5), 3);
    assert_eq!(bit_width(8), 3);
    assert_eq!(bit_width(9), 4);
    assert_eq!(bit_width(16), 4);
    assert_eq!(bit_width(17), 5);
    assert_eq!(bit_width(128), 7);
    assert_eq!(bit_width(129), 8);
    assert_eq!(bit_width(256), 8);
}

#[test]
fn test_empty_palette() {
    let palette = Palette::new();
    assert!(palette.is_empty());
    assert!(palette.to_bytes().is_empty());
}
