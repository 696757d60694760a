//! Command Tests
//!
//! Tests for command bytes, escape policy and display modes.

use timebox::protocol::{CommandType, Mode};

#[test]
fn test_command_bytes() {
    assert_eq!(CommandType::SetColor as u8, 0x6f);
    assert_eq!(CommandType::SetBrightness as u8, 0x74);
    assert_eq!(CommandType::SetMode as u8, 0x45);
    assert_eq!(CommandType::DrawImage as u8, 0x44);
    assert_eq!(CommandType::AnimationChunk as u8, 0x49);
}

#[test]
fn test_image_commands_are_unmasked() {
    assert!(!CommandType::DrawImage.is_masked());
    assert!(!CommandType::AnimationChunk.is_masked());
    assert!(CommandType::SetColor.is_masked());
    assert!(CommandType::SetBrightness.is_masked());
    assert!(CommandType::SetMode.is_masked());
}

#[test]
fn test_command_try_from() {
    assert_eq!(CommandType::try_from(0x49).unwrap(), CommandType::AnimationChunk);
    assert!(CommandType::try_from(0x00).is_err());
}

#[test]
fn test_mode_numbers() {
    let numbers: Vec<u8> = Mode::ALL.iter().map(|m| *m as u8).collect();
    assert_eq!(numbers, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_mode_parse_by_name() {
    assert_eq!("clock".parse::<Mode>().unwrap(), Mode::Clock);
    assert_eq!("Scoreboard".parse::<Mode>().unwrap(), Mode::Scoreboard);
    assert_eq!(" image ".parse::<Mode>().unwrap(), Mode::Image);
}

#[test]
fn test_mode_parse_by_number() {
    assert_eq!("5".parse::<Mode>().unwrap(), Mode::Stopwatch);
    assert!("7".parse::<Mode>().is_err());
}

#[test]
fn test_mode_parse_unknown() {
    assert!("disco".parse::<Mode>().is_err());
}

#[test]
fn test_mode_display_round_trips() {
    for mode in Mode::ALL {
        assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
    }
}
