/// Validator key the address validity is surfaced under on the form control
pub const PARSE_VALIDATOR_KEY: &str = "parse";

// Key codes as reported by `KeyboardEvent.which`
pub const KEY_BACKSPACE: u32 = 8;
pub const KEY_ENTER: u32 = 13;
pub const KEY_SPACE: u32 = 32;
pub const KEY_DELETE: u32 = 46;

/// 0-9 and A-Z on the main keyboard
pub const KEY_ALPHANUMERIC: std::ops::RangeInclusive<u32> = 48..=90;
/// 0-9 on the numpad
pub const KEY_NUMPAD_DIGITS: std::ops::RangeInclusive<u32> = 96..=105;

/// Default location of the settings file
pub const DEFAULT_SETTINGS_PATH: &str = "place_autocomplete.toml";
