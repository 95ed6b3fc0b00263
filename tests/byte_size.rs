use humanbytes::{ByteSize, ByteSizeFormatter, Convention, Error, Rounding, Unit};
use serde::Deserialize;

#[test]
fn display_renders_through_the_default_configuration() {
    assert_eq!(ByteSize::new(1).to_string(), "1 byte");
    assert_eq!(ByteSize::new(0).to_string(), "0 bytes");
    assert_eq!(ByteSize::new(1023).to_string(), "1,023 bytes");
    assert_eq!(ByteSize::new(1024).to_string(), "1 KB");
    assert_eq!(ByteSize::new(1536).to_string(), "2 KB");
    assert_eq!(format!("{}", ByteSize::new(1 << 20)), "1 MB");
}

#[test]
fn humanize_matches_display_and_surfaces_errors() {
    let size = ByteSize::new(1536);
    assert_eq!(size.humanize().unwrap(), size.to_string());
    assert_eq!(ByteSize::new(-5).humanize(), Err(Error::NegativeSize(-5)));
}

#[test]
fn humanize_with_uses_the_given_formatter() {
    let formatter = ByteSizeFormatter::builder()
        .convention(Convention::Binary)
        .decimal_places(1)
        .rounding(Rounding::Down)
        .build()
        .unwrap();
    assert_eq!(ByteSize::new(1536).humanize_with(&formatter).unwrap(), "1.5 KiB");
    assert_eq!(ByteSize::new(2047).humanize_with(&formatter).unwrap(), "1.9 KiB");
}

#[test]
fn formatter_accepts_anything_that_converts_to_a_size() {
    let formatter = ByteSizeFormatter::default();
    assert_eq!(formatter.format(2u8).unwrap(), "2 bytes");
    assert_eq!(formatter.format(1024u32).unwrap(), "1 KB");
    assert_eq!(formatter.format(ByteSize::new(1024)).unwrap(), "1 KB");

    let from_wide = ByteSize::try_from(1_048_576u64).unwrap();
    assert_eq!(formatter.format(from_wide).unwrap(), "1 MB");
}

#[test]
fn float_conversions_truncate_before_formatting() {
    let size = ByteSize::from_f64(2047.9).unwrap();
    assert_eq!(size.value(), 2047);
    assert_eq!(size.humanize().unwrap(), "2 KB");

    assert_eq!(ByteSize::from_f64(1e300), Err(Error::Overflow));
    assert_eq!(ByteSize::from_f32(f32::NAN), Err(Error::Overflow));
    assert_eq!(ByteSize::try_from(u64::MAX), Err(Error::Overflow));
}

#[test]
fn sizes_serialize_as_plain_integers() {
    let size = ByteSize::new(1024);
    assert_eq!(serde_json::to_string(&size).unwrap(), "1024");
    assert_eq!(serde_json::from_str::<ByteSize>("2048").unwrap(), ByteSize::new(2048));

    let sizes: Vec<ByteSize> = serde_json::from_str("[0, 1, -5]").unwrap();
    assert_eq!(sizes, vec![ByteSize::new(0), ByteSize::new(1), ByteSize::new(-5)]);
}

#[test]
fn vocabulary_enums_serialize_with_canonical_names() {
    assert_eq!(serde_json::to_string(&Convention::Binary).unwrap(), "\"binary\"");
    assert_eq!(serde_json::to_string(&Unit::Kilobyte).unwrap(), "\"kilobyte\"");
    assert_eq!(serde_json::to_string(&Rounding::Closest).unwrap(), "\"closest\"");

    assert_eq!(serde_json::from_str::<Convention>("\"iec\"").unwrap(), Convention::Binary);
    assert_eq!(serde_json::from_str::<Convention>("\"si\"").unwrap(), Convention::Decimal);
    assert_eq!(serde_json::from_str::<Convention>("\"customary\"").unwrap(), Convention::Customary);
}

#[derive(Debug, Deserialize)]
struct DisplayPrefs {
    convention: Convention,
    min_unit: Unit,
    max_unit: Unit,
    rounding: Rounding,
    decimal_places: u32,
}

#[test]
fn display_preferences_load_from_toml_with_alias_spellings() {
    let prefs: DisplayPrefs = toml::from_str(
        r#"
        convention = "iec"
        min_unit = "kilobyte"
        max_unit = "terabyte"
        rounding = "down"
        decimal_places = 1
        "#,
    )
    .unwrap();
    assert_eq!(prefs.convention, Convention::Binary);
    assert_eq!(prefs.min_unit, Unit::Kilobyte);
    assert_eq!(prefs.max_unit, Unit::Terabyte);
    assert_eq!(prefs.rounding, Rounding::Down);

    let formatter = ByteSizeFormatter::builder()
        .convention(prefs.convention)
        .min_unit(prefs.min_unit)
        .max_unit(prefs.max_unit)
        .rounding(prefs.rounding)
        .decimal_places(prefs.decimal_places)
        .build()
        .unwrap();
    assert_eq!(formatter.format(512).unwrap(), "0.5 KiB");
    assert_eq!(formatter.format(1536).unwrap(), "1.5 KiB");
}
