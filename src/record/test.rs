use crate::error::FormatError;

use super::{is_valid_name, PaletteColor, PaletteRecord};

fn ocean() -> PaletteRecord {
    PaletteRecord::with_colors(
        "Ocean",
        vec![
            PaletteColor::from_rgb(0x0077be),
            PaletteColor::from_rgb(0x00a6d6),
            PaletteColor::new(255, 255, 255),
        ],
    )
    .unwrap()
}

#[test]
fn check_save_string() {
    assert_eq!(ocean().save_string(), "3 Ocean\n#0077BE\n#00A6D6\n#FFFFFF\n");
    assert_eq!(PaletteRecord::new("Empty").unwrap().save_string(), "0 Empty\n");
}

#[test]
fn check_parse_save_string() {
    for record in [
        ocean(),
        PaletteRecord::new("Empty").unwrap(),
        PaletteRecord::with_colors("Deep Sea 2", vec![PaletteColor::default(); 4]).unwrap(),
        PaletteRecord::new(" Padded ").unwrap(),
    ]
    .iter()
    {
        let parsed = PaletteRecord::parse(record.name(), &record.save_string()).unwrap();
        assert_eq!(&parsed, record);
    }

    // Names that could not be read back are refused up front
    for name in ["", "   ", "a\nb", "a\rb", "a/b", ".."].iter() {
        match PaletteRecord::new(*name) {
            Err(FormatError::InvalidName(rejected)) => assert_eq!(rejected, *name),
            other => panic!("unexpected {:?}", other),
        }
        assert!(PaletteRecord::with_colors(*name, vec![PaletteColor::default()]).is_err());
        assert!(matches!(
            PaletteRecord::parse(*name, "0 Empty\n"),
            Err(FormatError::InvalidName(_))
        ));
    }
}

#[test]
fn check_parse_tolerates_line_endings() {
    let record = PaletteRecord::parse("Ocean", "2 Ocean\r\n#0077be\r\n\r\n#00A6D6").unwrap();
    assert_eq!(
        record.colors(),
        &[
            PaletteColor::from_rgb(0x0077be),
            PaletteColor::from_rgb(0x00a6d6)
        ]
    );
}

#[test]
fn check_parse_keeps_given_name() {
    // A file written through a save under another name still says "Ocean"
    let record = PaletteRecord::parse("Backup", &ocean().save_string()).unwrap();
    assert_eq!(record.name(), "Backup");
    assert_eq!(record.colors(), ocean().colors());
}

#[test]
fn check_parse_errors() {
    match PaletteRecord::parse("Ocean", "") {
        Err(FormatError::Parse { line, .. }) => assert_eq!(line, 1),
        other => panic!("unexpected {:?}", other),
    }
    match PaletteRecord::parse("Ocean", "Ocean\n#000000\n") {
        Err(FormatError::Parse { line, .. }) => assert_eq!(line, 1),
        other => panic!("unexpected {:?}", other),
    }
    match PaletteRecord::parse("Ocean", "2 Ocean\n#000000\nblue\n") {
        Err(FormatError::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("unexpected {:?}", other),
    }
    match PaletteRecord::parse("Ocean", "3 Ocean\n#000000\n#FFFFFF\n") {
        Err(FormatError::Parse { line, message }) => {
            assert_eq!(line, 1);
            assert_eq!(message, "expected 3 colors, found 2");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn check_parse_invalid_utf8() {
    let bytes: &[u8] = b"1 Ocean\n#\xff\xfe0000\n";
    assert!(matches!(
        PaletteRecord::from_reader("Ocean", bytes),
        Err(FormatError::Io(_))
    ));
}

#[test]
fn check_editing() {
    let mut record = ocean();
    assert_eq!(record.len(), 3);

    assert_eq!(record.remove(1), Some(PaletteColor::from_rgb(0x00a6d6)));
    assert_eq!(record.remove(5), None);
    assert!(record.insert(0, PaletteColor::new(1, 2, 3)));
    assert!(!record.insert(9, PaletteColor::new(1, 2, 3)));
    assert_eq!(
        record.replace(2, PaletteColor::new(0, 0, 0)),
        Some(PaletteColor::new(255, 255, 255))
    );
    record.push(PaletteColor::new(9, 9, 9));

    assert_eq!(
        record.colors(),
        &[
            PaletteColor::new(1, 2, 3),
            PaletteColor::from_rgb(0x0077be),
            PaletteColor::new(0, 0, 0),
            PaletteColor::new(9, 9, 9),
        ]
    );
    assert_eq!(record.name(), "Ocean");
}

#[test]
fn check_color_conversions() {
    let color = PaletteColor::from_rgb(0x12ab34);
    assert_eq!(color, PaletteColor::new(0x12, 0xab, 0x34));
    assert_eq!(color.to_rgb(), 0x12ab34);
    assert_eq!(color.to_hex(), "#12AB34");
    assert_eq!(PaletteColor::from_hex("#12ab34"), Some(color));
    assert_eq!(PaletteColor::from([0x12, 0xab, 0x34]), color);
    assert_eq!(color.to_rgba().0, [0x12, 0xab, 0x34, 255]);
    assert_eq!(
        PaletteColor::new(0, 0, 0).distance_squared(PaletteColor::new(3, 4, 0)),
        25
    );
}

#[test]
fn check_swatch() {
    let image = ocean().swatch(4, 2).unwrap();
    assert_eq!(image.dimensions(), (12, 2));
    assert_eq!(image.get_pixel(0, 0).0, [0x00, 0x77, 0xbe, 255]);
    assert_eq!(image.get_pixel(3, 1).0, [0x00, 0x77, 0xbe, 255]);
    assert_eq!(image.get_pixel(4, 0).0, [0x00, 0xa6, 0xd6, 255]);
    assert_eq!(image.get_pixel(11, 1).0, [255, 255, 255, 255]);

    let empty = PaletteRecord::new("Empty").unwrap();
    assert_eq!(empty.swatch(4, 2).unwrap().width(), 0);
    assert_eq!(empty.swatch(u32::MAX, 1).unwrap().width(), 0);
}

#[test]
fn check_swatch_too_wide() {
    let pair = PaletteRecord::with_colors("Pair", vec![PaletteColor::default(); 2]).unwrap();
    assert!(pair.swatch(u32::MAX, 1).is_none());
    assert!(pair.swatch(u32::MAX / 2 + 1, 1).is_none());
}

#[test]
fn check_valid_names() {
    assert!(is_valid_name("Ocean"));
    assert!(is_valid_name("Deep Sea 2"));
    assert!(!is_valid_name(""));
    assert!(!is_valid_name("   "));
    assert!(!is_valid_name(".."));
    assert!(!is_valid_name("a/b"));
    assert!(!is_valid_name("a\\b"));
    assert!(!is_valid_name("two\nlines"));
}
