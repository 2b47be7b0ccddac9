//! Preset coordinates offered by the control panel

/// A named coordinate string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub coords: &'static str,
}

/// Presets in panel order; laid out two per row
pub const PRESETS: [Preset; 8] = [
    Preset { name: "North Pole", coords: "0,0,1" },
    Preset { name: "South Pole", coords: "0,0,-1" },
    Preset { name: "Equator X+", coords: "1,0,0" },
    Preset { name: "Equator X-", coords: "-1,0,0" },
    Preset { name: "Equator Y+", coords: "0,1,0" },
    Preset { name: "Equator Y-", coords: "0,-1,0" },
    Preset { name: "Front", coords: "0,0,1" },
    Preset { name: "Back", coords: "0,0,-1" },
];

/// Columns in the preset grid
pub const PRESET_COLUMNS: usize = 2;

/// Look up a preset by name, ignoring ASCII case
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Grid cell (row, column) of the preset at `index`
pub fn grid_position(index: usize) -> (usize, usize) {
    (index / PRESET_COLUMNS, index % PRESET_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geosphere_io::parse_coordinates;

    #[test]
    fn test_presets_parse() {
        for preset in PRESETS.iter() {
            assert!(parse_coordinates(preset.coords).is_ok(), "{}", preset.name);
        }
    }

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("north pole").map(|p| p.coords), Some("0,0,1"));
        assert_eq!(find_preset("Equator Y-").map(|p| p.coords), Some("0,-1,0"));
        assert!(find_preset("Tropic").is_none());
    }

    #[test]
    fn test_grid_position() {
        assert_eq!(grid_position(0), (0, 0));
        assert_eq!(grid_position(3), (1, 1));
        assert_eq!(grid_position(7), (3, 1));
    }
}
