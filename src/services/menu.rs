use chrono::NaiveDate;

use crate::{
    config::Config,
    models::{feedback::display_date, menu::MenuBlock},
    services::sheets::SheetsClient,
};

// Fixed column layout of the menu sheet.
const COL_DATE: usize = 0;
const COL_BREAKFAST: usize = 2;
const COL_LUNCH: usize = 3;
const COL_DINNER: usize = 4;
const COL_SNACK: usize = 5;

/// Rows per day: the anchor row plus the three rows beneath it.
const BLOCK_ROWS: usize = 4;

pub struct MenuService;

impl MenuService {
    /// Re-read the full menu grid and assemble today's block. `None` means
    /// no menu row matches today's date — "no menu published", not an error.
    pub async fn today(
        sheets: &SheetsClient,
        config: &Config,
        today: NaiveDate,
    ) -> anyhow::Result<Option<MenuBlock>> {
        let grid = sheets.read_grid(&config.menu_sheet).await?;
        Ok(locate(&grid, today))
    }
}

/// Scan the grid for the row whose first cell equals today's unpadded
/// display date ("5.3.2025") and assemble the 4-row menu block anchored
/// there. The comparison is an exact string match: a sheet that stores
/// zero-padded dates will never match, which is the documented contract
/// with the sheet's maintainers, not something to normalize away here.
pub fn locate(grid: &[Vec<String>], today: NaiveDate) -> Option<MenuBlock> {
    let needle = display_date(today);
    let anchor = grid
        .iter()
        .position(|row| row.get(COL_DATE).map(|c| c.trim()) == Some(needle.as_str()))?;

    let block = &grid[anchor..grid.len().min(anchor + BLOCK_ROWS)];
    let cell = |row: &[String], col: usize| row.get(col).cloned().unwrap_or_default();

    // Lunch and dinner spread one dish per row across the block; blank cells
    // contribute nothing. Breakfast and the snack break live entirely in the
    // anchor row (merged cells in the sheet).
    let joined = |col: usize| {
        block
            .iter()
            .map(|row| cell(row, col))
            .filter(|text| !text.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    };

    Some(MenuBlock {
        date: needle,
        breakfast: cell(&block[0], COL_BREAKFAST),
        lunch: joined(COL_LUNCH),
        dinner: joined(COL_DINNER),
        snack: cell(&block[0], COL_SNACK),
    })
}

/// Split a menu cell into individual dish names: any run of CR/LF characters
/// is one delimiter, segments are trimmed, blanks dropped. Empty input gives
/// an empty list, never an error.
pub fn parse_items(text: &str) -> Vec<String> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    #[test]
    fn assembles_block_skipping_blank_lunch_rows() {
        let grid = vec![
            row(&["TARİH", "", "KAHVALTI", "ÖĞLE", "AKŞAM", "ARA ÖĞÜN"]),
            row(&["5.3.2025", "", "Peynir\nZeytin", "A", "Çorba", "Süt"]),
            row(&["", "", "", "B", "Pilav", ""]),
            row(&["", "", "", "", "", ""]),
            row(&["", "", "", "", "", ""]),
            row(&["6.3.2025", "", "Bal", "X", "Y", "Meyve"]),
        ];

        let block = locate(&grid, today()).unwrap();
        assert_eq!(block.date, "5.3.2025");
        assert_eq!(block.lunch, "A\nB");
        assert_eq!(block.dinner, "Çorba\nPilav");
        // Anchor row only, raw and unsplit.
        assert_eq!(block.breakfast, "Peynir\nZeytin");
        assert_eq!(block.snack, "Süt");
    }

    #[test]
    fn block_is_clamped_at_grid_end() {
        let grid = vec![
            row(&["5.3.2025", "", "Bal", "A", "", ""]),
            row(&["", "", "", "B", "", ""]),
        ];
        let block = locate(&grid, today()).unwrap();
        assert_eq!(block.lunch, "A\nB");
    }

    #[test]
    fn no_anchor_returns_none() {
        let grid = vec![
            row(&["4.3.2025", "", "Bal", "A", "B", "C"]),
            // Zero-padded date must not match the unpadded lookup.
            row(&["05.03.2025", "", "Bal", "A", "B", "C"]),
        ];
        assert_eq!(locate(&grid, today()), None);
    }

    #[test]
    fn anchor_cell_is_trimmed_before_compare() {
        let grid = vec![row(&[" 5.3.2025 ", "", "", "Mercimek", "", ""])];
        assert!(locate(&grid, today()).is_some());
    }

    #[test]
    fn parses_mixed_line_breaks() {
        assert_eq!(
            parse_items("Çorba\r\n Pilav \r\rAyran\n\n"),
            vec!["Çorba", "Pilav", "Ayran"]
        );
        assert!(parse_items("").is_empty());
        assert!(parse_items("  \n \r\n ").is_empty());
    }

    #[test]
    fn parse_is_idempotent_under_rejoin() {
        for text in ["A\r\nB\n\nC", "  tek yemek  ", "", "\r\r\n"] {
            let once = parse_items(text);
            let again = parse_items(&once.join("\n"));
            assert_eq!(once, again);
        }
    }
}
