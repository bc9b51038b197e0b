//! Built-in demo catalog used by the terminal preview.

use super::catalog::{AchievementCatalog, Placement};
use super::types::{AchievementDefinition, Rarity};
use crate::error::GridConfigError;

/// (id, name, description, icon, rarity, target)
type Entry = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Rarity,
    u64,
);

/// Demo achievements in unlock order. Placed on a spiral from the grid center.
pub const DEMO_ACHIEVEMENTS: &[Entry] = &[
    // ═══════════════════════════════════════════════════════════════
    // FIRST STEPS
    // ═══════════════════════════════════════════════════════════════
    ("first_day", "First Day", "Complete your first day", "☀", Rarity::Common, 1),
    ("three_days", "Warming Up", "Keep a 3 day streak", "✦", Rarity::Common, 3),
    ("first_week", "One Week", "Keep a 7 day streak", "✧", Rarity::Uncommon, 7),
    ("early_bird", "Early Bird", "Check in before 7am", "☼", Rarity::Common, 1),
    ("night_owl", "Night Owl", "Check in after 11pm", "☾", Rarity::Common, 1),
    ("comeback", "Comeback", "Return after a missed day", "↺", Rarity::Uncommon, 1),
    // ═══════════════════════════════════════════════════════════════
    // STREAKS
    // ═══════════════════════════════════════════════════════════════
    ("two_weeks", "Fortnight", "Keep a 14 day streak", "◆", Rarity::Uncommon, 14),
    ("month", "Full Moon", "Keep a 30 day streak", "●", Rarity::Rare, 30),
    ("quarter", "Season", "Keep a 90 day streak", "❖", Rarity::Epic, 90),
    ("half_year", "Half Year", "Keep a 180 day streak", "✶", Rarity::Epic, 180),
    ("year", "Orbit", "Keep a 365 day streak", "✹", Rarity::Legendary, 365),
    // ═══════════════════════════════════════════════════════════════
    // TOTALS
    // ═══════════════════════════════════════════════════════════════
    ("ten_total", "Ten", "Log 10 days in total", "ⅹ", Rarity::Common, 10),
    ("fifty_total", "Fifty", "Log 50 days in total", "ʟ", Rarity::Uncommon, 50),
    ("hundred_total", "Century", "Log 100 days in total", "ᴄ", Rarity::Rare, 100),
    ("five_hundred", "Milestone", "Log 500 days in total", "ᴅ", Rarity::Epic, 500),
    ("thousand", "Millennium", "Log 1,000 days in total", "ᴍ", Rarity::Legendary, 1000),
    // ═══════════════════════════════════════════════════════════════
    // HABITS
    // ═══════════════════════════════════════════════════════════════
    ("weekend", "Weekender", "Check in on a Saturday and Sunday", "▣", Rarity::Common, 2),
    ("perfect_week", "Perfect Week", "Seven check-ins in one calendar week", "▦", Rarity::Rare, 7),
    ("perfect_month", "Perfect Month", "Every day of a calendar month", "▩", Rarity::Epic, 31),
    ("new_year", "Fresh Start", "Check in on January 1st", "✺", Rarity::Rare, 1),
    ("leap_day", "Leap", "Check in on February 29th", "✷", Rarity::Legendary, 1),
];

/// Cell coordinates walked as a square spiral outward from the center.
pub fn spiral_positions(grid_size: usize) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(grid_size * grid_size);
    if grid_size == 0 {
        return positions;
    }

    let n = grid_size as i64;
    let (mut row, mut col) = ((n - 1) / 2, (n - 1) / 2);
    // right, down, left, up
    let dirs = [(0i64, 1i64), (1, 0), (0, -1), (-1, 0)];
    let mut dir = 0;
    let mut run = 1;

    positions.push((row as usize, col as usize));
    while positions.len() < grid_size * grid_size {
        for _ in 0..2 {
            let (dr, dc) = dirs[dir % 4];
            for _ in 0..run {
                row += dr;
                col += dc;
                if (0..n).contains(&row) && (0..n).contains(&col) {
                    positions.push((row as usize, col as usize));
                }
            }
            dir += 1;
        }
        run += 1;
    }
    positions
}

/// Demo catalog for an N×N grid. Achievements beyond the cell count are dropped.
pub fn demo_catalog(grid_size: usize) -> Result<AchievementCatalog, GridConfigError> {
    let placements = spiral_positions(grid_size)
        .into_iter()
        .zip(DEMO_ACHIEVEMENTS.iter())
        .map(|((row, col), (id, name, description, icon, rarity, target))| {
            Placement::new(
                row,
                col,
                AchievementDefinition::new(*id, *name, *description, *icon, *rarity, *target),
            )
        })
        .collect();
    AchievementCatalog::new(grid_size, placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_spiral_starts_at_center() {
        assert_eq!(spiral_positions(3)[0], (1, 1));
        assert_eq!(spiral_positions(7)[0], (3, 3));
    }

    #[test]
    fn test_spiral_covers_grid_once() {
        for n in 1..=8 {
            let positions = spiral_positions(n);
            assert_eq!(positions.len(), n * n);
            let unique: HashSet<_> = positions.iter().collect();
            assert_eq!(unique.len(), n * n, "duplicates for n={}", n);
        }
    }

    #[test]
    fn test_spiral_steps_are_adjacent() {
        let positions = spiral_positions(5);
        for pair in positions.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let dist = (a.0 as i64 - b.0 as i64).abs() + (a.1 as i64 - b.1 as i64).abs();
            assert_eq!(dist, 1, "{:?} -> {:?}", a, b);
        }
    }

    #[test]
    fn test_demo_ids_unique() {
        let ids: HashSet<_> = DEMO_ACHIEVEMENTS.iter().map(|e| e.0).collect();
        assert_eq!(ids.len(), DEMO_ACHIEVEMENTS.len());
    }

    #[test]
    fn test_demo_catalog_fits_small_grid() {
        let catalog = demo_catalog(3).unwrap();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.position_of("first_day"), Some((1, 1)));
    }

    #[test]
    fn test_demo_catalog_full_on_large_grid() {
        let catalog = demo_catalog(7).unwrap();
        assert_eq!(catalog.len(), DEMO_ACHIEVEMENTS.len());
    }
}
