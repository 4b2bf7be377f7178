//! Human-readable depth render.
//!
//! `Display` for [`OrderBook`] prints the ladder the way a trading UI shows
//! it: asks on top in descending price, a separator, then bids in descending
//! price. The top 5 levels of each side are shown individually; levels 6–10
//! are aggregated into one row, and each further block doubles in size
//! (11–20, 21–40, …). Aggregated rows show `first_price - last_price` and the
//! summed visible volume. All prices and volumes render with two decimals.

use super::book::OrderBook;
use crate::types::{Price, Volume};
use std::fmt;

/// Levels shown individually before aggregation starts, and the size of the
/// first aggregated block.
const TOP_LEVELS: usize = 5;

/// Group `levels` (already in priority order): the first [`TOP_LEVELS`]
/// singly, then blocks of 5, 10, 20, … until the ladder is exhausted.
fn group(levels: &[(Price, Volume)]) -> Vec<&[(Price, Volume)]> {
    let mut groups = Vec::new();
    let singles = levels.len().min(TOP_LEVELS);
    for single in levels[..singles].chunks(1) {
        groups.push(single);
    }

    let mut start = singles;
    let mut size = TOP_LEVELS;
    while start < levels.len() {
        let end = (start + size).min(levels.len());
        groups.push(&levels[start..end]);
        start = end;
        size *= 2;
    }
    groups
}

fn total(levels: &[(Price, Volume)]) -> Volume {
    levels.iter().map(|(_, volume)| *volume).sum()
}

impl fmt::Display for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let asks: Vec<_> = self.iter_levels(crate::types::Side::Sell).collect();
        let bids: Vec<_> = self.iter_levels(crate::types::Side::Buy).collect();

        // asks render top-down in descending price: group in priority order
        // (ascending), then reverse the rows
        for levels in group(&asks).into_iter().rev() {
            match levels {
                [(price, volume)] => writeln!(f, "\t\t{price}\t\t{volume}")?,
                _ => {
                    let (first, _) = levels[0];
                    let (last, _) = levels[levels.len() - 1];
                    writeln!(f, "\t\t{first} - {last}\t{}", total(levels))?;
                }
            }
        }

        writeln!(f, "-----------------------------------------------------")?;

        // bids are already walked in descending price
        for levels in group(&bids) {
            match levels {
                [(price, volume)] => writeln!(f, "{volume}\t\t{price}")?,
                _ => {
                    let (first, _) = levels[0];
                    let (last, _) = levels[levels.len() - 1];
                    writeln!(f, "{}\t\t{first} - {last}\t", total(levels))?;
                }
            }
        }

        Ok(())
    }
}
