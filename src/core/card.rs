//! Card generation and rendering.

use crate::store::Card;
use rand::seq::index;

/// Inclusive upper bound of the number pool cards draw from.
const MAX_NUMBER: usize = 50;

/// Generates a 3×3 bingo card of nine distinct numbers in [1, 50].
///
/// The nine numbers are sampled uniformly without replacement and laid out in
/// three rows of three in draw order. With 50 candidates for 9 slots this
/// cannot fail, so no fallback card exists.
#[must_use]
pub fn generate_card() -> Card {
    let mut rng = rand::thread_rng();
    let mut card = [[0u8; 3]; 3];
    for (i, n) in index::sample(&mut rng, MAX_NUMBER, 9).iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)] // n < 50
        let number = n as u8 + 1;
        card[i / 3][i % 3] = number;
    }
    card
}

/// Renders a card as three ` n | n | n ` rows for display in a code block.
#[must_use]
pub fn format_card(card: &Card) -> String {
    card.iter()
        .map(|row| {
            row.iter()
                .map(|n| format!("{n:2}"))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_numbers_are_distinct_and_in_range() {
        // Generation is random, so exercise it repeatedly.
        for _ in 0..200 {
            let card = generate_card();
            let numbers: Vec<u8> = card.iter().flatten().copied().collect();

            assert_eq!(numbers.len(), 9);
            assert!(numbers.iter().all(|&n| (1..=50).contains(&n)));

            let distinct: HashSet<u8> = numbers.iter().copied().collect();
            assert_eq!(distinct.len(), 9, "card has duplicate numbers: {card:?}");
        }
    }

    #[test]
    fn test_format_card_renders_three_aligned_rows() {
        let card = [[1, 2, 3], [40, 5, 6], [7, 8, 50]];
        let rendered = format_card(&card);

        assert_eq!(rendered, " 1 |  2 |  3\n40 |  5 |  6\n 7 |  8 | 50");
    }
}
