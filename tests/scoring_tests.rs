//! Scoring tests - reference scenarios and score properties

use wordgrid::core::{calculate_move_score, extract_words, Board, ScoringConfig};
use wordgrid::types::{Placement, Position, Tile, WordFormed};

fn placements(letters: &[(char, u8, u8)]) -> Vec<Placement> {
    letters
        .iter()
        .enumerate()
        .map(|(i, &(letter, row, col))| {
            Placement::new(Tile::new(i as u32, letter), Position::new(row, col))
        })
        .collect()
}

fn score_fresh(moves: &[Placement], config: &ScoringConfig) -> wordgrid::core::MoveScore {
    let board = Board::new().with_placements(moves).expect("placements apply");
    let words = extract_words(&board, moves);
    calculate_move_score(&board, moves, &words, config)
}

#[test]
fn test_cat_through_center_scores_ten() {
    let score = score_fresh(
        &placements(&[('C', 7, 6), ('A', 7, 7), ('T', 7, 8)]),
        &ScoringConfig::default(),
    );
    assert_eq!(score.total_score, 10);
    assert_eq!(score.word_scores.len(), 1);
    assert_eq!(score.word_scores[0].word, "CAT");
    assert_eq!(score.word_scores[0].base_score, 5);
    assert_eq!(score.word_scores[0].word_multiplier, 2);
    assert_eq!(score.new_words_formed, vec!["CAT".to_string()]);
}

#[test]
fn test_cat_without_premiums_scores_five() {
    let config = ScoringConfig {
        use_premium_squares: false,
        ..ScoringConfig::default()
    };
    let score = score_fresh(&placements(&[('C', 7, 6), ('A', 7, 7), ('T', 7, 8)]), &config);
    assert_eq!(score.total_score, 5);
}

#[test]
fn test_q_on_double_letter_scores_twenty() {
    // The scorer is a pure function of its inputs; hand it a single-letter
    // word on the (0, 3) double letter square.
    let moves = placements(&[('Q', 0, 3)]);
    let board = Board::new().with_placements(&moves).expect("placement applies");
    let word = WordFormed {
        word: "Q".to_string(),
        positions: vec![Position::new(0, 3)],
        new_tiles: vec![Position::new(0, 3)],
        existing_tiles: vec![],
        is_main_word: true,
    };
    let score = calculate_move_score(&board, &moves, &[word], &ScoringConfig::default());
    assert_eq!(score.total_score, 20);
}

#[test]
fn test_quite_across_double_letter_and_triple_word() {
    let score = score_fresh(
        &placements(&[('Q', 0, 3), ('U', 0, 4), ('I', 0, 5), ('T', 0, 6), ('E', 0, 7)]),
        &ScoringConfig::default(),
    );
    // (2*10 + 1 + 1 + 1 + 1) * 3
    assert_eq!(score.total_score, 72);
    let word = &score.word_scores[0];
    assert_eq!(word.base_score, 24);
    assert_eq!(word.word_multiplier, 3);
    let q = &word.tile_scores[0];
    assert_eq!(q.letter_multiplier, 2);
    assert_eq!(q.score, 20);
}

#[test]
fn test_seven_tiles_earn_the_bingo_bonus() {
    let score = score_fresh(
        &placements(&[
            ('P', 7, 4),
            ('L', 7, 5),
            ('A', 7, 6),
            ('Y', 7, 7),
            ('I', 7, 8),
            ('N', 7, 9),
            ('G', 7, 10),
        ]),
        &ScoringConfig::default(),
    );
    assert_eq!(score.tiles_used, 7);
    assert_eq!(score.bingo_bonus, 50);
    assert!(score.total_score > 50);
    assert_eq!(score.breakdown.bingo_bonus, 50);
}

#[test]
fn test_bingo_needs_exactly_seven_tiles() {
    for n in 1..=6usize {
        let letters: Vec<(char, u8, u8)> =
            (0..n).map(|i| ('A', 7, 4 + i as u8)).collect();
        let score = score_fresh(&placements(&letters), &ScoringConfig::default());
        assert_eq!(score.bingo_bonus, 0, "no bingo for {} tiles", n);
    }
}

#[test]
fn test_breakdown_total_always_matches() {
    let cases: Vec<Vec<Placement>> = vec![
        placements(&[('C', 7, 6), ('A', 7, 7), ('T', 7, 8)]),
        placements(&[('Q', 0, 3), ('U', 0, 4), ('I', 0, 5), ('T', 0, 6), ('E', 0, 7)]),
        placements(&[
            ('P', 7, 4),
            ('L', 7, 5),
            ('A', 7, 6),
            ('Y', 7, 7),
            ('I', 7, 8),
            ('N', 7, 9),
            ('G', 7, 10),
        ]),
    ];
    for moves in cases {
        let score = score_fresh(&moves, &ScoringConfig::default());
        let b = &score.breakdown;
        assert_eq!(b.total, score.total_score);
        assert_eq!(
            b.base_points + b.letter_bonus + b.word_bonus + b.bingo_bonus,
            b.total
        );
        assert!(!b.details.is_empty());
    }
}

#[test]
fn test_existing_tiles_never_contribute_multipliers() {
    // First "PIT" is played across the (0, 3) double letter; then "S" is
    // added. The second move scores PITS at face value only.
    let first = placements(&[('P', 0, 3), ('I', 0, 4), ('T', 0, 5)]);
    let board = Board::new().with_placements(&first).expect("first move");

    let second = vec![Placement::new(Tile::new(10, 'S'), Position::new(0, 6))];
    let temp = board.with_placements(&second).expect("second move");
    let words = extract_words(&temp, &second);
    let score = calculate_move_score(&temp, &second, &words, &ScoringConfig::default());

    // P(3)+I(1)+T(1)+S(1): the double letter under P stays spent.
    assert_eq!(score.total_score, 6);
    for tile in &score.word_scores[0].tile_scores {
        if !tile.is_new {
            assert_eq!(tile.letter_multiplier, 1);
        }
    }
}

#[test]
fn test_two_word_multipliers_multiply() {
    // Row 4 carries double-word squares at (4, 4) and (4, 10), exactly a
    // rack apart. ANEMONE covers both: x2 * x2 = x4, never 2 + 2.
    let score = score_fresh(
        &placements(&[
            ('A', 4, 4),
            ('N', 4, 5),
            ('E', 4, 6),
            ('M', 4, 7),
            ('O', 4, 8),
            ('N', 4, 9),
            ('E', 4, 10),
        ]),
        &ScoringConfig::default(),
    );
    assert_eq!(score.word_scores[0].word_multiplier, 4);
    // A1 N1 E1 M3 O1 N1 E1 = 9 base, quadrupled, plus the full-rack bonus.
    assert_eq!(score.word_scores[0].base_score, 9);
    assert_eq!(score.word_scores[0].final_score, 36);
    assert_eq!(score.bingo_bonus, 50);
    assert_eq!(score.total_score, 86);
}
