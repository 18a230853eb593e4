use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::*;
use crate::board::{Cell, Pos};

const SAMPLE: &str = "xxxxxxxxxWxWxxxxBxxxW";

fn board(text: &str) -> Board {
    text.parse().unwrap()
}

fn run(phase: Phase, algorithm: Algorithm, b: &Board, player: Player, depth: u32) -> SearchResult {
    Searcher::new(phase, algorithm)
        .search(b, player, depth)
        .unwrap()
}

/// Random board with a random share of the cells occupied
fn random_board(rng: &mut ChaCha20Rng) -> Board {
    let fill = rng.gen_range(0.3..0.85);
    random_board_with_fill(rng, fill)
}

/// Random board with roughly `fill` of the cells occupied
fn random_board_with_fill(rng: &mut ChaCha20Rng, fill: f64) -> Board {
    Pos::all().fold(Board::new(), |b, pos| {
        if rng.gen_bool(fill) {
            let cell = if rng.gen_bool(0.5) {
                Cell::White
            } else {
                Cell::Black
            };
            b.with(pos, cell)
        } else {
            b
        }
    })
}

#[test]
fn test_depth_zero_scores_input() {
    let b = board(SAMPLE);
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let result = run(Phase::Opening, algorithm, &b, Player::White, 0);
        assert_eq!(result.board, b);
        assert_eq!(result.nodes, 1);
        assert_eq!(result.score, 2);
    }
}

#[test]
fn test_depth_zero_on_full_board() {
    let b = board("WBWBWBWBWBWBWBWBWBWBW");
    let result = run(Phase::Opening, Algorithm::Minimax, &b, Player::White, 0);
    assert_eq!(result.board, b);
}

#[test]
fn test_opening_takes_mill_capture() {
    let b = board(SAMPLE);
    let result = run(Phase::Opening, Algorithm::Minimax, &b, Player::White, 1);
    assert_eq!(result.board.to_string(), "xWxxxxxxxWxWxxxxxxxxW");
    assert_eq!(result.score, 4);
    // One leaf per empty cell; both mill captures (g0 and f3) have a single victim
    assert_eq!(result.nodes, 17);
}

#[test]
fn test_opening_depth_two_counts() {
    let b = board(SAMPLE);
    let minimax = run(Phase::Opening, Algorithm::Minimax, &b, Player::White, 2);
    let alpha_beta = run(Phase::Opening, Algorithm::AlphaBeta, &b, Player::White, 2);

    assert_eq!(minimax.board.to_string(), "xWxxxxxxxWxWxxxxxxxxW");
    assert_eq!(minimax.score, 3);
    // 15 quiet placements leave 16 replies each; the 2 captures free a cell
    // and leave 17
    assert_eq!(minimax.nodes, 15 * 16 + 2 * 17);
    assert_eq!(minimax.cutoffs, 0);

    assert_eq!(alpha_beta.board, minimax.board);
    assert_eq!(alpha_beta.score, minimax.score);
    // a0 and the g0 capture are searched in full; every later sibling is
    // refuted by Black's first reply
    assert_eq!(alpha_beta.nodes, 16 + 17 + 15);
    assert_eq!(alpha_beta.cutoffs, 15);
}

#[test]
fn test_black_minimizes() {
    let b = board(SAMPLE).invert();
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let result = run(Phase::Opening, algorithm, &b, Player::Black, 1);
        assert_eq!(result.board.to_string(), "xBxxxxxxxBxBxxxxxxxxB");
        assert_eq!(result.score, -4);
    }
}

#[test]
fn test_no_legal_moves_at_root() {
    let full = board("WBWBWBWBWBWBWBWBWBWBW");
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let mut searcher = Searcher::new(Phase::Opening, algorithm);
        assert_eq!(
            searcher.search(&full, Player::White, 3),
            Err(SearchError::NoLegalMoves {
                player: Player::White
            })
        );
    }

    // Black boxed in on the bottom rows
    let blocked = board("BBBBWWWWxxWWxxxxxxxxx");
    let mut searcher = Searcher::new(Phase::Midgame, Algorithm::Minimax);
    assert_eq!(
        searcher.search(&blocked, Player::Black, 1),
        Err(SearchError::NoLegalMoves {
            player: Player::Black
        })
    );
}

#[test]
fn test_blocking_the_opponent_wins() {
    // Only d6 can move without releasing Black; d6 -> d5 is the first such move
    let b = board("BBBBWWWWxxWWxxxxxxxWx");
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let result = run(Phase::Midgame, algorithm, &b, Player::White, 2);
        assert_eq!(result.score, Score::INFINITY);
        assert_eq!(result.board.to_string(), "BBBBWWWWxxWWxxxxWxxxx");
    }
}

#[test]
fn test_searcher_is_reusable() {
    let b = board(SAMPLE);
    let mut searcher = Searcher::new(Phase::Opening, Algorithm::AlphaBeta);
    let first = searcher.search(&b, Player::White, 2).unwrap();
    let second = searcher.search(&b, Player::White, 2).unwrap();
    assert_eq!(first, second);
    assert_eq!(searcher.phase(), Phase::Opening);
    assert_eq!(searcher.algorithm(), Algorithm::AlphaBeta);
}

#[test]
fn test_alpha_beta_matches_minimax_fixed_boards() {
    let cases = [
        (Phase::Opening, "WBWBxWBxWBxWBxBWxWBxB", 4),
        (Phase::Opening, "xxWxBxxWxBxxWxxBxxxxx", 3),
        (Phase::Midgame, "WWxBxWBxWxBWxWBxBWxxB", 3),
        (Phase::Midgame, "WxxxxxxWxxxxxxxxBBBWB", 3),
    ];
    for (phase, text, max_depth) in cases {
        let b = board(text);
        for player in [Player::White, Player::Black] {
            for depth in 0..=max_depth {
                let minimax = run(phase, Algorithm::Minimax, &b, player, depth);
                let alpha_beta = run(phase, Algorithm::AlphaBeta, &b, player, depth);
                assert_eq!(
                    (alpha_beta.score, alpha_beta.board),
                    (minimax.score, minimax.board),
                    "{text} {player:?} depth {depth}"
                );
                assert!(alpha_beta.nodes <= minimax.nodes);
            }
        }
    }
}

#[test]
fn test_alpha_beta_matches_minimax_sampled_boards() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let mut pruned_somewhere = false;

    for _ in 0..24 {
        let b = random_board(&mut rng);
        for (phase, max_depth) in [(Phase::Opening, 3), (Phase::Midgame, 2)] {
            for player in [Player::White, Player::Black] {
                for depth in 0..=max_depth {
                    let mut minimax = Searcher::new(phase, Algorithm::Minimax);
                    let mut alpha_beta = Searcher::new(phase, Algorithm::AlphaBeta);
                    match (
                        minimax.search(&b, player, depth),
                        alpha_beta.search(&b, player, depth),
                    ) {
                        (Ok(mm), Ok(ab)) => {
                            assert_eq!((ab.score, ab.board), (mm.score, mm.board), "{b}");
                            assert!(ab.nodes <= mm.nodes);
                            pruned_somewhere |= ab.nodes < mm.nodes;
                        }
                        (Err(e1), Err(e2)) => assert_eq!(e1, e2),
                        (mm, ab) => panic!("{b}: minimax {mm:?} vs alpha-beta {ab:?}"),
                    }
                }
            }
        }
    }

    assert!(pruned_somewhere);
}

#[test]
fn test_alpha_beta_matches_minimax_depth_four() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut checked = 0;

    while checked < 8 {
        // Crowded boards keep the depth-4 trees small
        let fill = rng.gen_range(0.6..0.85);
        let b = random_board_with_fill(&mut rng, fill);
        // Flying multiplies the branching factor; keep to sliding positions
        if b.count(Player::White) == 3 || b.count(Player::Black) == 3 {
            continue;
        }
        checked += 1;

        for phase in [Phase::Opening, Phase::Midgame] {
            for player in [Player::White, Player::Black] {
                for depth in 0..=4 {
                    let mm = Searcher::new(phase, Algorithm::Minimax).search(&b, player, depth);
                    let ab = Searcher::new(phase, Algorithm::AlphaBeta).search(&b, player, depth);
                    match (mm, ab) {
                        (Ok(mm), Ok(ab)) => {
                            assert_eq!(
                                (ab.score, ab.board),
                                (mm.score, mm.board),
                                "{b} {phase:?} {player:?} depth {depth}"
                            );
                            assert!(ab.nodes <= mm.nodes);
                        }
                        (Err(e1), Err(e2)) => assert_eq!(e1, e2),
                        (mm, ab) => panic!("{b}: minimax {mm:?} vs alpha-beta {ab:?}"),
                    }
                }
            }
        }
    }
}
