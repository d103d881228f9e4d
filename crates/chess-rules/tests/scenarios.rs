//! Whole-turn scenarios played through the public API.

use chess_rules::{Board, Game, GameConfig, GameError, GameResult, RulesError, TurnOutcome};
use chess_types::{Colour, Coord, File, MoveCategory, MoveRequest, Orientation, PieceType};

fn coord(algebraic: &str) -> Coord {
    Coord::from_algebraic(algebraic).unwrap()
}

fn play(game: &mut Game, requests: &[MoveRequest]) {
    for request in requests {
        if let Err(e) = game.make_move(request) {
            panic!("{} was refused: {}", request, e);
        }
    }
}

#[test]
fn test_king_pawn_double_step() {
    let mut game = Game::new();
    let destination = Coord::from_indices(4, 3).unwrap();
    let report = game
        .make_move(&MoveRequest::regular(PieceType::Pawn, destination))
        .unwrap();

    assert_eq!(report.source, coord("e2"));
    let pawn = game.board().piece(destination);
    assert!(pawn.is(PieceType::Pawn, Colour::White));
    assert_eq!(pawn.move_limit(), 1);
    assert_eq!(pawn.moves_made(), 1);
    assert!(pawn.last_moved());
    assert_eq!(game.board().last_moved(), Some(destination));
}

#[test]
fn test_white_captures_en_passant() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            MoveRequest::regular(PieceType::Pawn, coord("e4")),
            MoveRequest::regular(PieceType::Pawn, coord("a6")),
            MoveRequest::regular(PieceType::Pawn, coord("e5")),
            MoveRequest::regular(PieceType::Pawn, coord("d5")),
        ],
    );

    let report = game
        .make_move(&MoveRequest::capture(PieceType::Pawn, coord("d6")))
        .unwrap();
    assert!(report.en_passant);
    assert_eq!(report.source, coord("e5"));
    assert!(report
        .captured
        .is_some_and(|p| p.is(PieceType::Pawn, Colour::Black)));

    let board = game.board();
    assert!(board.is_empty(coord("d5")), "the passed pawn is removed");
    assert!(board.is_empty(coord("e5")));
    assert!(board.square(coord("d6")).holds(PieceType::Pawn, Colour::White));
    assert_eq!(game.captured_by(Colour::White).len(), 1);
}

#[test]
fn test_black_captures_en_passant() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            MoveRequest::regular(PieceType::Pawn, coord("a3")),
            MoveRequest::regular(PieceType::Pawn, coord("d5")),
            MoveRequest::regular(PieceType::Pawn, coord("a4")),
            MoveRequest::regular(PieceType::Pawn, coord("d4")),
            MoveRequest::regular(PieceType::Pawn, coord("e4")),
        ],
    );

    let report = game
        .make_move(&MoveRequest::capture(PieceType::Pawn, coord("e3")))
        .unwrap();
    assert!(report.en_passant);
    assert!(game.board().is_empty(coord("e4")));
    assert!(game.board().square(coord("e3")).holds(PieceType::Pawn, Colour::Black));
}

#[test]
fn test_en_passant_expires_after_one_turn() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            MoveRequest::regular(PieceType::Pawn, coord("e4")),
            MoveRequest::regular(PieceType::Pawn, coord("a6")),
            MoveRequest::regular(PieceType::Pawn, coord("e5")),
            MoveRequest::regular(PieceType::Pawn, coord("d5")),
            MoveRequest::regular(PieceType::Pawn, coord("h3")),
            MoveRequest::regular(PieceType::Pawn, coord("a5")),
        ],
    );

    let result = game.make_move(&MoveRequest::capture(PieceType::Pawn, coord("d6")));
    assert!(matches!(result, Err(GameError::Rules(RulesError::Notation(_)))));
}

#[test]
fn test_queen_checkmates_boxed_king() {
    let mut board = Board::from_placement("6k1/5ppp/8/8/8/8/8/3Q2K1").unwrap();
    let report = board
        .play(
            Colour::White,
            &MoveRequest::regular(PieceType::Queen, coord("d8")),
        )
        .unwrap();
    assert_eq!(
        report.outcome,
        TurnOutcome::Checkmate {
            winner: Colour::White
        }
    );

    let snapshot = board.clone();
    assert!(board.king_is_in_check(Colour::Black));
    assert!(board.check_for_checkmate(Colour::Black));
    assert_eq!(board, snapshot, "the checkmate scan leaves the board untouched");
}

#[test]
fn test_short_castle_with_moved_kingside_rook() {
    let mut game = Game::from_placement("4k3/8/8/8/8/8/8/4K2R").unwrap();
    play(
        &mut game,
        &[
            MoveRequest::regular(PieceType::Rook, coord("h2")),
            MoveRequest::regular(PieceType::King, coord("e7")),
            MoveRequest::regular(PieceType::Rook, coord("h1")),
            MoveRequest::regular(PieceType::King, coord("e8")),
        ],
    );

    let castle = MoveRequest::castle(Colour::White, MoveCategory::ShortCastle).unwrap();
    let result = game.make_move(&castle);
    assert!(matches!(
        result,
        Err(GameError::Rules(RulesError::IllegalMove(ref message)))
            if message == "You've moved your kingside rook!"
    ));
}

#[test]
fn test_castle_after_king_moved() {
    let mut game = Game::from_placement("r3k3/8/8/8/8/8/8/4K3").unwrap();
    play(
        &mut game,
        &[
            MoveRequest::regular(PieceType::King, coord("d1")),
            MoveRequest::regular(PieceType::King, coord("d8")),
            MoveRequest::regular(PieceType::King, coord("e1")),
            MoveRequest::regular(PieceType::King, coord("e8")),
            MoveRequest::regular(PieceType::King, coord("d1")),
        ],
    );
    let castle = MoveRequest::castle(Colour::Black, MoveCategory::LongCastle).unwrap();
    assert_eq!(
        game.make_move(&castle).unwrap_err().to_string(),
        "Your king has already moved - you cannot castle anymore!"
    );
}

#[test]
fn test_capture_onto_empty_square() {
    let mut game = Game::new();
    let before = game.board().clone();
    let result = game.make_move(&MoveRequest::capture(PieceType::Pawn, coord("d3")));
    assert!(matches!(result, Err(GameError::Rules(RulesError::Notation(_)))));
    assert_eq!(game.board(), &before);
    assert_eq!(game.side_to_move(), Colour::White);
}

#[test]
fn test_self_check_is_rolled_back() {
    // The d2 bishop is pinned against the king by the b4 bishop.
    let mut game = Game::from_placement("4k3/8/8/8/1b6/8/3B4/4K3").unwrap();
    let before = game.board().clone();

    let result = game.make_move(&MoveRequest::regular(PieceType::Bishop, coord("e3")));
    assert_eq!(result.unwrap_err().to_string(), "Your king is in check!");
    assert_eq!(game.board(), &before);

    // Capturing the pinning piece along the pin is fine.
    let report = game
        .make_move(&MoveRequest::capture(PieceType::Bishop, coord("b4")))
        .unwrap();
    assert_eq!(report.source, coord("d2"));
}

#[test]
fn test_ambiguous_move_needs_hint() {
    let mut game = Game::from_placement("4k3/8/8/8/8/8/8/1N2KN2").unwrap();

    let result = game.make_move(&MoveRequest::regular(PieceType::Knight, coord("d2")));
    assert!(matches!(
        result,
        Err(GameError::Rules(RulesError::AmbiguousMove(_)))
    ));

    let report = game
        .make_move(&MoveRequest::regular(PieceType::Knight, coord("d2")).from_file(File::F))
        .unwrap();
    assert_eq!(report.source, coord("f1"));
    assert!(game.board().square(coord("b1")).holds(PieceType::Knight, Colour::White));
}

#[test]
fn test_capture_promotion() {
    let mut game = Game::from_placement("1r2k3/P7/8/8/8/8/8/4K3").unwrap();
    let request =
        MoveRequest::capture(PieceType::Pawn, coord("b8")).promoting_to(PieceType::Queen);
    let report = game.make_move(&request).unwrap();

    assert!(game.board().square(coord("b8")).holds(PieceType::Queen, Colour::White));
    assert!(report
        .captured
        .is_some_and(|p| p.is(PieceType::Rook, Colour::Black)));
    assert_eq!(report.outcome, TurnOutcome::Check);
    assert!(game.is_check());
}

#[test]
fn test_check_detection_ignores_rendering() {
    for placement in [
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR",
        "R2k3R/8/8/8/8/8/8/4K3",
        "4k3/8/8/8/8/8/8/4K3",
    ] {
        let board = Board::from_placement(placement).unwrap();
        let rendered = Board::from_placement(&board.to_placement()).unwrap();
        let reversed = board.to_placement_with(Orientation::Reversed);
        let reloaded = Board::from_placement_with(&reversed, Orientation::Reversed).unwrap();
        assert_eq!(reloaded, board, "{placement}");
        for colour in Colour::SIDES {
            assert_eq!(
                board.king_is_in_check(colour),
                rendered.king_is_in_check(colour),
                "{placement}"
            );
            assert_eq!(
                board.king_is_in_check(colour),
                reloaded.king_is_in_check(colour),
                "{placement}"
            );
        }
    }
}

#[test]
fn test_game_from_config() {
    let config = GameConfig::from_toml_str(
        r#"
        start_position = "6k1/5ppp/8/8/8/8/8/3Q2K1"
        first_to_move = "white"
        "#,
    )
    .unwrap();
    let mut game = Game::from_config(&config).unwrap();

    game.make_move(&MoveRequest::regular(PieceType::Queen, coord("d8")))
        .unwrap();
    assert_eq!(
        game.result(),
        Some(GameResult::Checkmate {
            winner: Colour::White
        })
    );
    assert!(matches!(
        game.make_move(&MoveRequest::regular(PieceType::King, coord("h8"))),
        Err(GameError::GameAlreadyOver)
    ));
}
