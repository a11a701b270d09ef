use nightsweeper_core::*;
use rand::prelude::*;
use rand::rngs::SmallRng;

const STANDARD: BoardConfig = BoardConfig::STANDARD;

fn preset(config: BoardConfig, mines: &[CellIndex]) -> Game<PresetMineFieldGenerator> {
    let generator = PresetMineFieldGenerator::new(config, mines).unwrap();
    Game::with_generator(config, generator).unwrap()
}

fn flag_cells(game: &Game<impl MineFieldGenerator>) -> CellCount {
    game.display().iter().filter(|cell| cell.is_flag()).count() as CellCount
}

#[test]
fn first_click_is_never_a_mine() {
    for seed in 0..50 {
        let mut game = Game::new(STANDARD, seed).unwrap();
        let first = (seed * 131 % 900) as CellIndex;

        let outcome = game.handle(Action::Reveal, Some(first)).unwrap();

        assert_ne!(outcome, Outcome::Lost);
        let field = game.board().field();
        assert_eq!(field.iter_mines().count(), 150);
        assert!(!field.contains_mine(first));
    }
}

#[test]
fn true_values_count_neighboring_mines() {
    let mut game = Game::new(STANDARD, 2024).unwrap();
    game.handle(Action::Reveal, Some(450)).unwrap();
    let geometry = STANDARD.geometry();
    let field = game.board().field();

    for index in 0..STANDARD.total_cells() {
        let mines = geometry
            .neighbors(index)
            .iter()
            .filter(|&&n| field.contains_mine(n))
            .count() as u8;
        assert_eq!(field.adjacent_mines(index), mines);
        if !field.contains_mine(index) {
            assert_eq!(field.true_value(index), TrueValue::Clear(mines));
        }
    }
}

#[test]
fn flag_counters_match_grid_through_random_play() {
    let mut rng = SmallRng::seed_from_u64(5);
    for seed in 0..10 {
        let mut game = Game::new(STANDARD, seed).unwrap();
        for _ in 0..400 {
            let action = match rng.random_range(0..10) {
                0..=5 => Action::ToggleFlag,
                6..=7 => Action::Chord,
                _ => Action::Reveal,
            };
            let cell = rng.random_range(0..STANDARD.total_cells());
            game.handle(action, Some(cell)).unwrap();

            assert_eq!(game.flags().total(), flag_cells(&game));
        }
    }
}

/// Scenario A: one mine in the far corner, the first click opens everything else.
#[test]
fn reveal_cascades_across_whole_board() {
    let mut game = preset(STANDARD.with_mines(1), &[899]);

    assert_eq!(game.handle(Action::Reveal, Some(0)).unwrap(), Outcome::Updated);

    for index in 0..899 {
        assert!(!game.cell(index).is_unknown(), "cell {index} still hidden");
    }
    assert_eq!(game.cell(899), DisplayCell::Unknown);
    for index in [868, 869, 898] {
        assert_eq!(game.cell(index), DisplayCell::Revealed(TrueValue::Clear(1)));
    }
    assert_eq!(game.state(), GameState::Running);
}

/// Scenario B: stepping on a mine shows every unflagged mine.
#[test]
fn hitting_mine_reveals_all_unflagged_mines() {
    let mut game = Game::new(STANDARD, 77).unwrap();
    game.handle(Action::Reveal, Some(0)).unwrap();
    let mines: Vec<_> = game.board().field().iter_mines().collect();
    let (flagged, target) = (mines[0], mines[1]);
    game.handle(Action::ToggleFlag, Some(flagged)).unwrap();

    assert_eq!(game.handle(Action::Reveal, Some(target)).unwrap(), Outcome::Lost);

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.ending(), Some(Ending::Detonated(target)));
    assert_eq!(game.cell(flagged), DisplayCell::Flag);
    for &mine in &mines[1..] {
        assert_eq!(game.cell(mine), DisplayCell::Revealed(TrueValue::Mine));
    }
    assert!(game.display().iter().all(|cell| !cell.is_unknown()));
}

/// Scenario C: flags alone win, no further reveals needed.
#[test]
fn flagging_all_mines_wins() {
    let mut game = Game::new(STANDARD, 3).unwrap();
    game.handle(Action::Reveal, Some(450)).unwrap();
    let mines: Vec<_> = game.board().field().iter_mines().collect();
    let (last, rest) = mines.split_last().unwrap();

    for &mine in rest {
        assert_eq!(game.handle(Action::ToggleFlag, Some(mine)).unwrap(), Outcome::Updated);
    }
    assert_eq!(game.state(), GameState::Running);
    assert_eq!(game.handle(Action::ToggleFlag, Some(*last)).unwrap(), Outcome::Won);

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.ending(), Some(Ending::AllMinesFlagged));
    assert_eq!(game.flags(), FlagCounters { correct: 150, incorrect: 0 });
    for &mine in &mines {
        assert_eq!(game.cell(mine), DisplayCell::Flag);
    }
}

#[test]
fn wrong_flag_holds_back_win_until_removed() {
    let config = STANDARD.with_mines(2);
    let mut game = preset(config, &[0, 899]);
    // a numbered first cell keeps the rest of the board hidden
    game.handle(Action::Reveal, Some(1)).unwrap();

    game.handle(Action::ToggleFlag, Some(0)).unwrap();
    game.handle(Action::ToggleFlag, Some(30)).unwrap();
    assert_eq!(game.handle(Action::ToggleFlag, Some(899)).unwrap(), Outcome::Updated);
    assert_eq!(game.state(), GameState::Running);

    assert_eq!(game.handle(Action::ToggleFlag, Some(30)).unwrap(), Outcome::Won);
    assert_eq!(game.ending(), Some(Ending::AllMinesFlagged));
}

/// Scenario D: an unsatisfied number does not chord.
#[test]
fn chord_with_wrong_flag_count_is_noop() {
    let config = STANDARD.with_mines(2);
    // two mines next to (1, 1)
    let mut game = preset(config, &[0, 2]);
    game.handle(Action::Reveal, Some(31)).unwrap();
    assert_eq!(game.cell(31), DisplayCell::Revealed(TrueValue::Clear(2)));
    game.handle(Action::ToggleFlag, Some(0)).unwrap();
    let before = game.board().clone();

    assert_eq!(game.handle(Action::Chord, Some(31)).unwrap(), Outcome::Ignored);
    assert_eq!(game.board(), &before);
}

#[test]
fn chord_only_opens_hidden_neighbors_of_satisfied_number() {
    // the far mine keeps two correct flags from winning
    let config = STANDARD.with_mines(3);
    let mut game = preset(config, &[0, 2, 899]);
    game.handle(Action::Reveal, Some(31)).unwrap();
    game.handle(Action::ToggleFlag, Some(0)).unwrap();
    game.handle(Action::ToggleFlag, Some(2)).unwrap();
    let before = game.board().clone();

    assert!(before.is_chordable(31));
    assert_eq!(game.handle(Action::Chord, Some(31)).unwrap(), Outcome::Updated);

    let geometry = config.geometry();
    for index in 0..config.total_cells() {
        if before.cell(index) != game.cell(index) {
            assert!(before.cell(index).is_unknown());
        }
    }
    for neighbor in geometry.neighbors(31) {
        assert!(!game.cell(neighbor).is_unknown());
    }
}

#[test]
fn chord_through_misplaced_flag_loses() {
    let config = STANDARD.with_mines(2);
    let mut game = preset(config, &[0, 2]);
    game.handle(Action::Reveal, Some(31)).unwrap();
    game.handle(Action::ToggleFlag, Some(0)).unwrap();
    game.handle(Action::ToggleFlag, Some(1)).unwrap();

    assert_eq!(game.handle(Action::Chord, Some(31)).unwrap(), Outcome::Lost);
    assert_eq!(game.ending(), Some(Ending::Detonated(2)));
    // the wrong flag is demoted to its number
    assert_eq!(game.cell(1), DisplayCell::Revealed(TrueValue::Clear(2)));
    assert_eq!(game.flags(), FlagCounters { correct: 1, incorrect: 0 });
}

#[test]
fn rerevealing_region_changes_nothing() {
    let mut game = preset(STANDARD.with_mines(1), &[899]);
    game.handle(Action::Reveal, Some(0)).unwrap();
    let before = game.board().clone();

    let mut board = before.clone();
    board.reveal_region(0);

    assert_eq!(board.display(), before.display());
}

#[test]
fn board_snapshot_serializes() {
    let mut game = preset(BoardConfig::new(4, 4, 1).unwrap(), &[15]);
    game.handle(Action::Reveal, Some(0)).unwrap();

    let json = serde_json::to_value(game.board()).unwrap();

    assert_eq!(json["config"]["mines"], 1);
    assert_eq!(json["flags"]["correct"], 0);
    let mut restored: Board = serde_json::from_value(json).unwrap();
    assert_eq!(&restored, game.board());

    // the restored board still cascades without its scratch set
    restored.reveal_region(0);
    assert_eq!(&restored, game.board());
}
