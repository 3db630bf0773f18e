#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::{
        board::{Board, Cell},
        error::MoveError,
        game::{ConnectFour, GameStatus, Move, Variant},
        player::Player,
        HEIGHT, WIDTH,
    };

    fn classic_with_rows(rows: &[[u8; WIDTH]; HEIGHT]) -> Result<ConnectFour> {
        Ok(ConnectFour::with_board(
            Variant::Classic,
            Board::from_rows(rows)?,
            Player::One,
        ))
    }

    #[test]
    pub fn two_drops_leave_two_coins() -> Result<()> {
        let mut game = ConnectFour::new(Variant::Classic);

        game.drop_move(0)?;
        game.change_turns();
        game.drop_move(1)?;

        let mut expected = [[0; WIDTH]; HEIGHT];
        expected[0][0] = 1;
        expected[0][1] = 2;
        assert_eq!(game.board().to_numbers(), expected);
        Ok(())
    }

    #[test]
    pub fn coin_count_matches_successful_drops() -> Result<()> {
        let mut game = ConnectFour::new(Variant::Classic);
        let mut drops = 0;

        for &column in [0, 1, 2, 3, 4, 5, 6].iter().cycle().take(WIDTH * HEIGHT + 7) {
            match game.drop_move(column) {
                Ok(()) => drops += 1,
                Err(MoveError::IllegalMove { column: rejected }) => assert_eq!(rejected, column),
                Err(err) => return Err(err.into()),
            }
            game.change_turns();
            assert_eq!(game.board().coin_count(), drops);
        }

        assert_eq!(drops, WIDTH * HEIGHT);
        assert!(game.is_board_full());
        Ok(())
    }

    #[test]
    pub fn vertical_win() -> Result<()> {
        let mut game = classic_with_rows(&[
            [1, 2, 0, 0, 0, 0, 0],
            [1, 2, 0, 0, 0, 0, 0],
            [1, 2, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
        ])?;

        assert!(!game.is_winning(Player::One));
        game.drop_move(0)?;
        assert!(game.is_winning(Player::One));
        assert!(!game.is_winning(Player::Two));
        Ok(())
    }

    #[test]
    pub fn horizontal_win() -> Result<()> {
        let mut game = classic_with_rows(&[
            [1, 1, 1, 0, 0, 0, 0],
            [2, 2, 2, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
        ])?;

        game.drop_move(3)?;
        assert!(game.is_winning(Player::One));
        Ok(())
    }

    #[test]
    pub fn diagonal_win() -> Result<()> {
        let mut game = classic_with_rows(&[
            [1, 2, 1, 2, 0, 0, 0],
            [0, 1, 2, 2, 0, 0, 0],
            [0, 0, 1, 1, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
        ])?;

        game.drop_move(3)?;
        assert!(game.is_winning(Player::One));
        Ok(())
    }

    #[test]
    pub fn falling_diagonal_win() -> Result<()> {
        let mut game = ConnectFour::with_board(
            Variant::Classic,
            Board::from_rows(&[
                [0, 0, 0, 2, 1, 1, 1],
                [0, 0, 0, 2, 2, 1, 0],
                [0, 0, 0, 1, 1, 0, 0],
                [0, 0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0, 0],
            ])?,
            Player::One,
        );

        assert!(!game.is_winning(Player::One));
        game.drop_move(3)?;
        assert!(game.is_winning(Player::One));
        Ok(())
    }

    #[test]
    pub fn tied_board_is_full() -> Result<()> {
        let game = classic_with_rows(&[
            [2, 2, 2, 1, 2, 2, 2],
            [1, 1, 1, 2, 1, 1, 1],
            [2, 2, 2, 1, 2, 2, 2],
            [1, 1, 1, 2, 1, 1, 1],
            [2, 2, 2, 1, 2, 2, 2],
            [1, 1, 1, 2, 1, 1, 1],
        ])?;

        assert!(game.is_board_full());
        assert!(!game.is_winning(Player::One));
        assert!(!game.is_winning(Player::Two));
        Ok(())
    }

    #[test]
    pub fn longer_than_four_wins() -> Result<()> {
        let mut game = classic_with_rows(&[
            [1, 1, 1, 0, 1, 1, 1],
            [2, 2, 2, 0, 2, 2, 2],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
        ])?;

        assert!(!game.is_winning(Player::One));
        game.drop_move(3)?;
        assert_eq!(game.board().to_numbers()[0], [1; WIDTH]);
        assert!(game.is_winning(Player::One));
        Ok(())
    }

    #[test]
    pub fn drop_on_full_column_fails() -> Result<()> {
        let mut game = classic_with_rows(&[
            [2, 0, 0, 0, 0, 0, 0],
            [1, 0, 0, 0, 0, 0, 0],
            [2, 0, 0, 0, 0, 0, 0],
            [1, 0, 0, 0, 0, 0, 0],
            [2, 0, 0, 0, 0, 0, 0],
            [1, 0, 0, 0, 0, 0, 0],
        ])?;
        let before = *game.board();

        assert!(!game.is_valid_drop(0));
        assert_eq!(game.drop_move(0), Err(MoveError::IllegalMove { column: 0 }));
        assert_eq!(*game.board(), before);
        assert_eq!(game.play(Move::Drop(0)), Err(MoveError::IllegalMove { column: 0 }));
        assert_eq!(game.current_player(), Player::One);
        Ok(())
    }

    #[test]
    pub fn popout_pop_compacts_column() -> Result<()> {
        let mut game = ConnectFour::from_moves(Variant::PopOut, "11")?;
        // player 1 owns the bottom coin of column 1, player 2 sits on top

        assert!(game.is_valid_pop(0));
        game.pop_move(0)?;
        assert_eq!(game.board().get(0, 0), Cell::PlayerTwo);
        assert!((1..HEIGHT).all(|row| game.board().get(row, 0).is_empty()));

        // now the bottom coin belongs to player 2
        assert!(!game.is_valid_pop(0));
        assert_eq!(game.pop_move(0), Err(MoveError::IllegalMove { column: 0 }));
        Ok(())
    }

    #[test]
    pub fn full_popout_game() -> Result<()> {
        // player 2 pops one of their own coins from under the other stack
        let mut game = ConnectFour::from_moves(Variant::PopOut, "12121")?;
        assert_eq!(game.current_player(), Player::Two);
        assert_eq!(game.play(Move::Drop(6))?, GameStatus::Playing);
        assert_eq!(game.play(Move::Drop(4))?, GameStatus::Playing);
        assert_eq!(game.play(Move::Pop(1))?, GameStatus::Playing);

        game.reset();
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.board().coin_count(), 0);
        assert_eq!(game.variant(), Variant::PopOut);
        Ok(())
    }
}
