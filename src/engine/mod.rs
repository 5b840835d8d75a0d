mod count;

pub use self::count::{NeighborCounts, count_neighbors};
use crate::{Board, Cell, Error, Rule, SimConfig};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Creates a board whose interior cells are each alive with `live_probability`
///
/// Cells are drawn in row-major order from a [`StdRng`] seeded with `seed`,
/// so the same arguments always produce the same board.
pub fn initialize(
    width: usize,
    height: usize,
    live_probability: f64,
    seed: u64,
) -> Result<Board, Error> {
    check_probability(live_probability)?;
    let mut board = Board::new(width, height)?;

    let mut rng = StdRng::seed_from_u64(seed);
    for pos in board.interior() {
        let cell = Cell::from(rng.random_bool(live_probability));
        board.set(pos, cell)?;
    }
    Ok(board)
}

pub(crate) fn check_probability(live_probability: f64) -> Result<(), Error> {
    if (0.0..=1.0).contains(&live_probability) {
        Ok(())
    } else {
        Err(Error::LiveProbability(live_probability))
    }
}

/// Computes the generation following `board`
///
/// Allocates a fresh board; [`Simulation`] reuses its buffers instead.
pub fn step(board: &Board, rule: &Rule) -> Board {
    let counts = count_neighbors(board);
    let mut next = board.clone();
    evaluate(board, &counts, rule, &mut next);
    next
}

/// Writes the next state of every interior cell of `current` into `next`
///
/// `counts` must already hold the complete counts of `current`.
fn evaluate(current: &Board, counts: &NeighborCounts, rule: &Rule, next: &mut Board) {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    let width = current.width();
    let rows = current
        .cells()
        .chunks(width)
        .zip(counts.as_slice().chunks(width))
        .zip(next.cells_mut().chunks_mut(width));
    let last_row = current.height() - 1;
    for (y, ((cells, row_counts), next_cells)) in rows.enumerate() {
        if y == 0 || y == last_row {
            continue;
        }
        for x in 1..width - 1 {
            next_cells[x] = rule.next_state(cells[x], row_counts[x]);
        }
    }
}

/// A running simulation of a bounded board under a fixed rule
///
/// Holds two boards and swaps them after every generation: the current board
/// is only read while the next one is written, and counting is finished for
/// the whole board before evaluation starts.
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Board,
    next: Board,
    counts: NeighborCounts,
    rule: Rule,
    generation: u64,
}

impl Simulation {
    /// Validates `config` and seeds a random board from it
    pub fn new(config: &SimConfig) -> Result<Self, Error> {
        config.validate()?;
        let board = initialize(
            config.width,
            config.height,
            config.live_probability,
            config.seed,
        )?;
        log::debug!(
            "seeded {}x{} board with {} live cells (p={}, seed={}), rule {}",
            config.width,
            config.height,
            board.alive_count(),
            config.live_probability,
            config.seed,
            config.rule
        );
        Ok(Self::from_board(board, config.rule))
    }

    pub fn from_board(board: Board, rule: Rule) -> Self {
        let counts = NeighborCounts::new(board.width(), board.height());
        // border cells are never written, so the stale copy only has to start
        // out with a dead border
        let next = board.clone();
        Self {
            current: board,
            next,
            counts,
            rule,
            generation: 0,
        }
    }

    pub fn step(&mut self) {
        self.counts.recount(&self.current);
        self.advance();
    }

    /// Like [`Simulation::step`], counting the rows on the rayon thread pool
    pub fn step_parallel(&mut self) {
        self.counts.recount_parallel(&self.current);
        self.advance();
    }

    fn advance(&mut self) {
        evaluate(&self.current, &self.counts, &self.rule, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        log::trace!(
            "generation {}: {} alive",
            self.generation,
            self.current.alive_count()
        );
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.current
    }
    #[inline]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
    #[inline]
    pub fn alive_count(&self) -> usize {
        self.current.alive_count()
    }

    #[inline]
    pub fn take(self) -> Board {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pos2, rule::NAMED_RULES};

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2::new(x, y)
    }

    fn border_is_dead(board: &Board) -> bool {
        let (w, h) = (board.width() as i32, board.height() as i32);
        (0..w).all(|x| !board.is_alive(pos(x, 0)) && !board.is_alive(pos(x, h - 1)))
            && (0..h).all(|y| !board.is_alive(pos(0, y)) && !board.is_alive(pos(w - 1, y)))
    }

    #[test]
    fn initialize_is_deterministic() {
        let a = initialize(64, 48, 0.3, 42).expect("board a");
        let b = initialize(64, 48, 0.3, 42).expect("board b");
        let c = initialize(64, 48, 0.3, 43).expect("board c");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn initialize_leaves_border_dead() {
        let board = initialize(10, 7, 1.0, 0).expect("full board");

        assert!(border_is_dead(&board));
        assert_eq!(board.alive_count(), 8 * 5);
    }

    #[test]
    fn initialize_rejects_bad_config() {
        assert_eq!(
            initialize(10, 10, 1.5, 0),
            Err(Error::LiveProbability(1.5))
        );
        assert!(initialize(10, 10, -0.1, 0).is_err());
        assert!(initialize(10, 10, f64::NAN, 0).is_err());
        assert!(matches!(
            initialize(2, 10, 0.5, 0),
            Err(Error::GridTooSmall { .. })
        ));
    }

    #[test]
    fn blinker_oscillates() {
        let vertical = Board::with_alive(5, 5, &[pos(2, 1), pos(2, 2), pos(2, 3)]).expect("v");
        let horizontal = Board::with_alive(5, 5, &[pos(1, 2), pos(2, 2), pos(3, 2)]).expect("h");

        let once = step(&vertical, &Rule::CONWAY);
        assert_eq!(once, horizontal);
        assert_eq!(step(&once, &Rule::CONWAY), vertical);
    }

    #[test]
    fn empty_birth_keeps_dead_board_dead() {
        let dead = Board::new(12, 9).expect("board");
        for (name, rule) in NAMED_RULES.iter().chain(&[("custom", "B/S012345678")]) {
            let rule = Rule::parse(rule);
            if !rule.birth.is_empty() {
                continue;
            }
            assert_eq!(step(&dead, &rule), dead, "rule {}", name);
        }
        assert_eq!(step(&dead, &Rule::parse("B3S23")), dead);
    }

    #[test]
    fn border_stays_dead_under_explosive_rules() {
        let board = initialize(20, 15, 0.5, 9).expect("board");
        for rule in ["B1357/S1357", "B12345678/S012345678", "B1/S"] {
            let mut sim = Simulation::from_board(board.clone(), Rule::parse(rule));
            for _ in 0..10 {
                sim.step();
                assert!(border_is_dead(sim.board()), "rule {}", rule);
            }
        }
    }

    #[test]
    fn simulation_replays_pure_step() {
        let board = initialize(30, 20, 0.35, 5).expect("board");
        let rule = Rule::parse("B36/S23");

        let mut sim = Simulation::from_board(board.clone(), rule);
        let mut expected = board;
        for generation in 1..=12 {
            sim.step();
            expected = step(&expected, &rule);
            assert_eq!(sim.board(), &expected, "generation {}", generation);
        }
        assert_eq!(sim.generation(), 12);
    }

    #[test]
    fn parallel_step_matches_serial() {
        let config = SimConfig {
            width: 50,
            height: 40,
            live_probability: 0.4,
            seed: 11,
            ..SimConfig::default()
        };
        let mut serial = Simulation::new(&config).expect("serial");
        let mut parallel = Simulation::new(&config).expect("parallel");
        for _ in 0..8 {
            serial.step();
            parallel.step_parallel();
        }

        assert_eq!(serial.board(), parallel.board());
    }

    #[test]
    fn simulation_rejects_invalid_config() {
        let config = SimConfig {
            width: 1,
            ..SimConfig::default()
        };

        assert!(Simulation::new(&config).is_err());
    }
}
