//! Population-based search over raw board snapshots.
//!
//! Unlike the other engines this one does not respect move legality: a
//! game state's cells are treated as a chromosome, mutated and recombined
//! freely. Crossover performs no repair pass, so offspring may carry
//! rule-inconsistent piece totals; fitness is the plain mill differential,
//! which ranks such boards anyway.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    evaluation,
    morris::{Cell, GameState},
    types::BOARD_SIZE,
};

const CELL_CHOICES: [Cell; 3] = [Cell::X, Cell::O, Cell::Empty];

/// Genetic search over board snapshots.
#[derive(Debug, Clone)]
pub struct GeneticSearch {
    population_size: usize,
    mutation_rate: f64,
    generations: usize,
    rng: StdRng,
}

impl GeneticSearch {
    /// Create a new search.
    ///
    /// # Arguments
    ///
    /// * `population_size` - Members per generation
    /// * `mutation_rate` - Per-cell probability of a random redraw
    /// * `generations` - Fixed number of evolution rounds (no early stop)
    pub fn new(population_size: usize, mutation_rate: f64, generations: usize) -> Self {
        Self {
            population_size,
            mutation_rate,
            generations,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Seed the search RNG for deterministic runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Fitness of a board snapshot: mills(X) minus mills(O).
    pub fn fitness(state: &GameState) -> i32 {
        evaluation::mill_differential(state)
    }

    /// Evolve a population seeded from `seed` and return the fittest
    /// member of the final generation (the first one on ties).
    pub fn evolve(&mut self, seed: &GameState) -> GameState {
        let mut population = self.initialize_population(seed);

        for _ in 0..self.generations {
            let selected = Self::selection(population);
            if selected.is_empty() {
                // Population of one: nothing to recombine
                population = vec![seed.clone()];
                break;
            }
            population = self.repopulate(&selected);
        }

        fittest(population).unwrap_or_else(|| seed.clone())
    }

    /// N identical clones of the seed state.
    fn initialize_population(&self, seed: &GameState) -> Vec<GameState> {
        vec![seed.clone(); self.population_size]
    }

    /// Sort descending by fitness and keep the top half. An odd-sized
    /// population loses its extra member to the cut.
    fn selection(mut population: Vec<GameState>) -> Vec<GameState> {
        population.sort_by_key(|state| std::cmp::Reverse(Self::fitness(state)));
        population.truncate(population.len() / 2);
        population
    }

    /// Refill the population to full size via pairwise crossover and
    /// mutation, wrapping to the first member when the selected set has
    /// odd size.
    fn repopulate(&mut self, selected: &[GameState]) -> Vec<GameState> {
        let mut next = Vec::with_capacity(self.population_size);

        while next.len() < self.population_size {
            for i in (0..selected.len()).step_by(2) {
                let parent1 = &selected[i];
                let parent2 = selected.get(i + 1).unwrap_or(&selected[0]);

                for (first, second) in [(parent1, parent2), (parent2, parent1)] {
                    if next.len() >= self.population_size {
                        break;
                    }
                    let mut child = self.crossover(first, second);
                    self.mutate(&mut child);
                    next.push(child);
                }

                if next.len() >= self.population_size {
                    break;
                }
            }
        }

        next
    }

    /// Single-point crossover on the raw cells: the child takes the first
    /// parent's cells up to a random cut and the second parent's from the
    /// cut onward.
    fn crossover(&mut self, parent1: &GameState, parent2: &GameState) -> GameState {
        let cut = self.rng.random_range(0..BOARD_SIZE);
        let mut child = parent1.clone();
        child.cells[cut..].copy_from_slice(&parent2.cells[cut..]);
        child
    }

    /// Redraw each cell independently with probability `mutation_rate`.
    fn mutate(&mut self, state: &mut GameState) {
        for cell in state.cells.iter_mut() {
            if self.rng.random::<f64>() < self.mutation_rate {
                *cell = CELL_CHOICES[self.rng.random_range(0..CELL_CHOICES.len())];
            }
        }
    }
}

/// First member attaining the maximum fitness.
fn fittest(population: Vec<GameState>) -> Option<GameState> {
    population.into_iter().reduce(|best, candidate| {
        if GeneticSearch::fitness(&candidate) > GeneticSearch::fitness(&best) {
            candidate
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_population_is_all_clones() {
        let search = GeneticSearch::new(5, 0.0, 1);
        let seed = GameState::new();
        let population = search.initialize_population(&seed);
        assert_eq!(population.len(), 5);
        assert!(population.iter().all(|member| member == &seed));
    }

    #[test]
    fn test_selection_keeps_top_half() {
        let mut strong = GameState::new();
        for idx in [0, 1, 2] {
            strong.cells[idx] = Cell::X;
        }
        let weak = GameState::new();

        let population = vec![weak.clone(), strong.clone(), weak.clone(), strong.clone()];
        let selected = GeneticSearch::selection(population);

        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|member| member == &strong));
    }

    #[test]
    fn test_selection_drops_odd_extra() {
        let population = vec![GameState::new(); 5];
        assert_eq!(GeneticSearch::selection(population).len(), 2);
    }

    #[test]
    fn test_crossover_concatenates_parent_cells() {
        let mut search = GeneticSearch::new(2, 0.0, 1).with_seed(9);
        let mut all_x = GameState::new();
        all_x.cells = [Cell::X; BOARD_SIZE];
        let mut all_o = GameState::new();
        all_o.cells = [Cell::O; BOARD_SIZE];

        let child = search.crossover(&all_x, &all_o);
        let boundary = child
            .cells
            .iter()
            .position(|&cell| cell == Cell::O)
            .unwrap_or(BOARD_SIZE);
        assert!(child.cells[..boundary].iter().all(|&c| c == Cell::X));
        assert!(child.cells[boundary..].iter().all(|&c| c == Cell::O));
    }

    #[test]
    fn test_zero_mutation_rate_changes_nothing() {
        let mut search = GeneticSearch::new(2, 0.0, 1).with_seed(1);
        let mut state = GameState::new();
        state.cells[3] = Cell::X;
        let before = state.clone();
        search.mutate(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_evolve_without_mutation_preserves_seed_fitness() {
        let mut search = GeneticSearch::new(4, 0.0, 3).with_seed(17);
        let mut seed = GameState::new();
        for idx in [0, 1, 2] {
            seed.cells[idx] = Cell::X;
        }

        let best = search.evolve(&seed);
        assert_eq!(GeneticSearch::fitness(&best), GeneticSearch::fitness(&seed));
    }
}
