//! Host-owned simulation loop.
//!
//! The engine itself exposes no timing or threading; this runner decides
//! when to advance a generation and when to apply a randomized impulse.
//! Frame pacing stays with the caller.

use crate::config::Settings;
use crate::engine::Grid;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A running simulation: a grid, its settings and an injected RNG
pub struct Simulation {
    grid: Grid,
    settings: Settings,
    rng: StdRng,
    generation: u64,
}

impl Simulation {
    /// Build a simulation from config dimensions and seed it randomly
    pub fn new(settings: Settings) -> Self {
        let mut rng = rng_from_settings(&settings);
        let mut grid = Grid::new(settings.grid.width, settings.grid.height);
        grid.seed_random(&mut rng, settings.seed.probability);

        Self {
            grid,
            settings,
            rng,
            generation: 0,
        }
    }

    /// Start from an existing grid, e.g. a loaded pattern
    pub fn from_grid(settings: Settings, grid: Grid) -> Self {
        let rng = rng_from_settings(&settings);
        Self {
            grid,
            settings,
            rng,
            generation: 0,
        }
    }

    /// Advance one generation, applying an impulse on the configured cadence
    pub fn tick(&mut self) {
        self.grid.step();
        self.generation += 1;

        let impulse = &self.settings.impulse;
        if impulse.enabled && self.generation % impulse.period == 0 {
            self.grid.perturb(&mut self.rng, impulse.strength);
        }
    }

    /// Advance several generations without pausing between them
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.tick();
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

fn rng_from_settings(settings: &Settings) -> StdRng {
    match settings.seed.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn settings(width: usize, height: usize) -> Settings {
        let mut settings = Settings::default();
        settings.grid.width = width;
        settings.grid.height = height;
        settings.seed.rng_seed = Some(1234);
        settings
    }

    #[test]
    fn test_new_seeds_at_configured_density() {
        let mut config = settings(20, 20);
        config.seed.probability = 0.0;
        let sim = Simulation::new(config);
        assert!(sim.grid().is_empty());

        let mut config = settings(20, 20);
        config.seed.probability = 1.0;
        let sim = Simulation::new(config);
        assert_eq!(sim.grid().live_count(), 400);
    }

    #[test]
    fn test_runs_are_reproducible_under_fixed_seed() {
        let mut a = Simulation::new(settings(16, 16));
        let mut b = Simulation::new(settings(16, 16));

        a.run(25);
        b.run(25);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.generation(), 25);
    }

    #[test]
    fn test_tick_advances_a_loaded_pattern() {
        // Blinker: the runner must delegate stepping to the engine
        let mut grid = Grid::new(5, 5);
        for x in 1..=3 {
            grid.toggle(x, 2).unwrap();
        }
        let horizontal = grid.clone();

        let mut sim = Simulation::from_grid(settings(5, 5), grid);
        sim.tick();
        assert_eq!(sim.grid().live_cells(), vec![(2, 1), (2, 2), (2, 3)]);
        sim.tick();
        assert_eq!(sim.grid(), &horizontal);
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_impulse_fires_on_period_multiples_only() {
        // Full-strength impulse on an empty grid inverts the whole board,
        // so the live count tells us exactly when the impulse fired
        let mut config = settings(4, 4);
        config.seed.probability = 0.0;
        config.impulse.enabled = true;
        config.impulse.strength = 1.0;
        config.impulse.period = 3;

        let mut sim = Simulation::new(config);
        sim.tick();
        sim.tick();
        assert!(sim.grid().is_empty());

        sim.tick();
        assert_eq!(sim.grid().live_count(), 16);
    }

    #[test]
    fn test_disabled_impulse_never_fires() {
        let mut config = settings(6, 6);
        config.seed.probability = 0.0;
        config.impulse.enabled = false;
        config.impulse.strength = 1.0;
        config.impulse.period = 1;

        let mut sim = Simulation::new(config);
        sim.run(10);
        assert!(sim.grid().is_empty());
    }
}
