//! Integration tests for bcast-sim.

use std::sync::Arc;

use bcast_core::{Position, Round, SimConfig};
use bcast_mobility::{GRID_DIM, MobilityModel, ProbabilityGrid};

use crate::{NoopObserver, Outcome, RoundObserver, SimBuilder, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn small_config(agents: usize, seed: u64) -> SimConfig {
    let mut cfg = SimConfig::new(10.0, 10.0, agents, seed);
    cfg.warmup_rounds = 20;
    cfg.allow_exceeding_cap = true;
    cfg
}

fn point_mass_grid(cell: usize) -> Arc<ProbabilityGrid> {
    let mut weights = vec![0.0; GRID_DIM * GRID_DIM];
    weights[cell] = 1.0;
    Arc::new(ProbabilityGrid::from_weights(weights).unwrap())
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully_with_defaults() {
        let sim = SimBuilder::new(small_config(5, 42), MobilityModel::RandomWaypoint)
            .build()
            .unwrap();
        assert_eq!(sim.agents().len(), 5);
        assert!(sim.agents()[0].id().is_source());
        assert!(sim.agents()[0].is_informed());
        assert!(sim.agents()[1..].iter().all(|a| !a.is_informed()));
    }

    #[test]
    fn degenerate_config_errors() {
        let cfg = SimConfig::new(10.0, 10.0, 1, 42); // lone source
        assert!(SimBuilder::new(cfg, MobilityModel::RandomWaypoint).build().is_err());

        let cfg = SimConfig::new(-5.0, 10.0, 5, 42);
        assert!(SimBuilder::new(cfg, MobilityModel::RandomWaypoint).build().is_err());
    }

    #[test]
    fn model_count_mismatch_errors() {
        let models = vec![MobilityModel::RandomWaypoint; 3]; // wrong length
        let result = SimBuilder::new(small_config(5, 42), MobilityModel::RandomWaypoint)
            .models(models)
            .build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { .. })));
    }

    #[test]
    fn mixed_families_error() {
        // Different advance algorithm.
        let mut models = vec![MobilityModel::RandomWaypoint; 5];
        models[3] = MobilityModel::GridWalk;
        let result = SimBuilder::new(small_config(5, 42), MobilityModel::RandomWaypoint)
            .models(models)
            .build();
        assert!(matches!(result, Err(SimError::MixedFamilies(_))));

        // Different proximity metric.
        let mut models = vec![MobilityModel::RandomWaypoint; 5];
        models[1] = MobilityModel::WindowedWaypoint;
        let result = SimBuilder::new(small_config(5, 42), MobilityModel::RandomWaypoint)
            .models(models)
            .build();
        assert!(matches!(result, Err(SimError::MixedFamilies(_))));
    }

    #[test]
    fn probability_grid_groups_may_differ() {
        // Two groups with different grids are fine: same family throughout.
        let a = MobilityModel::ProbabilityGrid(point_mass_grid(0));
        let b = MobilityModel::ProbabilityGrid(point_mass_grid(9_999));
        let models = vec![a.clone(), a.clone(), b.clone(), b.clone()];
        let sim = SimBuilder::new(small_config(4, 42), a)
            .models(models)
            .build()
            .unwrap();
        assert_eq!(sim.agents().len(), 4);
    }

    #[test]
    fn metric_follows_model_family() {
        use bcast_core::Proximity;
        let sim = SimBuilder::new(small_config(3, 1), MobilityModel::TorusGridWalk)
            .build()
            .unwrap();
        assert_eq!(sim.metric(), Proximity::Toroidal);
        let sim = SimBuilder::new(small_config(3, 1), MobilityModel::RandomDirection)
            .build()
            .unwrap();
        assert_eq!(sim.metric(), Proximity::Bounded);
    }
}

// ── Full runs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    /// The reference scenario: 50×50 domain, 25 random-waypoint agents,
    /// 100 warm-up rounds, no effective round cap, source fixed at (0, 0).
    #[test]
    fn reference_rwp_scenario_reaches_everyone() {
        let mut cfg = SimConfig::new(50.0, 50.0, 25, 42);
        cfg.allow_exceeding_cap = true;
        let mut sim = SimBuilder::new(cfg, MobilityModel::RandomWaypoint)
            .source_spawn(Position::new(0.0, 0.0))
            .build()
            .unwrap();

        let outcome = sim.run(&mut NoopObserver).unwrap();
        assert!(outcome.is_complete());

        let series = sim.informed_series();
        assert_eq!(series[0], 1);
        assert_eq!(*series.last().unwrap(), 25);
        assert!(series.windows(2).all(|w| w[1] >= w[0]), "series not monotone");
        assert_eq!(outcome.rounds() as usize, series.len() - 1);

        // Everyone is marked, exactly once, within the run.
        for agent in sim.agents() {
            let at = agent.infected_at().expect("agent left uninformed");
            assert!(at.0 <= outcome.rounds());
        }
        assert_eq!(sim.agents()[0].infected_at(), Some(Round::ZERO));
    }

    #[test]
    fn identical_seeds_reproduce_bit_identical_runs() {
        let build = || {
            SimBuilder::new(small_config(6, 777), MobilityModel::RandomWaypoint)
                .build()
                .unwrap()
        };
        let mut a = build();
        let mut b = build();
        let oa = a.run(&mut NoopObserver).unwrap();
        let ob = b.run(&mut NoopObserver).unwrap();

        assert_eq!(oa, ob);
        assert_eq!(a.informed_series(), b.informed_series());
        for (x, y) in a.agents().iter().zip(b.agents()) {
            assert_eq!(x.course(), y.course());
            assert_eq!(x.targets(), y.targets());
            assert_eq!(x.infected_at(), y.infected_at());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimBuilder::new(small_config(6, 1), MobilityModel::RandomWaypoint)
            .build()
            .unwrap();
        let mut b = SimBuilder::new(small_config(6, 2), MobilityModel::RandomWaypoint)
            .build()
            .unwrap();
        a.run(&mut NoopObserver).unwrap();
        b.run(&mut NoopObserver).unwrap();
        assert_ne!(a.agents()[1].course()[0], b.agents()[1].course()[0]);
    }

    #[test]
    fn hitting_the_round_cap_times_out() {
        // Two agents on a huge plane with a 2-round cap: the peer cannot
        // plausibly reach the frozen source in time.
        let mut cfg = SimConfig::new(500.0, 500.0, 2, 42);
        cfg.round_cap = 2;
        let mut sim = SimBuilder::new(cfg, MobilityModel::RandomWaypoint)
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(outcome, Outcome::TimedOut { rounds: 2, informed: 1 });
        assert_eq!(sim.informed_series().len(), 3); // round 0 + 2 rounds
    }

    #[test]
    fn every_family_terminates_on_a_small_domain() {
        let families = [
            MobilityModel::RandomWaypoint,
            MobilityModel::WindowedWaypoint,
            MobilityModel::RandomDirection,
            MobilityModel::GridWalk,
            MobilityModel::TorusGridWalk,
        ];
        for model in families {
            let name = model.name();
            let mut sim = SimBuilder::new(small_config(5, 7), model).build().unwrap();
            let outcome = sim.run(&mut NoopObserver).unwrap();
            assert!(outcome.is_complete(), "{name} did not propagate fully");
        }
    }

    #[test]
    fn point_mass_grid_herds_everyone_to_the_source() {
        // All waypoint mass on cell 0 → (0, 10) on a 10×10 domain.  Spawning
        // the source there guarantees every peer walks into range.
        let model = MobilityModel::ProbabilityGrid(point_mass_grid(0));
        let mut sim = SimBuilder::new(small_config(5, 3), model)
            .source_spawn(Position::new(0.0, 10.0))
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver).unwrap();
        assert!(outcome.is_complete());
    }

    #[test]
    fn histories_are_truncated_after_warmup() {
        // Grid walks append exactly one position per round, so after
        // truncation every course is exactly rounds + 1 long.  Without
        // truncation the peers would carry their warm-up history too.
        let mut sim = SimBuilder::new(small_config(6, 11), MobilityModel::GridWalk)
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver).unwrap();
        for agent in sim.agents() {
            assert_eq!(agent.course().len() as u32, outcome.rounds() + 1, "{}", agent.id());
        }
    }

    #[test]
    fn neighbor_fraction_series_tracks_rounds_when_enabled() {
        let mut cfg = small_config(4, 5);
        cfg.record_neighbor_fraction = true;
        let mut sim = SimBuilder::new(cfg, MobilityModel::RandomWaypoint)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.neighbor_series().len(), sim.informed_series().len());
        for &f in sim.neighbor_series() {
            assert!((0.0..=1.0).contains(&f), "fraction out of range: {f}");
        }
    }

    #[test]
    fn neighbor_fraction_disabled_by_default() {
        let mut sim = SimBuilder::new(small_config(4, 5), MobilityModel::RandomWaypoint)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.neighbor_series().is_empty());
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct CountingObserver {
        warmups: u32,
        rounds: u32,
        last_informed: u32,
        finished: Option<Outcome>,
    }

    impl RoundObserver for CountingObserver {
        fn on_warmup_end(&mut self) {
            self.warmups += 1;
        }
        fn on_round_end(&mut self, _round: Round, informed: u32) {
            assert!(informed >= self.last_informed, "informed count regressed");
            self.last_informed = informed;
            self.rounds += 1;
        }
        fn on_run_end(&mut self, outcome: &Outcome) {
            self.finished = Some(*outcome);
        }
    }

    #[test]
    fn hooks_fire_in_order_and_counts_match() {
        let mut sim = SimBuilder::new(small_config(5, 21), MobilityModel::RandomWaypoint)
            .build()
            .unwrap();
        let mut obs = CountingObserver::default();
        let outcome = sim.run(&mut obs).unwrap();

        assert_eq!(obs.warmups, 1);
        assert_eq!(obs.rounds, outcome.rounds());
        assert_eq!(obs.finished, Some(outcome));
        assert_eq!(obs.last_informed, 5);
    }
}
