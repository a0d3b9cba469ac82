//! Unit tests for bcast-core primitives.

#[cfg(test)]
mod agent_id {
    use crate::AgentId;

    #[test]
    fn source_is_zero() {
        assert!(AgentId::SOURCE.is_source());
        assert!(!AgentId(1).is_source());
    }

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod pos {
    use crate::Position;

    #[test]
    fn zero_distance() {
        let p = Position::new(3.5, 7.25);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn wrap_reduces_into_domain() {
        let p = Position::new(53.0, -1.0).wrap(50.0, 50.0);
        assert!((p.x - 3.0).abs() < 1e-12);
        assert!((p.y - 49.0).abs() < 1e-12);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(10.0, 20.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Position::new(5.0, 10.0));
    }
}

#[cfg(test)]
mod round {
    use crate::Round;

    #[test]
    fn arithmetic() {
        assert_eq!(Round(3).next(), Round(4));
        assert_eq!(Round(3) + 2, Round(5));
        assert_eq!(Round(10).since(Round(4)), 6);
    }

    #[test]
    fn display() {
        assert_eq!(Round(12).to_string(), "R12");
    }
}

#[cfg(test)]
mod metric {
    use crate::{Position, Proximity};

    const W: f64 = 50.0;
    const H: f64 = 50.0;

    #[test]
    fn bounded_matches_euclidean() {
        let a = Position::new(1.0, 1.0);
        let b = Position::new(4.0, 5.0);
        assert_eq!(Proximity::Bounded.distance(a, b, W, H), a.distance(b));
    }

    #[test]
    fn symmetry_both_metrics() {
        let a = Position::new(2.0, 48.0);
        let b = Position::new(49.0, 1.0);
        for m in [Proximity::Bounded, Proximity::Toroidal] {
            assert_eq!(m.distance(a, b, W, H), m.distance(b, a, W, H));
        }
    }

    #[test]
    fn toroidal_wraps_across_edges() {
        // x=1 vs x=48 on a width-50 torus: 3 apart the short way round,
        // 47 apart on the plane.
        let a = Position::new(1.0, 0.0);
        let b = Position::new(48.0, 0.0);
        let d = Proximity::Toroidal.distance(a, b, W, H);
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn toroidal_never_exceeds_bounded() {
        let pairs = [
            (Position::new(0.0, 0.0), Position::new(49.0, 49.0)),
            (Position::new(10.0, 10.0), Position::new(12.0, 14.0)),
            (Position::new(25.0, 0.5), Position::new(25.0, 49.5)),
        ];
        for (a, b) in pairs {
            assert!(
                Proximity::Toroidal.distance(a, b, W, H)
                    <= Proximity::Bounded.distance(a, b, W, H) + 1e-12
            );
        }
    }

    #[test]
    fn toroidal_reduces_out_of_domain_coords() {
        // Unwrapped windowed-walk coordinates must be folded in first.
        let a = Position::new(51.0, -2.0);
        let b = Position::new(1.0, 48.0);
        assert!(Proximity::Toroidal.distance(a, b, W, H) < 1e-12);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AgentRng::new(99, AgentId(3));
        let mut b = AgentRng::new(99, AgentId(3));
        for _ in 0..50 {
            let x: f64 = a.gen_range(0.0..50.0);
            let y: f64 = b.gen_range(0.0..50.0);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn different_agents_diverge() {
        let mut a = AgentRng::new(99, AgentId(0));
        let mut b = AgentRng::new(99, AgentId(1));
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..1_000_000)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..1_000_000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn zero_weight_never_chosen() {
        let mut rng = AgentRng::new(7, AgentId(2));
        let items = ["a", "b", "c"];
        let weights = [0.0, 1.0, 1.0];
        for _ in 0..200 {
            let pick = rng.choose_weighted(&items, &weights).unwrap();
            assert_ne!(*pick, "a");
        }
    }

    #[test]
    fn choose_weighted_rejects_bad_input() {
        let mut rng = AgentRng::new(7, AgentId(2));
        assert!(rng.choose_weighted::<u8>(&[], &[]).is_none());
        assert!(rng.choose_weighted(&[1, 2], &[1.0]).is_none());
        assert!(rng.choose_weighted(&[1, 2], &[0.0, 0.0]).is_none());
    }

    #[test]
    fn child_seeds_reproducible() {
        let mut a = SimRng::new(5);
        let mut b = SimRng::new(5);
        for i in 0..10 {
            assert_eq!(a.child_seed(i), b.child_seed(i));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn defaults_validate() {
        assert!(SimConfig::new(50.0, 50.0, 25, 42).validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(SimConfig::new(0.0, 50.0, 25, 42).validate().is_err());
        assert!(SimConfig::new(50.0, -1.0, 25, 42).validate().is_err());
        assert!(SimConfig::new(50.0, 50.0, 1, 42).validate().is_err());

        let mut cfg = SimConfig::new(50.0, 50.0, 25, 42);
        cfg.round_cap = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::new(50.0, 50.0, 25, 42);
        cfg.broadcast_range = 0.0;
        assert!(cfg.validate().is_err());
    }
}
