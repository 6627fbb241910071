//! Integration tests for agv-sim.

#[cfg(test)]
mod helpers {
    use agv_core::{Cell, Component, ComponentKind, FloorMap, GridSpec};

    /// 20×20 map with the reference task triple: robot (5,5), shelf (6,6),
    /// station (0,3).
    pub fn reference_map() -> FloorMap {
        let mut map = FloorMap::new("reference", GridSpec::new(20, 20));
        map.components.push(Component::new(ComponentKind::Robot, Cell::new(5, 5)));
        map.components.push(Component::new(ComponentKind::Shelf, Cell::new(6, 6)));
        map.components.push(Component::new(ComponentKind::Station, Cell::new(0, 3)));
        map
    }

    /// Consecutive-deduplicated phase sequence of a snapshot stream.
    pub fn phase_trace(snaps: &[crate::RunSnapshot]) -> Vec<crate::TaskPhase> {
        let mut trace = Vec::new();
        for s in snaps {
            if trace.last() != Some(&s.phase) {
                trace.push(s.phase);
            }
        }
        trace
    }
}

#[cfg(test)]
mod start {
    use agv_core::{Cell, Component, ComponentKind, FloorMap, GridSpec};
    use agv_path::BfsPathfinder;

    use super::helpers::reference_map;
    use crate::{RunError, TaskPhase, TaskSimulator};

    #[test]
    fn missing_component_rejected() {
        let sim = TaskSimulator::new(BfsPathfinder);
        let mut map = FloorMap::new("empty", GridSpec::new(20, 20));
        assert_eq!(
            sim.start_run(&map).err(),
            Some(RunError::MissingComponent(ComponentKind::Robot))
        );

        map.components.push(Component::new(ComponentKind::Robot, Cell::new(5, 5)));
        assert_eq!(
            sim.start_run(&map).err(),
            Some(RunError::MissingComponent(ComponentKind::Shelf))
        );

        map.components.push(Component::new(ComponentKind::Shelf, Cell::new(6, 6)));
        assert_eq!(
            sim.start_run(&map).err(),
            Some(RunError::MissingComponent(ComponentKind::Station))
        );
        // A failed start leaves the simulator free.
        assert!(!sim.is_running());
    }

    #[test]
    fn enclosed_shelf_fails_with_no_route() {
        let mut map = reference_map();
        for cell in [Cell::new(5, 6), Cell::new(7, 6), Cell::new(6, 5), Cell::new(6, 7)] {
            map.components.push(Component::new(ComponentKind::Disable, cell));
        }
        let sim = TaskSimulator::new(BfsPathfinder);
        match sim.start_run(&map) {
            Err(RunError::NoRoute { to, phase, .. }) => {
                assert_eq!(to, Cell::new(6, 6));
                assert_eq!(phase, TaskPhase::ToShelf);
            }
            other => panic!("expected NoRoute, got {other:?}"),
        }
        assert!(!sim.is_running());
    }

    #[test]
    fn second_run_rejected_while_active() {
        let sim = TaskSimulator::new(BfsPathfinder);
        let map = reference_map();

        let mut handle = sim.start_run(&map).unwrap();
        // Advance a little — the in-progress run must not be disturbed.
        let before = handle.next().unwrap();

        assert!(sim.is_running());
        assert_eq!(sim.start_run(&map).err(), Some(RunError::RunInProgress));

        // The live run continues exactly where it was.
        let after = handle.next().unwrap();
        assert_eq!(after.tick.0, before.tick.0 + 1);
    }

    #[test]
    fn dropping_handle_releases_lock() {
        let sim = TaskSimulator::new(BfsPathfinder);
        let map = reference_map();

        let handle = sim.start_run(&map).unwrap();
        assert!(sim.is_running());
        drop(handle);
        assert!(!sim.is_running());
        assert!(sim.start_run(&map).is_ok());
    }

    #[test]
    fn completion_releases_lock_before_handle_drop() {
        let sim = TaskSimulator::new(BfsPathfinder);
        let map = reference_map();

        let mut handle = sim.start_run(&map).unwrap();
        while handle.next().is_some() {}
        // Terminal state reached; the lock is free even though the exhausted
        // handle is still alive.
        assert!(!sim.is_running());
        assert!(sim.start_run(&map).is_ok());
        drop(handle);
    }
}

#[cfg(test)]
mod script {
    use agv_core::{Cell, SimTiming};
    use agv_path::BfsPathfinder;

    use super::helpers::{phase_trace, reference_map};
    use crate::{RunSnapshot, RunStatus, TaskPhase, TaskSimulator};

    fn collect_run(timing: SimTiming) -> Vec<RunSnapshot> {
        let sim = TaskSimulator::new(BfsPathfinder).timing(timing);
        let map = reference_map();
        let mut handle = sim.start_run(&map).unwrap();
        let snaps: Vec<_> = handle.by_ref().collect();
        assert_eq!(handle.status(), RunStatus::Done);
        snaps
    }

    #[test]
    fn phases_visited_in_order() {
        let snaps = collect_run(SimTiming::default());
        assert_eq!(
            phase_trace(&snaps),
            vec![
                TaskPhase::ToShelf,
                TaskPhase::PickUp,
                TaskPhase::ToStation,
                TaskPhase::WaitAtStation,
                TaskPhase::ReturnShelf,
                TaskPhase::PlaceShelf,
                TaskPhase::ReturnHome,
                TaskPhase::Done,
            ]
        );
    }

    #[test]
    fn ends_where_it_began() {
        let snaps = collect_run(SimTiming::default());
        let last = snaps.last().unwrap();
        assert_eq!(last.phase, TaskPhase::Done);
        assert_eq!(last.robot, Cell::new(5, 5), "robot back home");
        assert_eq!(last.shelf, Cell::new(6, 6), "shelf back at its original cell");
    }

    #[test]
    fn ticks_are_dense_from_zero() {
        let snaps = collect_run(SimTiming::default());
        for (i, s) in snaps.iter().enumerate() {
            assert_eq!(s.tick.0, i as u64);
        }
    }

    #[test]
    fn snapshot_count_matches_legs_and_dwells() {
        // Legs (BFS = manhattan on an open grid):
        //   to-shelf   (5,5)→(6,6): 3 cells, all emitted
        //   to-station (6,6)→(0,3): 10 cells, join cell dropped → 9
        //   return     (0,3)→(6,6): 9 after join drop
        //   home       (6,6)→(5,5): 2 after join drop
        // Dwells: 3 × 2 ticks.  Terminal Done frame: 1.
        let snaps = collect_run(SimTiming::default());
        assert_eq!(snaps.len(), 3 + 2 + 9 + 2 + 9 + 2 + 2 + 1);
    }

    #[test]
    fn dwell_lengths_follow_timing() {
        let timing = SimTiming { pickup_ticks: 4, wait_ticks: 1, place_ticks: 3, ..SimTiming::default() };
        let snaps = collect_run(timing);
        let count = |p: TaskPhase| snaps.iter().filter(|s| s.phase == p).count() as u64;
        assert_eq!(count(TaskPhase::PickUp), 4);
        assert_eq!(count(TaskPhase::WaitAtStation), 1);
        assert_eq!(count(TaskPhase::PlaceShelf), 3);
    }

    #[test]
    fn dwells_do_not_move() {
        let snaps = collect_run(SimTiming::default());
        for pair in snaps.windows(2) {
            if pair[1].phase.is_dwell() && pair[0].phase == pair[1].phase {
                assert_eq!(pair[0].robot, pair[1].robot);
                assert_eq!(pair[0].shelf, pair[1].shelf);
            }
        }
    }

    #[test]
    fn shelf_tracks_robot_while_carrying() {
        let snaps = collect_run(SimTiming::default());
        for s in &snaps {
            match s.phase {
                // From pick-up through place, the shelf rides the robot.
                TaskPhase::PickUp
                | TaskPhase::ToStation
                | TaskPhase::WaitAtStation
                | TaskPhase::ReturnShelf
                | TaskPhase::PlaceShelf => {
                    assert_eq!(s.shelf, s.robot, "carrying broken at {}", s.tick)
                }
                // On the way home the shelf stays put.
                TaskPhase::ReturnHome | TaskPhase::Done => {
                    assert_eq!(s.shelf, Cell::new(6, 6))
                }
                TaskPhase::ToShelf => assert_eq!(s.shelf, Cell::new(6, 6)),
                TaskPhase::Idle => unreachable!("Idle is never emitted"),
            }
        }
    }

    #[test]
    fn steps_are_unit_moves() {
        let snaps = collect_run(SimTiming::default());
        for pair in snaps.windows(2) {
            assert!(
                pair[0].robot.manhattan(pair[1].robot) <= 1,
                "robot jumped from {} to {}",
                pair[0].robot,
                pair[1].robot
            );
        }
    }
}

#[cfg(test)]
mod observer {
    use agv_core::Tick;
    use agv_path::BfsPathfinder;

    use super::helpers::reference_map;
    use crate::{RunObserver, RunSnapshot, TaskPhase, TaskSimulator};

    #[derive(Default)]
    struct Recorder {
        steps: usize,
        phases: Vec<TaskPhase>,
        ended_at: Option<Tick>,
    }

    impl RunObserver for Recorder {
        fn on_step(&mut self, _s: &RunSnapshot) {
            self.steps += 1;
        }
        fn on_phase_change(&mut self, phase: TaskPhase, _tick: Tick) {
            self.phases.push(phase);
        }
        fn on_run_end(&mut self, final_tick: Tick) {
            self.ended_at = Some(final_tick);
        }
    }

    #[test]
    fn drive_reports_every_step_and_phase() {
        let sim = TaskSimulator::new(BfsPathfinder);
        let handle = sim.start_run(&reference_map()).unwrap();

        let mut rec = Recorder::default();
        handle.drive(&mut rec);

        assert_eq!(rec.steps, 30);
        assert_eq!(rec.phases.len(), 8, "one change per phase incl. Done");
        assert_eq!(rec.phases.last(), Some(&TaskPhase::Done));
        assert_eq!(rec.ended_at, Some(Tick(29)));
    }
}
