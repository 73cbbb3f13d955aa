use cubemaster_core::{Cube, Move, MoveSet};
use cubemaster_prefs::InterpolateFn;
use proptest::prelude::*;
use web_time::Duration;

use crate::*;

#[derive(Debug, Clone)]
enum Request {
    Move(Move),
    Scramble,
    Reset,
    Step(u64),
}

fn arbitrary_request() -> impl Strategy<Value = Request> {
    prop_oneof![
        4 => prop::sample::select(MoveSet::FacesAndSlices.moves()).prop_map(Request::Move),
        1 => Just(Request::Scramble),
        1 => Just(Request::Reset),
        4 => (0_u64..120).prop_map(Request::Step),
    ]
}

fn simulation() -> CubeSimulation {
    CubeSimulation::new(
        AnimationPolicy::Interpolated {
            manual: Duration::from_millis(100),
            scramble: Duration::from_millis(20),
            interpolation: InterpolateFn::Cubic,
        },
        MoveSet::FacesAndSlices,
        5,
    )
}

proptest! {
    #[test]
    fn proptest_history_replays_to_cube(requests in prop::collection::vec(arbitrary_request(), 0..60)) {
        let mut sim = simulation();
        // Cube state at the last reset or scramble, since history is cleared
        // at those points.
        let mut base = Cube::new();
        for request in requests {
            match request {
                Request::Move(m) => {
                    let busy = sim.is_busy();
                    let ticket = sim.request_move(m);
                    prop_assert_eq!(ticket.map(|t| t.is_some()), Ok(!busy));
                }
                Request::Scramble => {
                    if !sim.is_busy() {
                        let mut replayed = base.clone();
                        replayed.apply_moves(sim.history());
                        base = replayed;
                    }
                    sim.request_scramble();
                }
                Request::Reset => {
                    // A turn in flight commits onto the fresh cube.
                    base = Cube::new();
                    sim.request_reset();
                }
                Request::Step(ms) => {
                    sim.step_by(Duration::from_millis(ms));
                }
            }

            let mut replayed = base.clone();
            replayed.apply_moves(sim.history());
            prop_assert_eq!(&replayed, sim.cube());
            prop_assert_eq!(sim.cube().validate(), Ok(()));
            prop_assert_eq!(sim.ui_snapshot().move_count, sim.history().len());
        }
    }

    #[test]
    fn proptest_one_turn_in_flight(steps in prop::collection::vec(0_u64..50, 1..40)) {
        let mut sim = simulation();
        sim.request_scramble();
        let mut committed = sim.history().len();
        for ms in steps {
            sim.step_by(Duration::from_millis(ms));
            let now = sim.history().len();
            prop_assert!(now - committed <= 1);
            committed = now;
            let moving = sim
                .render_data()
                .iter()
                .filter(|c| c.transform != CubieTransform::at_rest(c.position))
                .count();
            prop_assert!(moving == 0 || moving == 8 || moving == 9);
        }
    }
}
