//! Property tests for the carousel index controller.
//!
//! Verifies:
//! 1. The current index stays in range for any operation sequence
//! 2. advance/retreat undo each other
//! 3. Exactly one slide is center and exactly one indicator is active, both at the index
//! 4. jump_to always lands on its target
//! 5. Neighbour roles sit one step either side of the center

use portfolio::carousel::SlideshowController;
use portfolio::state::SlideRole;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Advance,
    Retreat,
    Jump(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Advance),
        Just(Op::Retreat),
        (0usize..64).prop_map(Op::Jump),
    ]
}

fn apply(controller: &mut SlideshowController, op: Op) {
    match op {
        Op::Advance => controller.advance(),
        Op::Retreat => controller.retreat(),
        Op::Jump(k) => {
            let _ = controller.jump_to(k % controller.slide_count());
        }
    }
}

proptest! {
    #[test]
    fn index_stays_in_range(n in 1usize..20, ops in prop::collection::vec(arb_op(), 0..100)) {
        let mut controller = SlideshowController::new(n).unwrap();
        for op in ops {
            apply(&mut controller, op);
            prop_assert!(controller.current_index() < n);
        }
    }

    #[test]
    fn advance_and_retreat_are_inverse(n in 1usize..20, ops in prop::collection::vec(arb_op(), 0..30)) {
        let mut controller = SlideshowController::new(n).unwrap();
        for op in ops {
            apply(&mut controller, op);
        }
        let before = controller.current_index();

        controller.advance();
        controller.retreat();
        prop_assert_eq!(controller.current_index(), before);

        controller.retreat();
        controller.advance();
        prop_assert_eq!(controller.current_index(), before);
    }

    #[test]
    fn single_center_and_single_active_indicator(n in 1usize..20, ops in prop::collection::vec(arb_op(), 0..50)) {
        let mut controller = SlideshowController::new(n).unwrap();
        for op in ops {
            apply(&mut controller, op);

            let roles = controller.roles();
            let centers: Vec<usize> = (0..n).filter(|&i| roles[i] == SlideRole::Center).collect();
            prop_assert_eq!(centers, vec![controller.current_index()]);

            let active: Vec<usize> = (0..n).filter(|&i| controller.is_indicator_active(i)).collect();
            prop_assert_eq!(active, vec![controller.current_index()]);
        }
    }

    #[test]
    fn jump_to_sets_index(n in 1usize..20, start in 0usize..20, k in 0usize..20) {
        let mut controller = SlideshowController::new(n).unwrap();
        controller.jump_to(start % n).unwrap();
        controller.jump_to(k % n).unwrap();
        prop_assert_eq!(controller.current_index(), k % n);
    }

    #[test]
    fn neighbours_are_adjacent(n in 4usize..20, k in 0usize..20) {
        let mut controller = SlideshowController::new(n).unwrap();
        controller.jump_to(k % n).unwrap();
        let current = controller.current_index();
        let roles = controller.roles();

        prop_assert_eq!(roles[(current + 1) % n], SlideRole::Right);
        prop_assert_eq!(roles[(current + n - 1) % n], SlideRole::Left);
        prop_assert_eq!(roles.iter().filter(|r| **r == SlideRole::Hidden).count(), n - 3);
    }
}
