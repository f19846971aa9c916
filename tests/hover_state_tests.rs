use mortality_story::core::PlotPoint;
use mortality_story::interaction::{HoverKey, HoverState, HoverTransition};
use mortality_story::render::HoverTarget;

fn target(cause: &str, year: i32, x: f64, y: f64) -> HoverTarget {
    HoverTarget {
        cause: cause.to_owned(),
        year,
        rate: 100.0,
        center: PlotPoint::new(x, y),
        radius: 3.0,
    }
}

#[test]
fn overlapping_targets_resolve_to_the_topmost() {
    let targets = vec![target("Cancer", 1960, 10.0, 10.0), target("Stroke", 1960, 12.0, 10.0)];
    let hit = HoverState::hit_test(&targets, PlotPoint::new(11.0, 10.0)).expect("hit");
    assert_eq!(hit.cause, "Stroke");
    assert!(HoverState::hit_test(&targets, PlotPoint::new(30.0, 30.0)).is_none());
}

#[test]
fn moving_between_targets_replaces_the_active_one() {
    let targets = vec![target("Cancer", 1960, 10.0, 10.0), target("Stroke", 1960, 40.0, 10.0)];
    let mut state = HoverState::default();

    state.on_pointer_move(&targets, PlotPoint::new(10.0, 10.0));
    let transition = state.on_pointer_move(&targets, PlotPoint::new(40.0, 11.0));

    assert_eq!(
        transition,
        HoverTransition::Entered {
            entered: HoverKey {
                cause: "Stroke".to_owned(),
                year: 1960
            },
            left: Some(HoverKey {
                cause: "Cancer".to_owned(),
                year: 1960
            }),
        }
    );
    assert_eq!(state.active().map(|key| key.cause.as_str()), Some("Stroke"));
}

#[test]
fn out_of_order_leave_keeps_newest_hover() {
    let targets = vec![target("Cancer", 1960, 10.0, 10.0), target("Stroke", 1960, 40.0, 10.0)];
    let mut state = HoverState::default();
    let cancer = HoverKey::of(&targets[0]);
    let stroke = HoverKey::of(&targets[1]);

    state.on_enter(cancer.clone());
    state.on_enter(stroke.clone());
    assert_eq!(state.on_leave(&cancer), HoverTransition::Unchanged);
    assert_eq!(state.active(), Some(&stroke));

    assert_eq!(state.on_pointer_leave(), HoverTransition::Left(stroke));
    assert!(state.active().is_none());
    assert!(state.pointer().is_none());
}
