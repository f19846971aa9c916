use mortality_story::scene::{Scene, SceneModel};
use proptest::prelude::*;

proptest! {
    #[test]
    fn scene_index_stays_in_bounds_for_any_click_sequence(
        clicks in proptest::collection::vec(any::<bool>(), 0..64)
    ) {
        let mut model = SceneModel::new();
        let mut expected: usize = 0;
        for forward in clicks {
            let scene = if forward { model.advance() } else { model.retreat() };
            expected = if forward { (expected + 1).min(2) } else { expected.saturating_sub(1) };
            prop_assert_eq!(scene.index(), expected);
            prop_assert_eq!(Scene::from_index(expected), Some(scene));
        }
    }
}
