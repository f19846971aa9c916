use serde::{Deserialize, Serialize};

/// One of the three fixed presentations of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Scene {
    /// Heart disease vs. cancer over time, annotated.
    #[default]
    Overview,
    /// Bar chart of the leading causes in the focus year.
    TopFive,
    /// Every cause over time, with hover details.
    AllCauses,
}

impl Scene {
    pub const ALL: [Self; 3] = [Self::Overview, Self::TopFive, Self::AllCauses];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::TopFive => 1,
            Self::AllCauses => 2,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Self::Overview)
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::AllCauses)
    }

    /// Following scene; saturates at the last one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Overview => Self::TopFive,
            Self::TopFive | Self::AllCauses => Self::AllCauses,
        }
    }

    /// Preceding scene; saturates at the first one.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Overview | Self::TopFive => Self::Overview,
            Self::AllCauses => Self::TopFive,
        }
    }

    /// Stable file-name friendly identifier.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::TopFive => "top-five",
            Self::AllCauses => "all-causes",
        }
    }
}

/// Current position in the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SceneModel {
    current: Scene,
}

impl SceneModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Scene {
        self.current
    }

    pub fn advance(&mut self) -> Scene {
        self.current = self.current.next();
        self.current
    }

    pub fn retreat(&mut self) -> Scene {
        self.current = self.current.previous();
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::{Scene, SceneModel};

    #[test]
    fn index_round_trips_through_all() {
        for (index, scene) in Scene::ALL.iter().enumerate() {
            assert_eq!(scene.index(), index);
            assert_eq!(Scene::from_index(index), Some(*scene));
        }
        assert_eq!(Scene::from_index(3), None);
    }

    #[test]
    fn model_saturates_at_both_ends() {
        let mut model = SceneModel::new();
        assert_eq!(model.retreat(), Scene::Overview);
        assert_eq!(model.advance(), Scene::TopFive);
        assert_eq!(model.advance(), Scene::AllCauses);
        assert_eq!(model.advance(), Scene::AllCauses);
    }
}
