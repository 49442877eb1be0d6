use super::runtime::{create_effect_id, dispose_effect, EffectId};

/// Side effect that re-runs whenever a signal it read changes.
///
/// The effect runs once on creation to collect its dependencies and stays
/// subscribed until dropped.
pub struct Effect {
    id: EffectId,
}

impl Effect {
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            id: create_effect_id(Box::new(f)),
        }
    }
}

impl Drop for Effect {
    fn drop(&mut self) {
        dispose_effect(self.id);
    }
}

pub fn create_effect<F>(f: F) -> Effect
where
    F: FnMut() + 'static,
{
    Effect::new(f)
}
