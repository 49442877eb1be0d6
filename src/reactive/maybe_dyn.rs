use std::rc::Rc;

use super::signal::{ReadSignal, Signal};

/// A value that can be either static or dynamic (reactive).
/// This allows widget properties to accept both plain values and signals.
pub enum MaybeDyn<T: 'static> {
    Static(T),
    Dynamic(Rc<dyn Fn() -> T>),
}

impl<T: Clone + 'static> MaybeDyn<T> {
    /// Get the current value. If dynamic, this calls the getter.
    pub fn get(&self) -> T {
        match self {
            MaybeDyn::Static(v) => v.clone(),
            MaybeDyn::Dynamic(getter) => getter(),
        }
    }
}

impl<T: Clone + 'static> Clone for MaybeDyn<T> {
    fn clone(&self) -> Self {
        match self {
            MaybeDyn::Static(v) => MaybeDyn::Static(v.clone()),
            MaybeDyn::Dynamic(getter) => MaybeDyn::Dynamic(getter.clone()),
        }
    }
}

/// Trait for types that can be converted into `MaybeDyn<T>`
pub trait IntoMaybeDyn<T: Clone + 'static> {
    fn into_maybe_dyn(self) -> MaybeDyn<T>;
}

// No blanket impl for plain values: it would conflict with the closure impl.

impl IntoMaybeDyn<String> for String {
    fn into_maybe_dyn(self) -> MaybeDyn<String> {
        MaybeDyn::Static(self)
    }
}

impl IntoMaybeDyn<String> for &str {
    fn into_maybe_dyn(self) -> MaybeDyn<String> {
        MaybeDyn::Static(self.to_string())
    }
}

impl IntoMaybeDyn<f32> for f32 {
    fn into_maybe_dyn(self) -> MaybeDyn<f32> {
        MaybeDyn::Static(self)
    }
}

// Integer → f32 conversions: enables size(70), padding(20), etc.
impl IntoMaybeDyn<f32> for u32 {
    fn into_maybe_dyn(self) -> MaybeDyn<f32> {
        MaybeDyn::Static(self as f32)
    }
}

impl IntoMaybeDyn<f32> for i32 {
    fn into_maybe_dyn(self) -> MaybeDyn<f32> {
        MaybeDyn::Static(self as f32)
    }
}

impl<T: Clone + 'static> IntoMaybeDyn<T> for Signal<T> {
    fn into_maybe_dyn(self) -> MaybeDyn<T> {
        MaybeDyn::Dynamic(Rc::new(move || self.get()))
    }
}

impl<T: Clone + 'static> IntoMaybeDyn<T> for ReadSignal<T> {
    fn into_maybe_dyn(self) -> MaybeDyn<T> {
        MaybeDyn::Dynamic(Rc::new(move || self.get()))
    }
}

impl<T, F> IntoMaybeDyn<T> for F
where
    T: Clone + 'static,
    F: Fn() -> T + 'static,
{
    fn into_maybe_dyn(self) -> MaybeDyn<T> {
        MaybeDyn::Dynamic(Rc::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::create_signal;

    #[test]
    fn test_static_value() {
        let value: MaybeDyn<f32> = 70.0_f32.into_maybe_dyn();
        assert_eq!(value.get(), 70.0);
        let value: MaybeDyn<f32> = 20_i32.into_maybe_dyn();
        assert_eq!(value.get(), 20.0);
    }

    #[test]
    fn test_signal_is_read_on_every_get() {
        let offset = create_signal(0.0_f32);
        let value = offset.read_only().into_maybe_dyn();
        assert_eq!(value.get(), 0.0);
        offset.set(120.0);
        assert_eq!(value.get(), 120.0);
    }

    #[test]
    fn test_closure() {
        let angle = create_signal(90.0_f32);
        let value = {
            let angle = angle.clone();
            (move || angle.get() * 2.0).into_maybe_dyn()
        };
        assert_eq!(value.get(), 180.0);
    }
}
