use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

thread_local! {
    static RUNTIME: RefCell<Runtime> = RefCell::new(Runtime::new());
}

pub type SignalId = usize;
pub type EffectId = usize;

type EffectCallback = Rc<RefCell<Box<dyn FnMut()>>>;

/// Dependency graph between signals and effects for the UI thread.
///
/// Effect callbacks run with the runtime released, so they are free to read
/// and write signals. Slots of dropped signals and disposed effects are
/// recycled.
#[derive(Default)]
pub struct Runtime {
    /// Effects whose callbacks are on the stack, innermost last
    running_effects: Vec<EffectId>,
    pending_effects: Vec<EffectId>,
    effect_callbacks: Vec<Option<EffectCallback>>,
    effect_dependencies: Vec<HashSet<SignalId>>,
    signal_subscribers: Vec<HashSet<EffectId>>,
    free_effects: Vec<EffectId>,
    free_signals: Vec<SignalId>,
    flushing: bool,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_signal(&mut self) -> SignalId {
        if let Some(signal_id) = self.free_signals.pop() {
            return signal_id;
        }
        self.signal_subscribers.push(HashSet::new());
        self.signal_subscribers.len() - 1
    }

    fn release_signal(&mut self, signal_id: SignalId) {
        let Some(subscribers) = self.signal_subscribers.get_mut(signal_id) else {
            return;
        };
        for effect_id in std::mem::take(subscribers) {
            self.effect_dependencies[effect_id].remove(&signal_id);
        }
        self.free_signals.push(signal_id);
    }

    fn allocate_effect(&mut self, callback: Box<dyn FnMut()>) -> EffectId {
        let callback = Some(Rc::new(RefCell::new(callback)));
        if let Some(effect_id) = self.free_effects.pop() {
            self.effect_callbacks[effect_id] = callback;
            return effect_id;
        }
        self.effect_callbacks.push(callback);
        self.effect_dependencies.push(HashSet::new());
        self.effect_callbacks.len() - 1
    }

    fn current_effect(&self) -> Option<EffectId> {
        self.running_effects.last().copied()
    }

    pub fn track_read(&mut self, signal_id: SignalId) {
        if signal_id >= self.signal_subscribers.len() {
            return;
        }

        if let Some(effect_id) = self.current_effect() {
            self.signal_subscribers[signal_id].insert(effect_id);
            self.effect_dependencies[effect_id].insert(signal_id);
        }
    }

    fn queue(&mut self, effect_id: EffectId) {
        if !self.pending_effects.contains(&effect_id) {
            self.pending_effects.push(effect_id);
        }
    }

    /// Queue subscribers of `signal_id`. Returns true if the caller should
    /// flush now.
    fn queue_subscribers(&mut self, signal_id: SignalId) -> bool {
        let Some(subscribers) = self.signal_subscribers.get(signal_id) else {
            return false;
        };

        let subscribers: Vec<EffectId> = subscribers.iter().copied().collect();
        for effect_id in subscribers {
            self.queue(effect_id);
        }

        !self.pending_effects.is_empty() && !self.flushing
    }

    fn detach_dependencies(&mut self, effect_id: EffectId) {
        let deps = std::mem::take(&mut self.effect_dependencies[effect_id]);
        for signal_id in deps {
            if let Some(subscribers) = self.signal_subscribers.get_mut(signal_id) {
                subscribers.remove(&effect_id);
            }
        }
    }

    fn callback(&self, effect_id: EffectId) -> Option<EffectCallback> {
        self.effect_callbacks.get(effect_id)?.clone()
    }

    /// Detach old dependencies and make `effect_id` current.
    fn begin_effect(&mut self, effect_id: EffectId) {
        self.detach_dependencies(effect_id);
        self.running_effects.push(effect_id);
    }

    fn end_effect(&mut self, effect_id: EffectId) {
        self.running_effects.pop();
        // Disposed from inside its own callback
        if self.effect_callbacks[effect_id].is_none() && !self.running_effects.contains(&effect_id)
        {
            self.detach_dependencies(effect_id);
            self.free_effects.push(effect_id);
        }
    }

    /// Returns the callback so the caller can drop it with the runtime
    /// released.
    fn dispose_effect(&mut self, effect_id: EffectId) -> Option<EffectCallback> {
        let callback = self.effect_callbacks.get_mut(effect_id)?.take()?;
        self.detach_dependencies(effect_id);
        self.pending_effects.retain(|id| *id != effect_id);
        if !self.running_effects.contains(&effect_id) {
            self.free_effects.push(effect_id);
        }
        Some(callback)
    }
}

pub fn with_runtime<F, R>(f: F) -> R
where
    F: FnOnce(&mut Runtime) -> R,
{
    RUNTIME.with(|rt| f(&mut rt.borrow_mut()))
}

/// Register `callback` and run it once to collect its dependencies.
///
/// Writes made during that first run are queued and flushed afterwards.
pub(crate) fn create_effect_id(callback: Box<dyn FnMut()>) -> EffectId {
    let (id, nested) = with_runtime(|rt| {
        let id = rt.allocate_effect(callback);
        let nested = std::mem::replace(&mut rt.flushing, true);
        (id, nested)
    });
    run_effect(id);
    if !nested {
        with_runtime(|rt| rt.flushing = false);
        flush_effects();
    }
    id
}

pub(crate) fn dispose_effect(effect_id: EffectId) {
    // The runtime may already be gone during thread teardown
    let callback = RUNTIME
        .try_with(|rt| {
            rt.try_borrow_mut()
                .ok()
                .and_then(|mut rt| rt.dispose_effect(effect_id))
        })
        .ok()
        .flatten();
    drop(callback);
}

pub(crate) fn release_signal(signal_id: SignalId) {
    let _ = RUNTIME.try_with(|rt| {
        if let Ok(mut rt) = rt.try_borrow_mut() {
            rt.release_signal(signal_id);
        }
    });
}

/// Run an effect with dependency tracking.
pub(crate) fn run_effect(effect_id: EffectId) {
    let Some(callback) = with_runtime(|rt| rt.callback(effect_id)) else {
        return;
    };

    // Already on the stack: run it again once the current call returns
    let Ok(mut guard) = callback.try_borrow_mut() else {
        with_runtime(|rt| rt.queue(effect_id));
        return;
    };

    with_runtime(|rt| rt.begin_effect(effect_id));
    (*guard)();
    drop(guard);
    with_runtime(|rt| rt.end_effect(effect_id));
}

pub(crate) fn notify_write(signal_id: SignalId) {
    if with_runtime(|rt| rt.queue_subscribers(signal_id)) {
        flush_effects();
    }
}

fn flush_effects() {
    with_runtime(|rt| rt.flushing = true);
    while let Some(effect_id) = with_runtime(|rt| {
        if rt.pending_effects.is_empty() {
            None
        } else {
            Some(rt.pending_effects.remove(0))
        }
    }) {
        run_effect(effect_id);
    }
    with_runtime(|rt| rt.flushing = false);
}
