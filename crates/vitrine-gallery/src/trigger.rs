//! Decides when a demo's play action is invoked.
//!
//! A binding associates one preview region with one zero-argument play action
//! and one mode flag. Auto bindings fire once as soon as their region is
//! mounted and then stay idle; interactive bindings fire on every
//! pointer-enter until they are unbound. Play actions are expected to be
//! restart-safe (the motion runner resets a playback on re-start), so rapid
//! re-entry simply re-fires without debouncing.
//!
//! All mutation happens on the UI thread in response to discrete lifecycle
//! and pointer events; a region has at most one binding, so a play action can
//! never be invoked from two event sources.

use std::collections::{HashMap, HashSet};

use vitrine_core::RegionId;

/// Mode flag for a binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerConfig {
    /// Fire once on activation instead of arming a pointer-enter watch.
    pub auto: bool,
}

impl TriggerConfig {
    pub fn auto() -> Self {
        Self { auto: true }
    }

    pub fn hover() -> Self {
        Self { auto: false }
    }
}

enum BindingState {
    /// Auto binding whose region was not mounted at bind time; fires on the
    /// next lifecycle pass that shows the region.
    PendingAuto,
    /// Auto binding that has had its single fire. Idle until teardown.
    ArmedAuto,
    /// Fires on every pointer-enter until teardown.
    ArmedInteractive,
}

struct Binding {
    play: Box<dyn FnMut()>,
    state: BindingState,
}

/// Owns every trigger binding of the gallery.
#[derive(Default)]
pub struct TriggerController {
    bindings: HashMap<RegionId, Binding>,
    mounted: HashSet<RegionId>,
    hovered: Option<RegionId>,
}

impl TriggerController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `play` to `region`.
    ///
    /// Any previous binding for the region is detached first, so a re-bind
    /// never leaves two watches on one region. Auto bindings whose region is
    /// already mounted fire synchronously here; otherwise the fire is
    /// deferred to the next [`sync_mounted`](Self::sync_mounted) pass that
    /// shows the region.
    pub fn bind(&mut self, region: RegionId, play: impl FnMut() + 'static, config: TriggerConfig) {
        // Detach-before-attach: drop the old binding before the new one can fire.
        let _ = self.bindings.remove(&region);

        let mut play: Box<dyn FnMut()> = Box::new(play);
        let state = if config.auto {
            if self.mounted.contains(&region) {
                play();
                BindingState::ArmedAuto
            } else {
                tracing::debug!(region, "auto trigger deferred: region not mounted");
                BindingState::PendingAuto
            }
        } else {
            BindingState::ArmedInteractive
        };
        self.bindings.insert(region, Binding { play, state });
    }

    /// Tear down the binding for `region`. Idempotent; events arriving after
    /// teardown never reach the old play action.
    pub fn unbind(&mut self, region: RegionId) {
        let _ = self.bindings.remove(&region);
    }

    /// Lifecycle pass: inform the controller which regions the current scene
    /// contains. Deferred auto bindings whose region appeared fire now
    /// (exactly once); a hovered region that vanished stops counting as
    /// hovered, so a remount registers as a fresh enter.
    pub fn sync_mounted(&mut self, mounted: &HashSet<RegionId>) {
        self.mounted = mounted.clone();
        if let Some(hovered) = self.hovered {
            if !self.mounted.contains(&hovered) {
                self.hovered = None;
            }
        }
        for (region, binding) in &mut self.bindings {
            if matches!(binding.state, BindingState::PendingAuto) && self.mounted.contains(region) {
                (binding.play)();
                binding.state = BindingState::ArmedAuto;
            }
        }
    }

    /// Pointer update: the topmost interactive region currently under the
    /// cursor, or `None`. A change of region counts as leaving the old one
    /// and entering the new one; entering an interactively bound, mounted
    /// region fires its play action.
    pub fn pointer_at(&mut self, region: Option<RegionId>) {
        if region == self.hovered {
            return;
        }
        self.hovered = region;
        let Some(region) = region else {
            return;
        };
        let Some(binding) = self.bindings.get_mut(&region) else {
            return;
        };
        if !matches!(binding.state, BindingState::ArmedInteractive) {
            return;
        }
        if !self.mounted.contains(&region) {
            tracing::debug!(region, "pointer-enter ignored: region not mounted");
            return;
        }
        (binding.play)();
    }

    /// The pointer left the scene entirely.
    pub fn pointer_left(&mut self) {
        self.pointer_at(None);
    }

    pub fn is_bound(&self, region: RegionId) -> bool {
        self.bindings.contains_key(&region)
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counter() -> (Rc<RefCell<u32>>, impl FnMut()) {
        let count = Rc::new(RefCell::new(0u32));
        let handle = count.clone();
        (count, move || *handle.borrow_mut() += 1)
    }

    fn mounted(regions: &[RegionId]) -> HashSet<RegionId> {
        regions.iter().copied().collect()
    }

    #[test]
    fn test_auto_fires_exactly_once() {
        let mut ctl = TriggerController::new();
        ctl.sync_mounted(&mounted(&[1]));

        let (count, play) = counter();
        ctl.bind(1, play, TriggerConfig::auto());
        assert_eq!(*count.borrow(), 1);

        // Pointer-enter after activation must not fire again.
        ctl.pointer_at(Some(1));
        ctl.pointer_at(None);
        ctl.pointer_at(Some(1));
        assert_eq!(*count.borrow(), 1);

        // Nor do further lifecycle passes.
        ctl.sync_mounted(&mounted(&[1]));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_auto_defers_until_mounted() {
        let mut ctl = TriggerController::new();
        let (count, play) = counter();
        ctl.bind(1, play, TriggerConfig::auto());
        // Region not mounted: silent no-op.
        assert_eq!(*count.borrow(), 0);

        // A pass without the region still does nothing.
        ctl.sync_mounted(&mounted(&[2]));
        assert_eq!(*count.borrow(), 0);

        // The region appearing resolves the deferred fire, once.
        ctl.sync_mounted(&mounted(&[1, 2]));
        assert_eq!(*count.borrow(), 1);
        ctl.sync_mounted(&mounted(&[1, 2]));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_interactive_fires_per_enter() {
        let mut ctl = TriggerController::new();
        ctl.sync_mounted(&mounted(&[1]));
        let (count, play) = counter();
        ctl.bind(1, play, TriggerConfig::hover());

        for _ in 0..5 {
            ctl.pointer_at(Some(1));
            ctl.pointer_at(None);
        }
        assert_eq!(*count.borrow(), 5);
    }

    #[test]
    fn test_staying_inside_does_not_refire() {
        let mut ctl = TriggerController::new();
        ctl.sync_mounted(&mounted(&[1]));
        let (count, play) = counter();
        ctl.bind(1, play, TriggerConfig::hover());

        ctl.pointer_at(Some(1));
        ctl.pointer_at(Some(1));
        ctl.pointer_at(Some(1));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_crossing_between_regions_counts_as_enter() {
        let mut ctl = TriggerController::new();
        ctl.sync_mounted(&mounted(&[1, 2]));
        let (count1, play1) = counter();
        let (count2, play2) = counter();
        ctl.bind(1, play1, TriggerConfig::hover());
        ctl.bind(2, play2, TriggerConfig::hover());

        ctl.pointer_at(Some(1));
        ctl.pointer_at(Some(2));
        ctl.pointer_at(Some(1));
        assert_eq!(*count1.borrow(), 2);
        assert_eq!(*count2.borrow(), 1);
    }

    #[test]
    fn test_no_fires_after_teardown() {
        let mut ctl = TriggerController::new();
        ctl.sync_mounted(&mounted(&[1]));
        let (count, play) = counter();
        ctl.bind(1, play, TriggerConfig::hover());
        ctl.pointer_at(Some(1));
        assert_eq!(*count.borrow(), 1);

        ctl.unbind(1);
        for _ in 0..4 {
            ctl.pointer_at(None);
            ctl.pointer_at(Some(1));
        }
        assert_eq!(*count.borrow(), 1);
        assert!(!ctl.is_bound(1));
    }

    #[test]
    fn test_rebind_detaches_old_action() {
        let mut ctl = TriggerController::new();
        ctl.sync_mounted(&mounted(&[1]));
        let (old_count, old_play) = counter();
        let (new_count, new_play) = counter();

        ctl.bind(1, old_play, TriggerConfig::hover());
        ctl.bind(1, new_play, TriggerConfig::hover());
        assert_eq!(ctl.binding_count(), 1);

        ctl.pointer_at(Some(1));
        assert_eq!(*old_count.borrow(), 0);
        assert_eq!(*new_count.borrow(), 1);
    }

    #[test]
    fn test_rebind_auto_over_interactive_fires_once() {
        let mut ctl = TriggerController::new();
        ctl.sync_mounted(&mounted(&[1]));
        let (count, play) = counter();
        ctl.bind(1, || {}, TriggerConfig::hover());
        ctl.bind(1, play, TriggerConfig::auto());
        assert_eq!(*count.borrow(), 1);
        ctl.pointer_at(Some(1));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_enter_unmounted_region_is_silent() {
        let mut ctl = TriggerController::new();
        let (count, play) = counter();
        ctl.bind(1, play, TriggerConfig::hover());
        // No lifecycle pass has mounted region 1 yet.
        ctl.pointer_at(Some(1));
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_unmount_then_remount_is_a_fresh_enter() {
        let mut ctl = TriggerController::new();
        ctl.sync_mounted(&mounted(&[1]));
        let (count, play) = counter();
        ctl.bind(1, play, TriggerConfig::hover());

        ctl.pointer_at(Some(1));
        assert_eq!(*count.borrow(), 1);

        // Region disappears while the pointer stays put, then comes back.
        ctl.sync_mounted(&mounted(&[]));
        ctl.sync_mounted(&mounted(&[1]));
        ctl.pointer_at(Some(1));
        assert_eq!(*count.borrow(), 2);
    }
}
