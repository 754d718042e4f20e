//! Trigger registration and dispatch.
//!
//! Callbacks receive an explicit context value instead of reaching for
//! global state, so the registry can drive any owner of mutable state:
//!
//! ```
//! use mudmap_triggers::{MovementPattern, TriggerRegistry};
//!
//! let mut registry: TriggerRegistry<Vec<String>> = TriggerRegistry::new();
//! registry.register(MovementPattern, |seen, _line, caps| {
//!     seen.push(caps.get(1).unwrap_or_default().to_string());
//! });
//!
//! let mut seen = Vec::new();
//! assert_eq!(registry.dispatch("Вы пошли на юг.", &mut seen), 1);
//! assert_eq!(seen, vec!["юг"]);
//! ```

use std::fmt;

use crate::captures::Captures;
use crate::pattern::LinePattern;

/// Identifies a registered trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(u64);

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A trigger callback: context, the matched line, captured groups.
pub type Callback<C> = Box<dyn FnMut(&mut C, &str, &Captures)>;

struct Trigger<C> {
    id: TriggerId,
    pattern: Box<dyn LinePattern>,
    callback: Callback<C>,
    enabled: bool,
    fired: u64,
}

/// Summary of one registered trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerInfo {
    /// Trigger identifier.
    pub id: TriggerId,
    /// Human-readable pattern.
    pub pattern: String,
    /// Whether the trigger currently fires.
    pub enabled: bool,
    /// How many times it has fired.
    pub fired: u64,
}

/// Ordered set of triggers sharing one context type.
pub struct TriggerRegistry<C> {
    triggers: Vec<Trigger<C>>,
    next_id: u64,
}

impl<C> Default for TriggerRegistry<C> {
    fn default() -> Self {
        Self {
            triggers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<C> TriggerRegistry<C> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a trigger. Triggers fire in registration order.
    pub fn register<P, F>(&mut self, pattern: P, callback: F) -> TriggerId
    where
        P: LinePattern + 'static,
        F: FnMut(&mut C, &str, &Captures) + 'static,
    {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.triggers.push(Trigger {
            id,
            pattern: Box::new(pattern),
            callback: Box::new(callback),
            enabled: true,
            fired: 0,
        });
        id
    }

    /// Removes a trigger. Returns `false` if the id is unknown.
    pub fn remove(&mut self, id: TriggerId) -> bool {
        let before = self.triggers.len();
        self.triggers.retain(|trigger| trigger.id != id);
        self.triggers.len() != before
    }

    /// Enables or disables a trigger. Returns `false` if the id is unknown.
    pub fn set_enabled(&mut self, id: TriggerId, enabled: bool) -> bool {
        match self.triggers.iter_mut().find(|trigger| trigger.id == id) {
            Some(trigger) => {
                trigger.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Number of registered triggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    /// Returns true if no triggers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Describes the registered triggers in firing order.
    #[must_use]
    pub fn triggers(&self) -> Vec<TriggerInfo> {
        self.triggers
            .iter()
            .map(|trigger| TriggerInfo {
                id: trigger.id,
                pattern: trigger.pattern.describe(),
                enabled: trigger.enabled,
                fired: trigger.fired,
            })
            .collect()
    }

    /// Matches `line` against every enabled trigger and runs the callbacks
    /// of those that match, synchronously and in order.
    ///
    /// Returns how many triggers fired.
    pub fn dispatch(&mut self, line: &str, ctx: &mut C) -> usize {
        let mut fired = 0;
        for trigger in self.triggers.iter_mut().filter(|trigger| trigger.enabled) {
            if let Some(caps) = trigger.pattern.captures(line) {
                (trigger.callback)(ctx, line, &caps);
                trigger.fired += 1;
                fired += 1;
            }
        }
        fired
    }
}

impl<C> fmt::Debug for TriggerRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerRegistry")
            .field("triggers", &self.triggers())
            .finish()
    }
}
