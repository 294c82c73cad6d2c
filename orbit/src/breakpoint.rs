// Breakpoints and Responsive Values
// Mobile-first: `default` is unprefixed, every other breakpoint is a min-width variant

use crate::error::PropsError;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Default,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    /// All breakpoints in cascade order. Wider breakpoints come later so their
    /// classes are emitted after narrower ones.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Default,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Breakpoint::Default => "default",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Class prefix for this breakpoint, empty for `default`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Breakpoint::Default => "",
            Breakpoint::Sm => "sm:",
            Breakpoint::Md => "md:",
            Breakpoint::Lg => "lg:",
            Breakpoint::Xl => "xl:",
            Breakpoint::Xxl => "2xl:",
        }
    }

    pub const fn min_width_px(self) -> u32 {
        match self {
            Breakpoint::Default => 0,
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
            Breakpoint::Xxl => 1536,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Breakpoint {
    type Err = PropsError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .into_iter()
            .find(|breakpoint| breakpoint.label() == label)
            .ok_or_else(|| PropsError::UnknownBreakpoint(label.to_string()))
    }
}

/// Pre-generated classes of one (token, property) pair, one per breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassTable([&'static str; 6]);

impl ClassTable {
    pub const fn new(classes: [&'static str; 6]) -> Self {
        Self(classes)
    }

    pub const fn at(&self, breakpoint: Breakpoint) -> &'static str {
        self.0[breakpoint.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &'static str)> + '_ {
        Breakpoint::ALL.into_iter().map(|breakpoint| (breakpoint, self.at(breakpoint)))
    }
}

/// A prop value that is either a single token or a per-breakpoint set of tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Responsive<T> {
    Bare(T),
    Breakpoints(BreakpointMap<T>),
}

/// Partial breakpoint -> value map. Storage is indexed by breakpoint, so iteration
/// order is always cascade order no matter how the map was built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakpointMap<T>([Option<T>; 6]);

impl<T> Default for BreakpointMap<T> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| None))
    }
}

impl<T> BreakpointMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, breakpoint: Breakpoint, value: T) -> Option<T> {
        self.0[breakpoint.index()].replace(value)
    }

    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        self.0[breakpoint.index()].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .filter_map(|breakpoint| self.get(breakpoint).map(|value| (breakpoint, value)))
    }
}

impl<T> FromIterator<(Breakpoint, T)> for BreakpointMap<T> {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, T)>>(iter: I) -> Self {
        let mut map = BreakpointMap::new();
        for (breakpoint, value) in iter {
            map.insert(breakpoint, value);
        }
        map
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Bare(value)
    }
}

impl<T> From<BreakpointMap<T>> for Responsive<T> {
    fn from(map: BreakpointMap<T>) -> Self {
        Responsive::Breakpoints(map)
    }
}

impl<T> Responsive<T> {
    /// Empty per-breakpoint value, to be filled with [`Responsive::at`].
    pub fn breakpoints() -> Self {
        Responsive::Breakpoints(BreakpointMap::new())
    }

    /// Set the value for one breakpoint. A bare value becomes its `default` entry.
    pub fn at(self, breakpoint: Breakpoint, value: T) -> Self {
        let mut map = match self {
            Responsive::Bare(bare) => [(Breakpoint::Default, bare)].into_iter().collect(),
            Responsive::Breakpoints(map) => map,
        };
        map.insert(breakpoint, value);
        Responsive::Breakpoints(map)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Responsive::Bare(_) => false,
            Responsive::Breakpoints(map) => map.is_empty(),
        }
    }

    /// Values with the breakpoint they apply at, in cascade order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (Breakpoint, &T)> + '_> {
        match self {
            Responsive::Bare(value) => Box::new(std::iter::once((Breakpoint::Default, value))),
            Responsive::Breakpoints(map) => Box::new(map.iter()),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Responsive<U> {
        match self {
            Responsive::Bare(value) => Responsive::Bare(f(value)),
            Responsive::Breakpoints(BreakpointMap(slots)) => {
                Responsive::Breakpoints(BreakpointMap(slots.map(|slot| slot.map(&mut f))))
            }
        }
    }

    /// Like [`Responsive::map`], dropping the breakpoints where `f` yields nothing.
    /// Returns `None` when no breakpoint survives.
    pub fn filter_map<U>(self, mut f: impl FnMut(Breakpoint, T) -> Option<U>) -> Option<Responsive<U>> {
        match self {
            Responsive::Bare(value) => f(Breakpoint::Default, value).map(Responsive::Bare),
            Responsive::Breakpoints(BreakpointMap(slots)) => {
                let mut map = BreakpointMap::new();
                for (breakpoint, slot) in Breakpoint::ALL.into_iter().zip(slots) {
                    if let Some(value) = slot.and_then(|value| f(breakpoint, value)) {
                        map.insert(breakpoint, value);
                    }
                }
                (!map.is_empty()).then_some(Responsive::Breakpoints(map))
            }
        }
    }

    /// Classes of `table` at every breakpoint this value is set for, in cascade order.
    pub fn expand(&self, table: &'static ClassTable) -> Vec<&'static str> {
        self.expand_with(|_| Some(table))
    }

    /// Like [`Responsive::expand`], with the class table chosen per value. Values
    /// `lookup` has no table for emit nothing.
    pub fn expand_with<'a>(&'a self, lookup: impl Fn(&'a T) -> Option<&'static ClassTable>) -> Vec<&'static str> {
        self.iter()
            .filter_map(|(breakpoint, value)| lookup(value).map(|table| table.at(breakpoint)))
            .collect()
    }
}

impl Responsive<String> {
    /// Parse the JSON input shape: a token string, or an object keyed by breakpoint
    /// label. Unknown breakpoint labels are skipped.
    pub fn from_json(prop: &str, value: &Value) -> Result<Self, PropsError> {
        match value {
            Value::String(token) => Ok(Responsive::Bare(token.clone())),
            Value::Object(entries) => {
                let mut map = BreakpointMap::new();
                for (label, token) in entries {
                    let breakpoint = match label.parse::<Breakpoint>() {
                        Ok(breakpoint) => breakpoint,
                        Err(_) => {
                            log::warn!("Ignoring unknown breakpoint '{}' on prop '{}'", label, prop);
                            continue;
                        }
                    };
                    match token {
                        Value::String(token) => {
                            map.insert(breakpoint, token.clone());
                        }
                        Value::Null => {}
                        other => {
                            return Err(PropsError::InvalidValue {
                                prop: format!("{}.{}", prop, label),
                                found: crate::error::json_type_name(other),
                            });
                        }
                    }
                }
                Ok(Responsive::Breakpoints(map))
            }
            other => Err(PropsError::InvalidValue {
                prop: prop.to_string(),
                found: crate::error::json_type_name(other),
            }),
        }
    }
}
