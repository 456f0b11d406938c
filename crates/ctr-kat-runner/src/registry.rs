//! Dispatch registry
//!
//! Maps each `(GeneratorKind, rounds)` pair to the validation routine
//! specialized for it. The registry is built once and only read afterwards.

use crate::error::{Error, Result};
use crate::validate::{CrossValidation, ValidationRoutine};
use ctr_kat_gen::{
    CounterBasedRng, Engine, GeneratorKind, MicroUrng, Philox2x32, Philox4x32, Threefry2x32,
    Threefry2x64, Threefry4x32, Threefry4x64,
};
#[cfg(feature = "philox-64")]
use ctr_kat_gen::{Philox2x64, Philox4x64};
use std::collections::HashMap;

/// Round counts registered for every Threefry family
pub const THREEFRY_ROUNDS: [u32; 2] = [13, 20];

/// Round counts registered for every Philox family
pub const PHILOX_ROUNDS: [u32; 2] = [7, 10];

/// Registry of validation routines keyed by `(kind, rounds)`
#[derive(Debug, Default)]
pub struct Registry {
    routines: HashMap<(GeneratorKind, u32), Box<dyn ValidationRoutine>>,
}

impl Registry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every compiled-in binding
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.bind_builtin();
        tracing::debug!(bindings = registry.len(), "built dispatch registry");
        registry
    }

    fn bind_builtin(&mut self) {
        macro_rules! bind_all {
            ($($g:ty),* $(,)?) => {
                $(
                    let bound = self.bind::<$g>();
                    debug_assert!(bound.is_ok(), "builtin binding failed: {bound:?}");
                    if let Err(e) = bound {
                        tracing::error!(error = %e, "builtin binding skipped");
                    }
                )*
            };
        }

        bind_all!(
            Threefry2x32<13>,
            Threefry2x32<20>,
            Threefry4x32<13>,
            Threefry4x32<20>,
            Threefry2x64<13>,
            Threefry2x64<20>,
            Threefry4x64<13>,
            Threefry4x64<20>,
            Philox2x32<7>,
            Philox2x32<10>,
            Philox4x32<7>,
            Philox4x32<10>,
        );

        #[cfg(feature = "philox-64")]
        bind_all!(
            Philox2x64<7>,
            Philox2x64<10>,
            Philox4x64<7>,
            Philox4x64<10>,
        );
    }

    /// Register `routine` under `(kind, rounds)`
    ///
    /// # Errors
    ///
    /// - [`Error::BindingMismatch`] if the routine is specialized for another pair
    /// - [`Error::DuplicateBinding`] if the pair is already registered
    pub fn register(
        &mut self,
        kind: GeneratorKind,
        rounds: u32,
        routine: Box<dyn ValidationRoutine>,
    ) -> Result<()> {
        if routine.kind() != kind || routine.rounds() != rounds {
            return Err(Error::BindingMismatch {
                kind,
                rounds,
                actual_kind: routine.kind(),
                actual_rounds: routine.rounds(),
            });
        }
        if self.routines.contains_key(&(kind, rounds)) {
            return Err(Error::DuplicateBinding { kind, rounds });
        }
        self.routines.insert((kind, rounds), routine);
        Ok(())
    }

    /// Register the default cross-validation for generator `G`
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateBinding`] if `G`'s pair is already registered.
    pub fn bind<G: CounterBasedRng>(&mut self) -> Result<()> {
        self.register(
            G::KIND,
            G::ROUNDS,
            Box::new(CrossValidation::<G, MicroUrng<G, 1>, Engine<G>>::new()),
        )
    }

    /// Routine bound to `(kind, rounds)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingBinding`] if nothing is registered for the pair.
    pub fn lookup(&self, kind: GeneratorKind, rounds: u32) -> Result<&dyn ValidationRoutine> {
        self.routines
            .get(&(kind, rounds))
            .map(|routine| &**routine)
            .ok_or(Error::MissingBinding { kind, rounds })
    }

    /// `true` if `(kind, rounds)` is registered
    #[must_use]
    pub fn contains(&self, kind: GeneratorKind, rounds: u32) -> bool {
        self.routines.contains_key(&(kind, rounds))
    }

    /// Number of bindings
    #[must_use]
    pub fn len(&self) -> usize {
        self.routines.len()
    }

    /// `true` if nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    /// Registered pairs, sorted
    #[must_use]
    pub fn bindings(&self) -> Vec<(GeneratorKind, u32)> {
        let mut pairs: Vec<_> = self.routines.keys().copied().collect();
        pairs.sort_unstable();
        pairs
    }
}
