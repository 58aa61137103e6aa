// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Counter state in MVU shape: a model, its messages, and a pure update.

/// Counter state owned by a single view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterModel {
    count: i64,
    /// Captured once at creation; `Reset` always returns here.
    initial: i64,
}

/// Messages emitted by counter controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterMsg {
    Increment,
    Decrement,
    Reset,
}

impl CounterModel {
    pub fn new(initial: i64) -> Self {
        Self {
            count: initial,
            initial,
        }
    }

    /// Current value.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Value restored by `Reset`.
    pub fn initial(&self) -> i64 {
        self.initial
    }

    pub fn increment(&mut self) {
        update(self, CounterMsg::Increment);
    }

    pub fn decrement(&mut self) {
        update(self, CounterMsg::Decrement);
    }

    pub fn reset(&mut self) {
        update(self, CounterMsg::Reset);
    }
}

/// Apply a message to the model. Arithmetic saturates at the `i64` bounds.
pub fn update(model: &mut CounterModel, msg: CounterMsg) {
    model.count = match msg {
        CounterMsg::Increment => model.count.saturating_add(1),
        CounterMsg::Decrement => model.count.saturating_sub(1),
        CounterMsg::Reset => model.initial,
    };
}
