// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Model-View-Update kernels for state that front ends own.

pub mod counter;

pub use counter::{CounterModel, CounterMsg};
