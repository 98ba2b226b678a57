// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Backend access: the `Backend` seam and its HTTP implementation.

pub mod client;
pub mod error;

pub use client::{Backend, HttpBackend};
