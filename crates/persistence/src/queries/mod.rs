// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side persistence operations.
//!
//! All functions here use Diesel DSL exclusively and take a concrete
//! `SqliteConnection`. Backend-specific setup lives in `backend/`.

pub mod form_schema;
pub mod requests;
pub mod usage;
