// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use cyclic::Cyclic;
pub use module::HashMapModule;
pub use rational::Rational;
pub use traits::{Additive, AlgebraicBase, FieldLike, Multiplicative, RingLike};

mod cyclic;
mod integer;
mod module;
mod rational;
mod traits;
