// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The integers as the ring of incidence degrees.

use crate::algebra::traits::RingLike;

impl RingLike for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_invertible(&self) -> bool {
        *self == 1 || *self == -1
    }

    fn invert(&self) -> Self {
        assert!(
            self.is_invertible(),
            "attempting to invert non-unit integer {self}"
        );
        *self
    }
}
