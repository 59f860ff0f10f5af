//! The host UI: everything the form needs from whatever it's being displayed on.
//!
//! There are two central parts. [`Screen`] is a grid of formatted characters you can freely draw to, with the
//! formatting in [`fmt`]. [`IoSystem`] draws a `Screen` somewhere and reports the user's [`Action`]s back; see
//! [`sys`] for the available backends and [`sys::load`] to pick one.

use std::ops::{Add, AddAssign, Div, DivAssign};

pub mod fmt;
pub mod helpers;
mod input;
mod screen;
pub mod sys;

pub use input::{Action, Key};
pub use screen::Screen;
pub use sys::{IoRunner, IoSystem};

/// A position or size, with an X and a Y component.
///
/// Positions move by adding `XY`s elementwise (e.g. `XY(2, 3) + XY(0, 1) == XY(2, 4)`), and sizes scale down by
/// dividing both components by a scalar (e.g. `XY(80, 24) / 2 == XY(40, 12)`), which is all centering takes.
///
/// When used as a position, `XY(0, 0)` is at the top left of the screen, and `XY(0, 1)` is just below it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct XY(pub usize, pub usize);

impl XY {
    /// The X component
    pub const fn x(&self) -> usize {
        self.0
    }

    /// The Y component
    pub const fn y(&self) -> usize {
        self.1
    }

    /// Subtract elementwise, stopping at zero instead of underflowing.
    pub fn saturating_sub(self, rhs: XY) -> XY {
        XY(self.0.saturating_sub(rhs.0), self.1.saturating_sub(rhs.1))
    }
}

macro_rules! xy_op {
    ( $(
        $trait:ident($fn:ident) by $rhs:ty => |$r:ident| ($rx:expr, $ry:expr) $op:tt $assn_op:tt
    ),* $(,)? ) => {
        $(
            impl $trait<$rhs> for XY {
                type Output = XY;
                fn $fn(self, $r: $rhs) -> XY {
                    XY(self.0 $op $rx, self.1 $op $ry)
                }
            }

            paste::paste! {
                impl [< $trait Assign >]<$rhs> for XY {
                    fn [< $fn _assign >] (&mut self, $r: $rhs) {
                        self.0 $assn_op $rx;
                        self.1 $assn_op $ry;
                    }
                }
            }
        )*
    };
}

xy_op! {
    Add(add) by XY => |rhs| (rhs.0, rhs.1) + +=,
    Div(div) by usize => |rhs| (rhs, rhs) / /=,
}

impl std::fmt::Debug for XY {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "XY({}, {})", self.0, self.1)
    }
}
