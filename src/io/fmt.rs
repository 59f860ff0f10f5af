//! Terminal-compatible text formatting. It comes in several pieces:
//!
//! - [`Format`], which contains the common formatting options (i.e. the common ANSI ones)
//! - [`Text`] and [`Cell`], which apply a `Format` to a `String` and a `char` respectively
//!     - They share the [`Formatted`] trait, so [`FormattedExt`] gives both the same set of methods
//! - [`text!`](crate::text) and [`cell!`](crate::cell), which construct `Vec<Text>`s and `Cell`s tersely
//!
//! The form and the dialog build everything they draw out of these.

/// The color of a piece of formatted text. Meant to be used through `Text` / `text!`. The numeric values are the ANSI
/// color codes for each color; that's also where the actual colors are from.
///
/// Only the colors the form and its dialogs actually use are here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
    Black = 0,
    Blue = 4,
    White = 7,
    BrightBlack = 60,
    BrightCyan = 66,
    BrightWhite = 67,
}

/// The format of a single formatted item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Format {
    /// The foreground color of the item
    pub fg: Color,
    /// The background color of the item
    pub bg: Color,
    /// Whether it's bolded or not
    pub bold: bool,
    /// Whether it's underlined or not
    pub underline: bool,
}

impl Format {
    /// The default formatting: white on black, nothing else
    pub const NONE: Self = Format {
        fg: Color::White,
        bg: Color::Black,
        bold: false,
        underline: false,
    };
}

macro_rules! fmt_fn {
    ( $( $name:ident => $field:ident = $val:expr ),* $(,)? ) => { $(
        #[must_use]
        fn $name(mut self) -> Self {
            self.get_fmt_mut().$field = $val;
            self
        }
    )* };
}

/// Trait implemented by all formattable items (`Text` and `Cell`).
pub trait Formatted {
    fn get_fmt(&self) -> &Format;
    fn get_fmt_mut(&mut self) -> &mut Format;
}

/// Provides common formatting operations on anything implementing [`Formatted`].
pub trait FormattedExt: Formatted + Sized {
    /// Copy another item's formatting into this one.
    ///
    /// The two objects don't need to be the same type, e.g. you can copy a [`Text`]'s formatting to a [`Cell`].
    #[must_use]
    fn fmt_of(mut self, rhs: &dyn Formatted) -> Self {
        *self.get_fmt_mut() = rhs.get_fmt().clone();
        self
    }
    fmt_fn! {
        black => fg = Color::Black,
        bright_black => fg = Color::BrightBlack,
        bright_cyan => fg = Color::BrightCyan,
        bright_white => fg = Color::BrightWhite,
        on_blue => bg = Color::Blue,
        on_white => bg = Color::White,
        underline => underline = true,
        bold => bold = true,
    }
}

impl<F: Formatted> FormattedExt for F {}

macro_rules! fmt_type {
    (
        $( #[$($attr:meta),* $(,)?] )*
        $svis:vis struct $name:ident { $( $fvis:vis $field:ident: $type:ty ),* $(,)? }
    ) => {
        $( #[$($attr),*] )*
        $svis struct $name {
            $( $fvis $field: $type, )*
            _fmt: $crate::io::fmt::Format,
        }
        impl $crate::io::fmt::Formatted for $name {
            fn get_fmt(&self) -> &$crate::io::fmt::Format {
                &self._fmt
            }
            fn get_fmt_mut(&mut self) -> &mut $crate::io::fmt::Format {
                &mut self._fmt
            }
        }
        impl $name {
            pub const fn of( $($field: $type),* ) -> Self {
                Self {
                    $( $field, )*
                    _fmt: $crate::io::fmt::Format::NONE,
                }
            }
        }
    };
}

fmt_type!(
    /// A single bit of formatted text. Note this isn't really meant to be used on its own, though it can be; the API
    /// is designed to be used through `text!`, i.e. as a `Vec<Text>`.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Text {
        pub text: String,
    }
);

/// Create a series of formatted [`Text`]s.
///
/// Each item is any number of [`FormattedExt`] method names, then a format string, then optionally its arguments in
/// parentheses, e.g. `text!["Name: ", bold green "{}"(name)]`.
#[macro_export]
macro_rules! text {
    [ $(
        $( $name:ident )*
        $text:literal
        $( ( $( $arg:expr ),* $(,)? ) )?
    ),* $(,)? ] => {
        {
            #[allow(unused_imports)]
            use $crate::io::fmt::{FormattedExt as _};
            ::std::vec![
                $(
                    $crate::io::fmt::Text::of(
                        ::std::format!( $text $(, $( $arg ),* )? )
                    ) $( . $name () )*
                ),*
            ]
        }
    };
}

fmt_type! {
    /// A single character that's been formatted. This is really only meant to be used in `Screen`.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Cell { pub ch: char }
}

/// Create a formatted [`Cell`].
#[macro_export]
macro_rules! cell {
    [ $( $name:ident )* $( $char:literal )? ] => {
        {
            #[allow(unused_imports)]
            use $crate::io::fmt::{FormattedExt as _};
            $crate::io::fmt::Cell::of($($char)?) $( .$name() )*
        }
    };
}

impl Cell {
    /// A blank cell with default formatting.
    pub const BLANK: Cell = cell!(' ');
}
