//! Various constants, for use in various places. Mostly the text the user sees, but a few for layout too.

/// Constants that decide whether a submission is accepted, and what the user is told about it.
pub mod form {
    /// The smallest age accepted, inclusive.
    pub const AGE_MIN: f64 = 1.0;
    /// The largest age accepted, inclusive.
    pub const AGE_MAX: f64 = 99.0;

    /// Shown when the name is empty after trimming.
    pub const MISSING_NAME: &str = "Please enter your name.";
    /// Shown when the age is empty, not a number, or out of range.
    pub const INVALID_AGE: &str = "Please enter a valid age between 1 and 99.";
    /// The acknowledgment is `WELCOME_PREFIX`, the name, `WELCOME_AGE`, the age.
    pub const WELCOME_PREFIX: &str = "Welcome, ";
    pub const WELCOME_AGE: &str = "! Age: ";

    /// Conventional identifier of the name field.
    pub const NAME_ID: &str = "name";
    /// Conventional identifier of the age field.
    pub const AGE_ID: &str = "age";
}

/// Constants specifically relating to how things render.
pub mod graphics {
    /// Heading drawn above the form.
    pub const TITLE: &str = "Player Details";
    /// Key hints drawn below the form.
    pub const HINT: &str = "Tab: switch field   Enter: submit   Esc: quit";
    /// Label for the name field, padded to line up with the others.
    pub const NAME_LABEL: &str = "Name: ";
    /// Label for the age field, padded to line up with the others.
    pub const AGE_LABEL: &str = "Age:  ";
    /// The row the first field is drawn on. Fields are spaced two rows apart.
    pub const FIRST_FIELD_ROW: usize = 2;

    /// Widest a notification dialog gets, border included.
    pub const DIALOG_MAX_WIDTH: usize = 50;
    /// The button drawn at the bottom of every notification dialog.
    pub const DIALOG_BUTTON: &str = "[ OK ]";
}
