/// One submission attempt, as seen by whoever handles it.
///
/// If nobody calls [`Self::prevent_default`], the host goes ahead with its own native submission, which for this
/// program means leaving the form (see [`crate::app`]).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the host from performing its native submission for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_not_prevented_until_asked() {
        let mut ev = SubmitEvent::new();
        assert!(!ev.default_prevented());
        ev.prevent_default();
        ev.prevent_default();
        assert!(ev.default_prevented());
    }
}
