/// Observes a value and reports when it changed since the last poll.
///
/// The app holds one of these over its generation settings and regenerates
/// whenever `poll` reports a change, independent of which key or popup
/// changed the settings.
#[derive(Debug, Default)]
pub struct Watch<T> {
    last_seen: Option<T>,
}

impl<T: Clone + PartialEq> Watch<T> {
    pub fn new() -> Self {
        Self { last_seen: None }
    }

    /// True on the first poll and whenever `current` differs from the value
    /// seen by the previous poll.
    pub fn poll(&mut self, current: &T) -> bool {
        if self.last_seen.as_ref() == Some(current) {
            return false;
        }
        self.last_seen = Some(current.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_first_poll_and_on_change_only() {
        let mut watch = Watch::new();
        assert!(watch.poll(&3));
        assert!(!watch.poll(&3));
        assert!(watch.poll(&4));
        assert!(!watch.poll(&4));
        assert!(watch.poll(&3));
    }
}
