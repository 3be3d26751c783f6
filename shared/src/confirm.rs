/// A yes/no prompt waiting on the user, holding whatever the "yes" applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation<T> {
    Idle,
    Pending(T),
}

impl<T> Default for Confirmation<T> {
    fn default() -> Self {
        Confirmation::Idle
    }
}

impl<T> Confirmation<T> {
    /// Ask about `target`, replacing any earlier unanswered prompt
    pub fn request(&mut self, target: T) {
        *self = Confirmation::Pending(target);
    }

    /// The user said yes: close the prompt and hand back its target
    pub fn accept(&mut self) -> Option<T> {
        match std::mem::replace(self, Confirmation::Idle) {
            Confirmation::Pending(target) => Some(target),
            Confirmation::Idle => None,
        }
    }

    /// The user said no
    pub fn dismiss(&mut self) {
        *self = Confirmation::Idle;
    }

    pub fn pending(&self) -> Option<&T> {
        match self {
            Confirmation::Pending(target) => Some(target),
            Confirmation::Idle => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Confirmation::Pending(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::EmployeeId;

    #[test]
    fn test_accept_returns_target_once() {
        let mut prompt = Confirmation::default();
        assert!(!prompt.is_open());

        prompt.request(EmployeeId(1));
        assert!(prompt.is_open());
        assert_eq!(prompt.pending(), Some(&EmployeeId(1)));

        assert_eq!(prompt.accept(), Some(EmployeeId(1)));
        assert_eq!(prompt.accept(), None);
        assert!(!prompt.is_open());
    }

    #[test]
    fn test_dismiss_drops_target() {
        let mut prompt = Confirmation::default();
        prompt.request(EmployeeId(1));
        prompt.dismiss();

        assert_eq!(prompt.pending(), None);
        assert_eq!(prompt.accept(), None);
    }

    #[test]
    fn test_new_request_replaces_old() {
        let mut prompt = Confirmation::default();
        prompt.request(EmployeeId(1));
        prompt.request(EmployeeId(2));
        assert_eq!(prompt.accept(), Some(EmployeeId(2)));
    }
}
