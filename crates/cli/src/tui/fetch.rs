/// The state of a piece of data requested from the backend.
///
/// Failures carry no detail: the dashboard shows one error state for every
/// kind of failure and the cause goes to the log.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Fetch<T> {
    /// The request is in flight.
    #[default]
    Loading,
    /// The data arrived.
    Ready(T),
    /// The request failed.
    Failed,
}

impl<T> Fetch<T> {
    /// The data, if it arrived.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Fetch::Ready(value) => Some(value),
            Fetch::Loading | Fetch::Failed => None,
        }
    }

    /// Mutable access to the data, if it arrived.
    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Fetch::Ready(value) => Some(value),
            Fetch::Loading | Fetch::Failed => None,
        }
    }

    /// Transform the data, keeping the loading and failed states.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetch<U> {
        match self {
            Fetch::Loading => Fetch::Loading,
            Fetch::Ready(value) => Fetch::Ready(f(value)),
            Fetch::Failed => Fetch::Failed,
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Fetch<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Fetch::Ready(value),
            Err(err) => {
                tracing::warn!(error = %err, "fetch failed");
                Fetch::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: Fetch<u8> = Ok::<_, String>(3).into();
        assert_eq!(ok.ready(), Some(&3));

        let failed: Fetch<u8> = Err::<u8, _>("boom".to_string()).into();
        assert_eq!(failed, Fetch::Failed);
        assert!(failed.ready().is_none());
    }

    #[test]
    fn test_map_keeps_state() {
        assert_eq!(Fetch::<u8>::Loading.map(|v| v + 1), Fetch::Loading);
        assert_eq!(Fetch::Ready(1u8).map(|v| v + 1), Fetch::Ready(2));
        assert_eq!(Fetch::<u8>::Failed.map(|v| v + 1), Fetch::Failed);
    }
}
