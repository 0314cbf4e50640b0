use std::fmt;

/// Returned by `pop` and `peek` when the queue holds no elements.
///
/// The queue is left untouched when this is returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "empty queue")
    }
}

impl std::error::Error for EmptyQueueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(EmptyQueueError.to_string(), "empty queue");
    }

    #[test]
    fn boxes_as_std_error() {
        fn fails() -> Result<(), Box<dyn std::error::Error>> {
            Err(EmptyQueueError)?
        }
        let err = fails().unwrap_err();
        assert!(err.downcast_ref::<EmptyQueueError>().is_some());
    }
}
