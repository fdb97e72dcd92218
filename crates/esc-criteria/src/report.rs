//! # Reporter
//!
//! Writes one line per failed condition to an injected sink and returns the
//! aggregate verdict. A failed write is logged and does not change the
//! verdict; diagnostics are best effort.

use std::io::{self, Write};

use crate::condition::ConditionSet;

/// Failure reporter over any [`io::Write`] sink.
#[derive(Debug)]
pub struct Reporter<W> {
    sink: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Report every failure in `set` and return whether all conditions held.
    pub fn evaluate(&mut self, set: &ConditionSet) -> bool {
        for failed in set.failures() {
            if let Err(err) = writeln!(
                self.sink,
                "Criterion {} is not satisfied!",
                failed.description
            ) {
                tracing::error!(error = %err, condition = failed.description, "failed to write report line");
            }
        }
        set.all_hold()
    }

    /// Recover the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl Reporter<io::Stderr> {
    /// Reporter writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl Default for Reporter<io::Stderr> {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{Criterion, LaueClass};
    use crate::condition::Condition;

    fn set(conditions: Vec<Condition>) -> ConditionSet {
        ConditionSet::new(Criterion::Stability, LaueClass::Cubic, conditions)
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn silent_when_everything_holds() {
        let mut r = Reporter::new(Vec::new());
        assert!(r.evaluate(&set(vec![Condition {
            holds: true,
            description: "C_{44} > 0",
        }])));
        assert!(r.into_inner().is_empty());
    }

    #[test]
    fn one_line_per_failure() {
        let mut r = Reporter::new(Vec::new());
        let verdict = r.evaluate(&set(vec![
            Condition {
                holds: false,
                description: "C_{11} > | C_{12} |",
            },
            Condition {
                holds: true,
                description: "C_{44} > 0",
            },
            Condition {
                holds: false,
                description: "C_{11} + 2 C_{12} > 0",
            },
        ]));
        assert!(!verdict);
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(
            out,
            "Criterion C_{11} > | C_{12} | is not satisfied!\n\
             Criterion C_{11} + 2 C_{12} > 0 is not satisfied!\n"
        );
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let s = set(vec![Condition {
            holds: false,
            description: "x",
        }]);
        let mut r = Reporter::new(Vec::new());
        assert_eq!(r.evaluate(&s), r.evaluate(&s));
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert_eq!(out.lines().next(), out.lines().nth(1));
    }

    #[test]
    fn sink_errors_do_not_change_verdict() {
        let mut r = Reporter::new(BrokenSink);
        assert!(!r.evaluate(&set(vec![Condition {
            holds: false,
            description: "x",
        }])));
        assert!(r.evaluate(&set(Vec::new())));
    }
}
