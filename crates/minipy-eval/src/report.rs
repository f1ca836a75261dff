//! Structured run result for hosts that want more than the joined string.

use serde::{Deserialize, Serialize};

/// The outcome of one interpreter invocation, JSON-ready for UI
/// transports. `output` is exactly what [`crate::run_snippet`] returns;
/// `lines` holds the individual printed lines before joining (empty when
/// nothing was printed, even though `output` then carries the
/// placeholder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// The rendered output, or the no-output placeholder.
    pub output: String,
    /// One entry per executed `print`.
    pub lines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_roundtrip() {
        let report = RunReport {
            output: "0\n1".into(),
            lines: vec!["0".into(), "1".into()],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"output\""));
        assert!(json.contains("\"lines\""));
        let back: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
