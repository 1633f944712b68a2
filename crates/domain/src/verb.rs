//! Verb — the closed set of operations the gateway dispatches.

use std::fmt;
use std::str::FromStr;

use crate::error::DispatchError;

/// One of the four operations a procedure can be dispatched for.
///
/// The set is closed: create maps to [`Verb::Put`], read to [`Verb::Get`],
/// update to [`Verb::Patch`], delete to [`Verb::Delete`]. Any other verb
/// string is rejected at parse time, before any IO can happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Put,
    Patch,
    Delete,
}

/// How a procedure's outcome is read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// The procedure hands back one scalar JSON text value.
    Scalar,
    /// The procedure reports how many rows it touched.
    RowCount,
}

impl Verb {
    /// All verbs, in dispatch-table order.
    pub const ALL: [Self; 4] = [Self::Get, Self::Put, Self::Patch, Self::Delete];

    /// The lowercase name used when deriving procedure names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }

    /// The execution strategy tied to this verb.
    ///
    /// `get` and `put` return data and run as scalar calls; `patch` and
    /// `delete` only report the number of affected rows.
    #[must_use]
    pub const fn mode(self) -> ExecutionMode {
        match self {
            Self::Get | Self::Put => ExecutionMode::Scalar,
            Self::Patch | Self::Delete => ExecutionMode::RowCount,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = DispatchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "put" => Ok(Self::Put),
            "patch" => Ok(Self::Patch),
            "delete" => Ok(Self::Delete),
            _ => Err(DispatchError::UnsupportedVerb(value.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_all_verbs_case_insensitively() {
        for raw in ["get", "GET", "Get", "gEt"] {
            assert_eq!(raw.parse::<Verb>().unwrap(), Verb::Get);
        }
        assert_eq!("PUT".parse::<Verb>().unwrap(), Verb::Put);
        assert_eq!("Patch".parse::<Verb>().unwrap(), Verb::Patch);
        assert_eq!("delete".parse::<Verb>().unwrap(), Verb::Delete);
    }

    #[test]
    fn should_reject_verbs_outside_the_closed_set() {
        for raw in ["post", "POST", "head", "options", "", "gett", "put "] {
            let result = raw.parse::<Verb>();
            assert!(
                matches!(result, Err(DispatchError::UnsupportedVerb(ref v)) if v == raw),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn should_run_get_and_put_as_scalar_calls() {
        assert_eq!(Verb::Get.mode(), ExecutionMode::Scalar);
        assert_eq!(Verb::Put.mode(), ExecutionMode::Scalar);
    }

    #[test]
    fn should_run_patch_and_delete_as_rowcount_calls() {
        assert_eq!(Verb::Patch.mode(), ExecutionMode::RowCount);
        assert_eq!(Verb::Delete.mode(), ExecutionMode::RowCount);
    }

    #[test]
    fn should_render_lowercase_names() {
        let rendered: Vec<String> = Verb::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["get", "put", "patch", "delete"]);
    }
}
