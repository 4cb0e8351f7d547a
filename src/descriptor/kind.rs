//! Application kinds the daemon launcher knows how to start

use std::fmt;
use std::str::FromStr;

use super::{Descriptor, PARAM_EXECUTABLE, PARAM_JAVA_HOME, PARAM_MAIN_METHOD, is_blank};
use crate::error::{DaemonError, descriptor as errors};

/// Valid application types that the daemon script is capable of running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationKind {
    /// A java application, started by invoking the JVM with a main class
    Java,
    /// A generic executable
    Executable,
}

impl ApplicationKind {
    /// Every kind, in the order they are listed in messages
    pub const ALL: [ApplicationKind; 2] = [ApplicationKind::Java, ApplicationKind::Executable];

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationKind::Java => "JAVA",
            ApplicationKind::Executable => "EXECUTABLE",
        }
    }

    /// The name used for `APP_TYPE` and the `daemon-<kind>` extension script
    pub fn lowercase(self) -> String {
        self.as_str().to_ascii_lowercase()
    }

    /// Supported kinds rendered as `[JAVA, EXECUTABLE]`
    pub fn supported_list() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|k| k.as_str()).collect();
        format!("[{}]", names.join(", "))
    }

    /// Parameters this kind needs that are blank in `descriptor`
    ///
    /// Every requirement is checked, so a descriptor missing several
    /// parameters reports all of them.
    pub fn missing_parameters(self, descriptor: &Descriptor) -> Vec<&'static str> {
        let required = match self {
            ApplicationKind::Executable => {
                vec![(PARAM_EXECUTABLE, descriptor.executable_path.as_deref())]
            }
            ApplicationKind::Java => vec![
                (PARAM_JAVA_HOME, descriptor.runtime_home.as_deref()),
                (PARAM_MAIN_METHOD, descriptor.main_entry.as_deref()),
            ],
        };

        required
            .into_iter()
            .filter(|(_, value)| is_blank(*value))
            .map(|(name, _)| name)
            .collect()
    }
}

impl fmt::Display for ApplicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationKind {
    type Err = DaemonError;

    /// Names match exactly; `java` is not `JAVA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(errors::missing_kind());
        }

        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| errors::unsupported_kind(s))
    }
}
