//! `.xit` format versions.

/// Supported `.xit` file versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XitVersion {
    V1_0,
    V2_0,
    /// Any other `2.x` version; read with the v2 reader.
    V2x,
    Unknown,
}

impl XitVersion {
    /// Determines the version named by the `version` element text.
    ///
    /// `"1"` and `"1.0"` select v1; `"2"` and `"2.0"` select v2; any other
    /// `"2.x"` is read tolerantly with the v2 reader; anything else is
    /// unknown.
    #[must_use]
    pub fn from_version_str(version_str: &str) -> Self {
        match version_str {
            "1" | "1.0" => Self::V1_0,
            "2" | "2.0" => Self::V2_0,
            other => {
                let prefix = other.split('.').next().unwrap_or("");
                if prefix == "2" {
                    Self::V2x
                } else {
                    Self::Unknown
                }
            }
        }
    }
}
