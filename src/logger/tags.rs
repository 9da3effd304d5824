/// Log tags identifying the subsystem a message came from
///
/// Tags drive per-module debug gating: `--debug-<tag>` enables Debug
/// level output for that tag only.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Webserver,
    Orchestrator,
    Cache,
    Store,
    Engine,
    Metrics,
}

impl LogTag {
    /// Display name used in formatted log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Config => "CONFIG",
            LogTag::Webserver => "WEBSERVER",
            LogTag::Orchestrator => "ORCHESTRATOR",
            LogTag::Cache => "CACHE",
            LogTag::Store => "STORE",
            LogTag::Engine => "ENGINE",
            LogTag::Metrics => "METRICS",
        }
    }

    /// Key used for `--debug-<key>` / `--verbose-<key>` flags
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Config => "config",
            LogTag::Webserver => "webserver",
            LogTag::Orchestrator => "orchestrator",
            LogTag::Cache => "cache",
            LogTag::Store => "store",
            LogTag::Engine => "engine",
            LogTag::Metrics => "metrics",
        }
    }

    /// All known tags (used when scanning debug flags at startup)
    pub fn all() -> &'static [LogTag] {
        &[
            LogTag::System,
            LogTag::Config,
            LogTag::Webserver,
            LogTag::Orchestrator,
            LogTag::Cache,
            LogTag::Store,
            LogTag::Engine,
            LogTag::Metrics,
        ]
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
