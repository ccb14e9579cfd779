//! Domain value objects: ArtifactKind, RegistryKind, PipelineStage, ScriptStatus.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each one knows its string representation and the fixed conventions that
//! hang off it (template ids, default file names). Nothing here touches I/O.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` / `template_id` arms here
//! 3. Add it to the `ALL` array in generation order
//! 4. Ship a matching template in `svcgen-adapters::builtin_templates`

use crate::domain::error::DomainError;
use serde::Serialize;
use std::fmt;

// ── ArtifactKind ──────────────────────────────────────────────────────────────

/// One of the four files generated for every service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// `<base>/api/<name>/<name>.<ext>`
    ApiStub,
    /// `<base>/services/<name>/<name>.<ext>`
    ServiceStub,
    /// `<base>/protos/api/<name>.<ext2>`
    ApiInterface,
    /// `<base>/protos/services/<name>.<ext2>`
    ServiceInterface,
}

impl ArtifactKind {
    /// Every artifact kind, in the order the generator writes them.
    pub const ALL: [Self; 4] = [
        Self::ApiStub,
        Self::ServiceStub,
        Self::ApiInterface,
        Self::ServiceInterface,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApiStub => "api-stub",
            Self::ServiceStub => "service-stub",
            Self::ApiInterface => "api-interface",
            Self::ServiceInterface => "service-interface",
        }
    }

    /// Identifier of the template this artifact is rendered from.
    pub const fn template_id(&self) -> &'static str {
        match self {
            Self::ApiStub => "api_stub",
            Self::ServiceStub => "service_stub",
            Self::ApiInterface => "api_proto",
            Self::ServiceInterface => "service_proto",
        }
    }

}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RegistryKind ──────────────────────────────────────────────────────────────

/// The two aggregator files that enumerate every known service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKind {
    /// HTTP gateway endpoint registrations.
    Http,
    /// gRPC endpoint registrations.
    Rpc,
}

impl RegistryKind {
    /// Both registries, in the order they are rewritten.
    pub const ALL: [Self; 2] = [Self::Http, Self::Rpc];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Rpc => "rpc",
        }
    }

    pub const fn template_id(&self) -> &'static str {
        match self {
            Self::Http => "http_registry",
            Self::Rpc => "rpc_registry",
        }
    }

    pub const fn default_file_name(&self) -> &'static str {
        match self {
            Self::Http => "registeredHTTPEndpoints.go",
            Self::Rpc => "registeredGRPCEndpoints.go",
        }
    }

    /// Name of the per-service function a registry entry references,
    /// e.g. `users.RegisterHTTPEndpoint`.
    pub const fn register_function(&self) -> &'static str {
        match self {
            Self::Http => "RegisterHTTPEndpoint",
            Self::Rpc => "RegisterGRPCEndpoint",
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PipelineStage ─────────────────────────────────────────────────────────────

/// Where a single pipeline run currently is.
///
/// ```text
/// Idle → GeneratingArtifacts → ScanningRegistry → UpdatingRegistry → InvokingScript → Done
///   └──────────────┴────────────────┴──────────────────┴─────────────────┴──→ Failed
/// ```
///
/// Nothing is retried automatically; `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineStage {
    #[default]
    Idle,
    GeneratingArtifacts,
    ScanningRegistry,
    UpdatingRegistry,
    InvokingScript,
    Done,
    Failed,
}

impl PipelineStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::GeneratingArtifacts => "generating-artifacts",
            Self::ScanningRegistry => "scanning-registry",
            Self::UpdatingRegistry => "updating-registry",
            Self::InvokingScript => "invoking-script",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// The stage that follows on success, if any.
    pub const fn successor(&self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::GeneratingArtifacts),
            Self::GeneratingArtifacts => Some(Self::ScanningRegistry),
            Self::ScanningRegistry => Some(Self::UpdatingRegistry),
            Self::UpdatingRegistry => Some(Self::InvokingScript),
            Self::InvokingScript => Some(Self::Done),
            Self::Done | Self::Failed => None,
        }
    }

    pub fn can_transition_to(&self, next: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        next == Self::Failed || self.successor() == Some(next)
    }

    /// Move to `next`, rejecting anything the state machine does not allow.
    pub fn transition(self, next: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::InvalidTransition {
                from: self.as_str(),
                to: next.as_str(),
            })
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ScriptStatus ──────────────────────────────────────────────────────────────

/// How an external script finished.
///
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScriptStatus {
    code: Option<i32>,
}

impl ScriptStatus {
    pub const fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub const fn terminated() -> Self {
        Self { code: None }
    }

    pub const fn code(&self) -> Option<i32> {
        self.code
    }

    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

impl fmt::Display for ScriptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => f.write_str("terminated by signal"),
        }
    }
}
