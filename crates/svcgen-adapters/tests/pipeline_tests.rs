//! End-to-end pipeline tests over the real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use svcgen_adapters::{
    InMemoryTemplates, LocalFilesystem, MemoryFilesystem, StaticScriptRunner,
};
use svcgen_core::{
    application::{GenerationPipeline, PipelineSettings, ports::Filesystem},
    domain::{EndpointRegistry, PipelineStage, RegistryKind, ServiceLayout},
    error::ErrorCategory,
};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Layout with an empty interface directory and empty registries.
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let pipeline = GenerationPipeline::new(
            Box::new(LocalFilesystem::new()),
            Box::new(InMemoryTemplates::builtin()),
            Box::new(StaticScriptRunner::succeeding()),
            PipelineSettings::new(ServiceLayout::new(dir.path())),
        );
        pipeline.initialize_registries(true).unwrap();
        Self { dir }
    }

    fn base(&self) -> &Path {
        self.dir.path()
    }

    fn pipeline(&self, templates: InMemoryTemplates, runner: StaticScriptRunner) -> GenerationPipeline {
        GenerationPipeline::new(
            Box::new(LocalFilesystem::new()),
            Box::new(templates),
            Box::new(runner),
            PipelineSettings::new(ServiceLayout::new(self.base())),
        )
    }

    fn artifacts(&self, name: &str) -> [PathBuf; 4] {
        [
            self.base().join(format!("api/{name}/{name}.go")),
            self.base().join(format!("services/{name}/{name}.go")),
            self.base().join(format!("protos/api/{name}.proto")),
            self.base().join(format!("protos/services/{name}.proto")),
        ]
    }

    fn registry(&self, kind: RegistryKind) -> EndpointRegistry {
        let path = self.base().join("server").join(kind.default_file_name());
        EndpointRegistry::parse(kind, &fs::read_to_string(path).unwrap())
    }
}

#[test]
fn generates_four_files_per_service_and_registers_all() {
    let ws = Workspace::new();
    let runner = StaticScriptRunner::succeeding();

    let report = ws
        .pipeline(InMemoryTemplates::builtin(), runner.clone())
        .run(&["users", "orders"])
        .unwrap();

    for name in ["users", "orders"] {
        for path in ws.artifacts(name) {
            assert!(path.is_file(), "{} missing", path.display());
        }
    }
    for kind in RegistryKind::ALL {
        assert_eq!(ws.registry(kind).entries(), ["orders", "users"]);
    }
    assert_eq!(report.stage, PipelineStage::Done);
    assert_eq!(runner.invocations(), vec![ws.base().join("proto-gen.sh")]);
}

#[test]
fn rendering_is_idempotent() {
    let ws = Workspace::new();
    let pipeline = ws.pipeline(InMemoryTemplates::builtin(), StaticScriptRunner::succeeding());

    pipeline.run(&["users"]).unwrap();
    let first: Vec<String> = ws
        .artifacts("users")
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();

    pipeline.run(&["users"]).unwrap();
    let second: Vec<String> = ws
        .artifacts("users")
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn failed_artifact_rolls_back_the_whole_service() {
    let ws = Workspace::new();
    let runner = StaticScriptRunner::succeeding();
    let templates = InMemoryTemplates::builtin().without_template("api_proto");

    let err = ws
        .pipeline(templates, runner.clone())
        .run(&["users"])
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Template);
    for path in ws.artifacts("users") {
        assert!(!path.exists(), "{} left behind", path.display());
    }
    assert!(!ws.base().join("api/users").exists());
    assert!(!ws.base().join("services/users").exists());
    assert!(runner.invocations().is_empty());
}

#[test]
fn io_failure_keeps_earlier_services() {
    let ws = Workspace::new();
    let pipeline = ws.pipeline(InMemoryTemplates::builtin(), StaticScriptRunner::succeeding());
    pipeline.run(&["users"]).unwrap();

    // A regular file where the service directory of "orders" must go.
    fs::write(ws.base().join("services/orders"), "").unwrap();

    let err = pipeline.run(&["billing", "orders"]).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Io);
    assert!(!ws.base().join("api/orders").exists());
    assert!(!ws.base().join("protos/api/orders.proto").exists());
    for path in ws.artifacts("billing") {
        assert!(path.is_file(), "{} missing", path.display());
    }
    // The registries were not rebuilt after the failing batch.
    assert_eq!(ws.registry(RegistryKind::Http).entries(), ["users"]);
}

#[test]
fn registries_are_rebuilt_from_scan() {
    let ws = Workspace::new();
    for name in ["a", "b", "c"] {
        fs::write(ws.base().join(format!("protos/api/{name}.proto")), "").unwrap();
    }
    fs::write(ws.base().join("protos/api/notes.txt"), "").unwrap();

    let report = ws
        .pipeline(InMemoryTemplates::builtin(), StaticScriptRunner::succeeding())
        .run(&["a"])
        .unwrap();

    assert_eq!(report.services, vec!["a", "b", "c"]);
    for kind in RegistryKind::ALL {
        assert_eq!(ws.registry(kind).entries(), ["a", "b", "c"]);
    }
}

#[test]
fn naming_variants_reach_templates() {
    let ws = Workspace::new();
    ws.pipeline(InMemoryTemplates::builtin(), StaticScriptRunner::succeeding())
        .run(&["userAccount"])
        .unwrap();

    let proto = fs::read_to_string(ws.base().join("protos/api/userAccount.proto")).unwrap();
    assert!(proto.contains("get: \"/v1/user\""));
    assert!(proto.contains("// User Account API."));
}

#[test]
fn empty_batch_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let pipeline = GenerationPipeline::new(
        Box::new(fs.clone()),
        Box::new(InMemoryTemplates::builtin()),
        Box::new(StaticScriptRunner::succeeding()),
        PipelineSettings::new(ServiceLayout::new("/base")),
    );

    let err = pipeline.run::<&str>(&[]).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(fs.write_count(), 0);
}

#[test]
fn script_failure_keeps_generated_files_and_registries() {
    let ws = Workspace::new();
    let runner = StaticScriptRunner::failing(1);

    let err = ws
        .pipeline(InMemoryTemplates::builtin(), runner.clone())
        .run(&["users"])
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Script);
    assert!(err.is_retryable());
    for path in ws.artifacts("users") {
        assert!(path.is_file());
    }
    assert_eq!(ws.registry(RegistryKind::Rpc).entries(), ["users"]);
    assert_eq!(runner.invocations().len(), 1);
}

#[test]
fn missing_registry_file_is_io_error() {
    let ws = Workspace::new();
    fs::remove_file(ws.base().join("server/registeredGRPCEndpoints.go")).unwrap();

    let err = ws
        .pipeline(InMemoryTemplates::builtin(), StaticScriptRunner::succeeding())
        .run(&["users"])
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Io);
    // Generation itself succeeded and is not undone.
    assert!(ws.artifacts("users")[0].is_file());
}

#[test]
fn remove_rolls_back_and_rebuilds_registries() {
    let ws = Workspace::new();
    let pipeline = ws.pipeline(InMemoryTemplates::builtin(), StaticScriptRunner::succeeding());
    pipeline.run(&["users", "orders"]).unwrap();

    let report = pipeline.remove(&["orders"]).unwrap();

    assert_eq!(report.services, vec!["users"]);
    assert!(report.rollbacks[0].is_complete());
    for path in ws.artifacts("orders") {
        assert!(!path.exists());
    }
    assert_eq!(ws.registry(RegistryKind::Http).entries(), ["users"]);
}

#[test]
fn memory_filesystem_runs_the_same_pipeline() {
    let fs = MemoryFilesystem::new();
    let settings = PipelineSettings::new(ServiceLayout::new("/srv"));
    let pipeline = GenerationPipeline::new(
        Box::new(fs.clone()),
        Box::new(InMemoryTemplates::builtin()),
        Box::new(StaticScriptRunner::succeeding()),
        settings,
    );
    pipeline.initialize_registries(false).unwrap();

    pipeline.run(&["users"]).unwrap();

    assert!(fs.exists(Path::new("/srv/api/users/users.go")));
    let registry = fs
        .contents(Path::new("/srv/server/registeredHTTPEndpoints.go"))
        .unwrap();
    assert!(registry.contains("users.RegisterHTTPEndpoint,"));
}

#[test]
fn broken_rpc_template_leaves_both_registries_untouched() {
    let ws = Workspace::new();
    ws.pipeline(InMemoryTemplates::builtin(), StaticScriptRunner::succeeding())
        .run(&["orders"])
        .unwrap();

    let runner = StaticScriptRunner::succeeding();
    let templates =
        InMemoryTemplates::builtin().with_template("rpc_registry", "{{ MISSING }}");
    let err = ws
        .pipeline(templates, runner.clone())
        .run(&["users"])
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Template);
    let http = ws.registry(RegistryKind::Http);
    assert_eq!(http.entries(), ["orders"]);
    assert_eq!(http.entries(), ws.registry(RegistryKind::Rpc).entries());
    assert!(runner.invocations().is_empty());
}

#[test]
fn dotted_name_is_rejected_before_any_write() {
    let ws = Workspace::new();

    let err = ws
        .pipeline(InMemoryTemplates::builtin(), StaticScriptRunner::succeeding())
        .run(&["a.b"])
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Validation);
    for path in ws.artifacts("a.b") {
        assert!(!path.exists());
    }
}
