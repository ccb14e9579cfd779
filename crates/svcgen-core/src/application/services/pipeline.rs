//! Pipeline Orchestrator - the main application entry point.
//!
//! This service coordinates a whole batch:
//! 1. Generate the artifacts of every service, rolling back a failed one
//! 2. Re-scan the interface directory for the known service set
//! 3. Rebuild both registry files from that set
//! 4. Run the external generation script
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::PathBuf;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ScriptRunner, TemplateRenderer},
        report::{PipelineReport, RemovalReport},
        services::{
            ArtifactGenerator, ExternalToolInvoker, RegistryReader, RegistryScanner,
            RegistryUpdater, RollbackManager,
        },
    },
    domain::{
        ArtifactPaths, DomainValidator as validator, EndpointRegistry, PipelineStage,
        RegistryFiles, ServiceLayout,
    },
    error::SvcgenResult,
};

/// Where the pipeline reads and writes, beyond the per-service layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub layout: ServiceLayout,
    pub registry: RegistryFiles,
    pub script: PathBuf,
}

impl PipelineSettings {
    /// Defaults relative to the layout base: `server/` and `proto-gen.sh`.
    pub fn new(layout: ServiceLayout) -> Self {
        let base = layout.base().to_path_buf();
        Self {
            registry: RegistryFiles::new(base.join("server")),
            script: base.join("proto-gen.sh"),
            layout,
        }
    }

    /// Directory scanned to recover the known service set. Always the
    /// layout's API interface dir, where the generator writes `<name>.<ext2>`.
    pub fn interface_dir(&self) -> PathBuf {
        self.layout.api_interface_dir()
    }

    pub fn with_registry(mut self, registry: RegistryFiles) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.script = script.into();
        self
    }
}

/// Tracks the stage of one run and logs every transition.
#[derive(Debug, Default)]
struct StageTracker {
    stage: PipelineStage,
}

impl StageTracker {
    fn advance(&mut self, next: PipelineStage) -> SvcgenResult<()> {
        let from = self.stage;
        self.stage = from.transition(next)?;
        debug!(from = %from, to = %next, "Pipeline stage changed");
        Ok(())
    }

    fn fail(&mut self, cause: &dyn std::fmt::Display) {
        if self.stage.is_terminal() {
            return;
        }
        error!(stage = %self.stage, error = %cause, "Pipeline failed");
        self.stage = PipelineStage::Failed;
    }
}

/// Main generation service.
pub struct GenerationPipeline {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    runner: Box<dyn ScriptRunner>,
    settings: PipelineSettings,
}

impl GenerationPipeline {
    /// Create a new pipeline with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use svcgen_core::application::{GenerationPipeline, PipelineSettings};
    /// use svcgen_core::domain::ServiceLayout;
    ///
    /// let pipeline = GenerationPipeline::new(
    ///     filesystem, // impl Filesystem
    ///     renderer,   // impl TemplateRenderer
    ///     runner,     // impl ScriptRunner
    ///     PipelineSettings::new(ServiceLayout::new(".")),
    /// );
    /// let report = pipeline.run(&["users"])?;
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        runner: Box<dyn ScriptRunner>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            runner,
            settings,
        }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Generate a batch of services, rebuild the registries and run the
    /// script.
    ///
    /// Names are validated before anything is written. A failing service is
    /// rolled back and halts the batch; services generated before it stay.
    #[instrument(skip_all, fields(services = names.len()))]
    pub fn run<S: AsRef<str>>(&self, names: &[S]) -> SvcgenResult<PipelineReport> {
        Self::validate(names)?;
        info!("Generating {} service(s)", names.len());

        let mut tracker = StageTracker::default();
        let result = self.execute(names, &mut tracker);
        if let Err(e) = &result {
            tracker.fail(e);
        }
        result
    }

    /// Roll back the named services and rebuild the registries.
    ///
    /// The script is not run.
    #[instrument(skip_all, fields(services = names.len()))]
    pub fn remove<S: AsRef<str>>(&self, names: &[S]) -> SvcgenResult<RemovalReport> {
        Self::validate(names)?;

        let rollbacks: Vec<_> = names
            .iter()
            .map(|name| self.rollback_manager().rollback(name.as_ref()))
            .collect();

        let services = self.scanner().scan(&self.settings.interface_dir())?;
        let registries = self.updater().update(&services)?;

        info!(remaining = services.len(), "Services removed");
        Ok(RemovalReport {
            rollbacks,
            services,
            registries,
        })
    }

    /// Destinations a run would write, without touching the filesystem.
    pub fn plan<S: AsRef<str>>(&self, names: &[S]) -> SvcgenResult<Vec<ArtifactPaths>> {
        Self::validate(names)?;
        names
            .iter()
            .map(|name| self.settings.layout.resolve(name.as_ref()).map_err(Into::into))
            .collect()
    }

    /// The service set currently on disk.
    pub fn known_services(&self) -> SvcgenResult<Vec<String>> {
        self.scanner().scan(&self.settings.interface_dir())
    }

    /// The entries each registry file currently declares.
    pub fn registries(&self) -> SvcgenResult<Vec<EndpointRegistry>> {
        RegistryReader::new(self.filesystem.as_ref(), &self.settings.registry).read_all()
    }

    /// Create the interface and registry directories plus any missing
    /// registry file, rendered from the current service set.
    pub fn initialize_registries(&self, overwrite: bool) -> SvcgenResult<Vec<PathBuf>> {
        self.filesystem.create_dir_all(&self.settings.interface_dir())?;
        let services = self.known_services()?;
        self.updater().initialize(&services, overwrite)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn validate<S: AsRef<str>>(names: &[S]) -> SvcgenResult<()> {
        if names.is_empty() {
            return Err(ApplicationError::ValidationFailed(
                "at least one service name is required".into(),
            )
            .into());
        }
        validator::validate_batch(names)?;
        Ok(())
    }

    fn execute<S: AsRef<str>>(
        &self,
        names: &[S],
        tracker: &mut StageTracker,
    ) -> SvcgenResult<PipelineReport> {
        tracker.advance(PipelineStage::GeneratingArtifacts)?;
        let generator = ArtifactGenerator::new(
            self.filesystem.as_ref(),
            self.renderer.as_ref(),
            &self.settings.layout,
        );

        let mut outcomes = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let outcome = generator.generate(name)?;

            if let Some(failure) = &outcome.failure {
                warn!(service = name, "Generation failed, rolling back");
                let rollback = self.rollback_manager().rollback(name);
                if !rollback.is_complete() {
                    warn!(
                        service = name,
                        failures = rollback.failures.len(),
                        "Rollback left files behind"
                    );
                }
                return Err(failure.error.clone());
            }

            info!(service = name, files = outcome.succeeded.len(), "Service generated");
            outcomes.push(outcome);
        }

        tracker.advance(PipelineStage::ScanningRegistry)?;
        let services = self.scanner().scan(&self.settings.interface_dir())?;

        tracker.advance(PipelineStage::UpdatingRegistry)?;
        let registries = self.updater().update(&services)?;

        tracker.advance(PipelineStage::InvokingScript)?;
        self.invoker().invoke(&self.settings.script)?;

        tracker.advance(PipelineStage::Done)?;
        info!("Pipeline completed successfully");

        Ok(PipelineReport {
            outcomes,
            services,
            registries,
            stage: tracker.stage,
        })
    }

    fn rollback_manager(&self) -> RollbackManager<'_> {
        RollbackManager::new(self.filesystem.as_ref(), &self.settings.layout)
    }

    fn scanner(&self) -> RegistryScanner<'_> {
        RegistryScanner::new(
            self.filesystem.as_ref(),
            self.settings.layout.interface_extension(),
        )
    }

    fn updater(&self) -> RegistryUpdater<'_> {
        RegistryUpdater::new(
            self.filesystem.as_ref(),
            self.renderer.as_ref(),
            &self.settings.registry,
        )
    }

    fn invoker(&self) -> ExternalToolInvoker<'_> {
        ExternalToolInvoker::new(self.runner.as_ref())
    }
}

impl std::fmt::Debug for GenerationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationPipeline")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
