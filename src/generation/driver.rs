//! Generation driver - runs one backend end to end

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::core::{Error, GeneratorConfig};
use crate::generation::{Backend, GenerationSummary, MetadataSource, OutputService};
use crate::translation::TypeTranslator;

/// Coordinates a generation run: prepare the destination, pull metadata,
/// let the backend generate, then persist every artifact.
///
/// Every failure aborts the run; nothing is retried and files already
/// written are left in place.
pub struct GenerationDriver {
    config: GeneratorConfig,
    source: Arc<dyn MetadataSource>,
    output: Arc<dyn OutputService>,
}

impl GenerationDriver {
    pub fn new(
        config: GeneratorConfig,
        source: Arc<dyn MetadataSource>,
        output: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            config,
            source,
            output,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub async fn run(&self, backend: &dyn Backend) -> Result<GenerationSummary, Error> {
        let started = Instant::now();
        let language = backend.language();
        info!(
            language = %language,
            dest = %self.config.dest_dir.display(),
            "Generating bindings"
        );

        self.output.prepare(self.config.clear_dir).await?;

        // Fails fast when the server is unreachable, before any real work
        let server_status = self.source.about().await?;
        debug!(
            base_url = %self.config.base_url,
            entries = server_status.len(),
            "Connected to server"
        );

        let snapshot = self.source.snapshot().await?;
        debug!(
            schemas = snapshot.schemas.len(),
            enums = snapshot.enums.len(),
            endpoint_groups = snapshot.endpoint_groups.len(),
            "Fetched metadata"
        );

        let translator =
            TypeTranslator::new(backend.renderer()).with_diagnostics(self.config.verbose);
        let artifacts = backend.generate(&snapshot, &translator)?;

        let mut files_written = Vec::with_capacity(artifacts.len());
        for artifact in &artifacts {
            let written = self.output.write(&artifact.path, &artifact.content).await?;
            files_written.push(written);
        }
        info!(files = files_written.len(), "Bindings written");

        Ok(GenerationSummary {
            language,
            files_written,
            server_status,
            translation_table: translator
                .diagnostics_enabled()
                .then(|| translator.render_translation_table()),
            elapsed: started.elapsed(),
        })
    }
}

/// Server status as an aligned two-column table
pub fn format_server_status(
    base_url: &str,
    entries: &[crate::infrastructure::metadata::AboutEntry],
) -> String {
    let header = format!("Connected to a server at {base_url}");
    let name_width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    let value_width = entries.iter().map(|e| e.value.len()).max().unwrap_or(0);
    let rule = "-".repeat(header.len().max(name_width + value_width + 2));

    let mut lines = vec![rule.clone(), header, String::new()];
    lines.extend(entries.iter().map(|e| {
        format!(
            "{}:{}{}",
            e.name,
            " ".repeat(1 + name_width - e.name.len()),
            e.value
        )
    }));
    lines.push(rule);
    lines.join("\n")
}
