//! Generate static files

use anyhow::Result;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebouncedEvent};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// Quiet period a batch of file events must settle for before a rebuild
const WATCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Load every page and generate the site
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let pages = ContentLoader::new(site).load_pages()?;
    let groups: usize = pages.iter().map(|p| p.groups.len()).sum();
    tracing::info!("Loaded {} pages ({} groups)", pages.len(), groups);

    let generator = Generator::new(site)?;
    let written = generator.generate(&pages)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} pages in {:.2}s",
        written,
        duration.as_secs_f64()
    );

    Ok(())
}

/// Watch for file changes and regenerate
pub async fn watch(site: &Site) -> Result<()> {
    tracing::info!("Watching for changes. Press Ctrl+C to stop.");
    let site = site.clone();
    tokio::task::spawn_blocking(move || watch_and_rebuild(&site, |_| {})).await?
}

/// Block on debounced changes under the source directory and `_config.yml`.
/// Each batch is rebuilt once it has settled; `on_rebuilt` runs after every
/// successful build with the reloaded site.
pub fn watch_and_rebuild<F>(site: &Site, mut on_rebuilt: F) -> Result<()>
where
    F: FnMut(&Site),
{
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(WATCH_DEBOUNCE, tx)?;

    fs::create_dir_all(&site.source_dir)?;
    let config_path = site.base_dir.join("_config.yml");
    for (path, mode) in [
        (&site.source_dir, RecursiveMode::Recursive),
        (&config_path, RecursiveMode::NonRecursive),
    ] {
        if path.exists() {
            debouncer.watcher().watch(path, mode)?;
            tracing::debug!("Watching: {:?}", path);
        }
    }

    for result in rx {
        let events = match result {
            Ok(events) => events,
            Err(e) => {
                tracing::error!("Watch error: {:?}", e);
                continue;
            }
        };

        if let Some(site) = rebuild(site, &events) {
            on_rebuilt(&site);
        }
    }

    Ok(())
}

/// Rebuild after a settled batch of events. Returns the reloaded site when a
/// relevant file changed and the build succeeded.
fn rebuild(site: &Site, events: &[DebouncedEvent]) -> Option<Site> {
    let changed = changed_paths(events);
    if changed.is_empty() {
        return None;
    }
    for path in &changed {
        tracing::info!("File changed: {}", path.display());
    }

    match reload(site).and_then(|site| run(&site).map(|()| site)) {
        Ok(site) => Some(site),
        Err(e) => {
            tracing::error!("Generation failed: {:#}", e);
            None
        }
    }
}

/// Paths in a batch worth rebuilding for; editor backups and VCS/OS noise are dropped
fn changed_paths(events: &[DebouncedEvent]) -> Vec<&Path> {
    events
        .iter()
        .map(|event| event.path.as_path())
        .filter(|path| {
            let path = path.to_string_lossy();
            !path.contains(".git") && !path.contains(".DS_Store") && !path.ends_with('~')
        })
        .collect()
}

/// Re-read `_config.yml` so config edits take effect on the next build
pub fn reload(site: &Site) -> Result<Site> {
    Site::new(&site.base_dir)
}
