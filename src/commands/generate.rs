//! Generate static files

use anyhow::Result;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebouncedEvent};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::content::ContentLoader;
use crate::generator::Generator;
use crate::{Site, CONFIG_FILE};

/// Load all posts and write the site
pub fn run(site: &Site) -> Result<()> {
    let start = Instant::now();

    let posts = ContentLoader::new(site).load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    let written = Generator::new(site)?.generate(&posts)?;

    tracing::info!(
        "Generated {} pages in {:.2}s",
        written,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Watch content, static files and config, regenerating on change
pub async fn watch(site: &Site) -> Result<()> {
    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let site = site.clone();
    // The debouncer blocks on a std channel
    tokio::task::spawn_blocking(move || watch_changes(&site, || {})).await?
}

/// Regenerate the site on debounced file changes, calling `on_regenerated`
/// after each successful build. Blocks until the watcher goes away.
pub fn watch_changes(site: &Site, mut on_regenerated: impl FnMut()) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for dir in [&site.content_dir, &site.static_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }
    let config_path = site.base_dir.join(CONFIG_FILE);
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                if !needs_rebuild(&events) {
                    continue;
                }

                tracing::info!("Change detected, regenerating...");
                match reload(site).and_then(|site| run(&site)) {
                    Ok(()) => on_regenerated(),
                    Err(e) => tracing::error!("Generation failed: {}", e),
                }
            }
            Ok(Err(e)) => tracing::error!("Watch error: {:?}", e),
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// A debounced batch triggers a rebuild if any path in it matters
fn needs_rebuild(events: &[DebouncedEvent]) -> bool {
    events.iter().any(|e| is_relevant(&e.path))
}

/// Editor swap files and VCS noise do not trigger rebuilds
fn is_relevant(path: &Path) -> bool {
    let path = path.to_string_lossy();
    !path.contains(".git")
        && !path.contains(".DS_Store")
        && !path.ends_with('~')
        && !path.ends_with(".swp")
}

/// Re-open the site so config edits take effect
pub fn reload(site: &Site) -> Result<Site> {
    Site::new(&site.base_dir)
}
