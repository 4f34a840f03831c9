use crate::current::{self, CurrentSettings};
use crate::paths::{DesktopPaths, SearchPaths};
use crate::scanner::{self, Inventory};
use crate::styles::available_styles;
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Result of one full discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Discovery {
    pub inventory: Inventory,
    pub styles: Vec<String>,
    pub current: CurrentSettings,
}

/// Scan every category, compute the available styles and probe the current
/// desktop settings.
pub fn discover(paths: &SearchPaths, desktop: &DesktopPaths) -> Discovery {
    let inventory = scanner::scan_all(paths);
    let styles: Vec<String> = available_styles(&inventory.gtk_themes, &inventory.wallpapers)
        .into_iter()
        .map(str::to_string)
        .collect();
    let current = current::probe(desktop);

    log::info!(
        "Discovered {} assets and {} styles",
        inventory.total(),
        styles.len()
    );

    Discovery {
        inventory,
        styles,
        current,
    }
}

/// Discovery running on the blocking pool as a single cancellable unit.
///
/// Dropping the task cancels it; [`DiscoveryTask::wait`] reports the result
/// once, or `None` when the pass was cancelled or panicked.
pub struct DiscoveryTask {
    handle: JoinHandle<Option<Discovery>>,
    cancel_token: CancellationToken,
    guard: DropGuard,
}

impl DiscoveryTask {
    /// Start a discovery pass. Must be called from within a tokio runtime.
    pub fn spawn(paths: SearchPaths, desktop: DesktopPaths) -> Self {
        let cancel_token = CancellationToken::new();
        let token = cancel_token.clone();

        let handle = tokio::spawn(async move {
            let work = tokio::task::spawn_blocking(move || discover(&paths, &desktop));

            tokio::select! {
                result = work => match result {
                    Ok(discovery) => Some(discovery),
                    Err(e) => {
                        log::error!("Discovery task failed: {e}");
                        None
                    }
                },
                () = token.cancelled() => {
                    log::info!("Discovery cancelled");
                    None
                }
            }
        });

        Self {
            handle,
            guard: cancel_token.clone().drop_guard(),
            cancel_token,
        }
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    pub async fn wait(self) -> Option<Discovery> {
        let Self { handle, guard, .. } = self;
        let _token = guard.disarm();
        handle.await.ok().flatten()
    }
}
