use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info};

/// Shutdown coordinator shared by every server in the process.
///
/// One task waits for SIGINT/SIGTERM via [`ShutdownCoordinator::wait_for_signal`];
/// each server awaits [`ShutdownCoordinator::notified`] as its graceful-shutdown future.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    tx: broadcast::Sender<()>,
    shutdown_initiated: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    /// Create a new shutdown coordinator.
    ///
    /// Returns the coordinator and a receiver for shutdown signals.
    pub fn new() -> (Self, broadcast::Receiver<()>) {
        let (tx, rx) = broadcast::channel(1);
        let coordinator = Self {
            tx,
            shutdown_initiated: Arc::new(AtomicBool::new(false)),
        };
        (coordinator, rx)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown_initiated.load(Ordering::SeqCst)
    }

    /// Initiate shutdown and notify all subscribers. Only the first call has an effect.
    pub fn shutdown(&self) {
        if self
            .shutdown_initiated
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            info!("Initiating graceful shutdown");
            let _ = self.tx.send(());
        }
    }

    /// Future that resolves once shutdown has been initiated.
    ///
    /// Resolves immediately if shutdown already happened before the call.
    pub fn notified(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.tx.subscribe();
        let initiated = self.shutdown_initiated.clone();

        async move {
            if initiated.load(Ordering::SeqCst) {
                return;
            }
            let _ = rx.recv().await;
        }
    }

    /// Wait for SIGTERM or SIGINT, then initiate shutdown.
    pub async fn wait_for_signal(&self) {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                }
                Err(e) => {
                    error!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
            },
            _ = terminate => {
                info!("Received SIGTERM, initiating graceful shutdown");
            },
        }

        self.shutdown();
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_notifies_subscribers() {
        let (coordinator, mut rx) = ShutdownCoordinator::new();
        let waiter = tokio::spawn(coordinator.notified());

        assert!(!coordinator.is_shutting_down());
        coordinator.shutdown();

        assert!(coordinator.is_shutting_down());
        assert!(rx.recv().await.is_ok());
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish")
            .unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_is_idempotent() {
        let (coordinator, mut rx) = ShutdownCoordinator::new();
        coordinator.shutdown();
        coordinator.shutdown();

        assert!(rx.recv().await.is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_notified_after_shutdown_resolves_immediately() {
        let coordinator = ShutdownCoordinator::default();
        coordinator.shutdown();

        tokio::time::timeout(Duration::from_millis(100), coordinator.notified())
            .await
            .expect("should not block after shutdown");
    }
}
