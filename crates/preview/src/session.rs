//! Hand-off between the message source and the UI thread.
//!
//! The host pushes configs through a [`ConfigSender`]; only the most recent one is kept.
//! The UI side polls its [`PreviewSession`] on a short interval and re-renders whenever
//! a newer config has arrived. Neither side ever blocks on the other.
use crate::error::PreviewError;
use crate::renderer::render_preview;
use crate::widget::Widget;
use rclayout_types::LayoutConfig;
use std::time::Duration;
use tokio::sync::watch;

pub const INITIAL_POLL_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Opens a preview session showing `initial`.
pub fn channel(initial: LayoutConfig) -> Result<(ConfigSender, PreviewSession), PreviewError> {
    let tree = render_preview(&initial)?;
    let (tx, rx) = watch::channel(initial);
    Ok((
        ConfigSender { tx },
        PreviewSession {
            rx,
            tree,
            version: 0,
        },
    ))
}

/// Writer half: stages the latest config for the session.
#[derive(Debug)]
pub struct ConfigSender {
    tx: watch::Sender<LayoutConfig>,
}

impl ConfigSender {
    /// Replaces the staged config. Configs never picked up by a poll are dropped.
    pub fn publish(&self, config: LayoutConfig) {
        self.tx.send_replace(config);
    }

    /// Handles one inbound message. Only payloads whose first character is `{` are
    /// parsed; anything else, or a payload that fails to parse as a layout, is ignored.
    /// Returns whether a config was published.
    pub fn ingest_message(&self, payload: &str) -> bool {
        if !payload.starts_with('{') {
            log::debug!("Ignoring non-JSON preview message ({} bytes)", payload.len());
            return false;
        }
        match LayoutConfig::from_json(payload) {
            Ok(config) => {
                self.publish(config);
                true
            }
            Err(e) => {
                log::debug!("Ignoring malformed preview config: {}", e);
                false
            }
        }
    }
}

/// Reader half: owns the widget tree currently on screen.
#[derive(Debug)]
pub struct PreviewSession {
    rx: watch::Receiver<LayoutConfig>,
    tree: Widget,
    version: u64,
}

impl PreviewSession {
    pub fn tree(&self) -> &Widget {
        &self.tree
    }

    /// Number of configs applied since the session opened.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// True once every sender is gone. A final staged config may still be pending.
    pub fn is_closed(&self) -> bool {
        self.rx.has_changed().is_err()
    }

    /// Applies the staged config if it is newer than the last one seen. Returns whether
    /// the tree was rebuilt. A config that fails to render leaves the old tree in place.
    pub fn poll(&mut self) -> bool {
        let config = {
            let latest = self.rx.borrow_and_update();
            if !latest.has_changed() {
                return false;
            }
            latest.clone()
        };
        match render_preview(&config) {
            Ok(tree) => {
                self.tree = tree;
                self.version += 1;
                log::debug!("Preview re-rendered (version {})", self.version);
                true
            }
            Err(e) => {
                log::warn!("Keeping previous preview, new config failed to render: {}", e);
                false
            }
        }
    }

    /// Polls until the session closes, calling `on_render` after every rebuild.
    /// Returns the session so the caller can inspect the final tree.
    pub async fn run<F>(mut self, poll_interval: Duration, mut on_render: F) -> Self
    where
        F: FnMut(&Widget, u64),
    {
        tokio::time::sleep(INITIAL_POLL_DELAY).await;
        let mut ticker = tokio::time::interval(poll_interval);
        loop {
            ticker.tick().await;
            let closed = self.is_closed();
            if self.poll() {
                on_render(&self.tree, self.version);
            }
            if closed {
                break;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT_CONFIG: &str = r#"{ "elements": [{ "type": "text", "text": "v1" }] }"#;

    #[test]
    fn starts_with_initial_tree() {
        let (_tx, mut session) = channel(LayoutConfig::default()).unwrap();
        assert_eq!(session.version(), 0);
        assert!(session.tree().children().is_empty());
        assert!(!session.poll());
    }

    #[test]
    fn rerenders_on_every_publish() {
        let (tx, mut session) = channel(LayoutConfig::default()).unwrap();
        assert!(tx.ingest_message(TEXT_CONFIG));
        assert!(session.poll());
        assert_eq!(session.tree().texts(), vec!["v1"]);
        assert!(!session.poll());

        assert!(tx.ingest_message(r#"{ "elements": [{ "type": "text", "text": "v2" }] }"#));
        assert!(session.poll());
        assert_eq!(session.tree().texts(), vec!["v2"]);
        assert_eq!(session.version(), 2);
    }

    #[test]
    fn only_latest_config_matters() {
        let (tx, mut session) = channel(LayoutConfig::default()).unwrap();
        tx.ingest_message(TEXT_CONFIG);
        tx.ingest_message(r#"{ "elements": [{ "type": "text", "text": "v3" }] }"#);
        assert!(session.poll());
        assert_eq!(session.tree().texts(), vec!["v3"]);
        assert_eq!(session.version(), 1);
    }

    #[test]
    fn ignores_non_json_payloads() {
        let (tx, mut session) = channel(LayoutConfig::default()).unwrap();
        assert!(!tx.ingest_message("hello"));
        assert!(!tx.ingest_message("[1, 2]"));
        assert!(!tx.ingest_message("{ not json"));
        assert!(!tx.ingest_message("  {}"));
        assert!(!session.poll());
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn bad_color_keeps_previous_tree() {
        let (tx, mut session) = channel(LayoutConfig::default()).unwrap();
        tx.ingest_message(TEXT_CONFIG);
        session.poll();
        assert!(tx.ingest_message(r#"{ "backgroundColor": "lavender" }"#));
        assert!(!session.poll());
        assert_eq!(session.tree().texts(), vec!["v1"]);
        assert_eq!(session.version(), 1);
    }

    #[tokio::test]
    async fn run_applies_last_config_and_stops_when_sender_drops() {
        let (tx, session) = channel(LayoutConfig::default()).unwrap();
        let handle = tokio::spawn(session.run(Duration::from_millis(5), |_, _| {}));
        tx.ingest_message(TEXT_CONFIG);
        drop(tx);
        let session = handle.await.unwrap();
        assert!(session.is_closed());
        assert_eq!(session.tree().texts(), vec!["v1"]);
        assert_eq!(session.version(), 1);
    }

    #[tokio::test]
    async fn run_reports_each_render() {
        let (tx, session) = channel(LayoutConfig::default()).unwrap();
        let mut seen = Vec::new();
        tx.ingest_message(TEXT_CONFIG);
        drop(tx);
        let session = session
            .run(Duration::from_millis(5), |tree, version| {
                seen.push((tree.count(), version))
            })
            .await;
        assert_eq!(seen, vec![(2, 1)]);
        assert_eq!(session.version(), 1);
    }
}
