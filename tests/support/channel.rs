use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use epochcast::error::{ChannelError, Result};
use epochcast::port::Channel;

/// Thread-safe message collector for send assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingChannel {
    sent: Arc<Mutex<Vec<String>>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().expect("lock sent messages").clone()
    }

    pub fn len(&self) -> usize {
        self.sent.lock().expect("lock sent messages").len()
    }
}

#[async_trait]
impl Channel for RecordingChannel {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, text: &str) -> Result<()> {
        self.sent
            .lock()
            .expect("lock sent messages")
            .push(text.to_string());
        Ok(())
    }
}

/// Channel whose every send fails with the given HTTP status.
pub struct FailingChannel {
    pub status: u16,
}

#[async_trait]
impl Channel for FailingChannel {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn send(&self, _text: &str) -> Result<()> {
        Err(ChannelError::Rejected {
            channel: "failing",
            status: self.status,
            body: "service unavailable".into(),
        }
        .into())
    }
}
