use tokio::sync::mpsc::Sender;
use tracing::debug;

use super::types::{GraphJob, GraphSource, JoinHandleResult};

pub struct Producer<S: GraphSource> {
    source: S,
}

impl<S> Producer<S>
where
    S: GraphSource,
{
    pub fn new(source: S) -> Self {
        Producer { source }
    }

    pub fn spawn(self, sender: Sender<GraphJob>) -> JoinHandleResult {
        debug!("Producer ready.");
        tokio::spawn(async move { self.source.run_stream(sender).await })
    }
}
