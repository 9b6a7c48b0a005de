//! # Command queue: FIFO deferral of start calls.
//!
//! [`CommandQueue`] wraps scheduler invocations as deferred, replayable
//! units. There are no semantics beyond FIFO replay of otherwise
//! independent invocations: a command is an async closure producing a
//! `start()` result, executed when its turn comes.

use std::collections::VecDeque;
use std::future::Future;

use futures::future::BoxFuture;

use crate::error::ScheduleError;
use crate::scheduler::RunHandle;

type Command = Box<dyn FnOnce() -> BoxFuture<'static, Result<RunHandle, ScheduleError>> + Send>;

/// FIFO queue of deferred playback commands.
#[derive(Default)]
pub struct CommandQueue {
    commands: VecDeque<Command>,
}

impl CommandQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a deferred invocation.
    pub fn enqueue<F, Fut>(&mut self, command: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<RunHandle, ScheduleError>> + Send + 'static,
    {
        self.commands.push_back(Box::new(move || Box::pin(command())));
    }

    /// Executes the oldest queued command, if any, and returns its result.
    pub async fn execute_next(&mut self) -> Option<Result<RunHandle, ScheduleError>> {
        let command = self.commands.pop_front()?;
        Some(command().await)
    }

    /// Executes every queued command in FIFO order.
    pub async fn execute_all(&mut self) -> Vec<Result<RunHandle, ScheduleError>> {
        let mut results = Vec::with_capacity(self.commands.len());
        while let Some(result) = self.execute_next().await {
            results.push(result);
        }
        results
    }

    /// Number of commands waiting.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
