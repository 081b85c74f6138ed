//! Running several engines against the same pattern.

use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::crypto::{CandidateSource, Secp256k1Source};
use crate::matcher::PatternConfig;

use super::handle::spawn_engine;
use super::{Command, Event};

/// A set of independent engines sharing one event stream.
///
/// Each engine has its own command channel and private run state; the pool
/// fans commands out and the engines fan events in. Counting matches and
/// attempts is the controller's job, so the pool keeps no totals of its own.
pub struct EnginePool {
    commands: Vec<Sender<Command>>,
    events: Receiver<Event>,
    threads: Option<Vec<JoinHandle<()>>>,
    started: Instant,
}

impl EnginePool {
    /// Spawns `num_engines` engines over secp256k1 candidate sources.
    pub fn new(num_engines: usize) -> Self {
        Self::with_sources((0..num_engines).map(|_| Secp256k1Source::new()))
    }

    /// Spawns one engine per source.
    pub fn with_sources<S, I>(sources: I) -> Self
    where
        S: CandidateSource + 'static,
        I: IntoIterator<Item = S>,
    {
        let (event_tx, event_rx) = unbounded();
        let mut commands = Vec::new();
        let mut threads = Vec::new();

        for (id, source) in sources.into_iter().enumerate() {
            let (cmd_tx, thread) = spawn_engine(id, source, event_tx.clone());
            commands.push(cmd_tx);
            threads.push(thread);
        }
        // The event channel closes once every engine has exited.
        drop(event_tx);

        Self {
            commands,
            events: event_rx,
            threads: Some(threads),
            started: Instant::now(),
        }
    }

    /// Starts a run on every engine.
    pub fn start(&self, config: &PatternConfig) {
        for commands in &self.commands {
            let _ = commands.send(Command::Start(config.clone()));
        }
    }

    /// Stops every engine at its next batch boundary.
    pub fn stop(&self) {
        for commands in &self.commands {
            let _ = commands.send(Command::Stop);
        }
    }

    /// Returns the merged event stream.
    pub fn events(&self) -> &Receiver<Event> {
        &self.events
    }

    /// Waits for the next event with a timeout.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Event> {
        self.events.recv_timeout(timeout).ok()
    }

    /// Returns the number of engines.
    pub fn num_engines(&self) -> usize {
        self.commands.len()
    }

    /// Returns the elapsed time since the pool was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Shuts every engine down and waits for the threads to exit.
    pub fn join(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Closing the command channels ends the engine loops.
        self.commands.clear();
        if let Some(threads) = self.threads.take() {
            for thread in threads {
                let _ = thread.join();
            }
        }
    }
}

impl Drop for EnginePool {
    fn drop(&mut self) {
        self.shutdown();
    }
}
