//! The engine task: run state and the batch loop.

use std::time::SystemTime;

use crossbeam_channel::{Receiver, Sender, TryRecvError};

use crate::crypto::{CandidateSource, SourceError};
use crate::matcher::{Pattern, PatternConfig};

use super::{Command, Event, VanityMatch};

/// Candidates processed per batch. Large enough to amortize channel and
/// scheduling overhead, small enough to keep stop latency acceptable.
pub const BATCH_SIZE: usize = 500;

/// State owned by the engine for the duration of one run. Dropped on stop,
/// on source failure, and never shared or reused across runs.
struct RunState {
    pattern: Pattern,
}

impl RunState {
    fn new(config: &PatternConfig) -> Self {
        Self {
            pattern: Pattern::compile(config),
        }
    }
}

/// A single search loop driven by commands, reporting through events.
///
/// Commands are observed only between batches; a batch in flight always runs
/// to completion, which bounds stop latency to one batch's generation time.
pub struct SearchEngine<S> {
    id: usize,
    source: S,
    commands: Receiver<Command>,
    events: Sender<Event>,
    run: Option<RunState>,
}

impl<S: CandidateSource> SearchEngine<S> {
    pub fn new(id: usize, source: S, commands: Receiver<Command>, events: Sender<Event>) -> Self {
        Self {
            id,
            source,
            commands,
            events,
            run: None,
        }
    }

    /// Returns the engine ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Runs until the command channel disconnects or the controller drops
    /// the event receiver. Idle engines block on the command channel.
    pub fn run(mut self) {
        loop {
            if self.run.is_some() {
                if !self.search_batch() {
                    break;
                }
                if !self.drain_commands() {
                    break;
                }
            } else {
                match self.commands.recv() {
                    Ok(command) => self.apply(command),
                    Err(_) => break,
                }
            }
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            // A duplicate start must not reset the active run.
            Command::Start(_) if self.run.is_some() => {}
            Command::Start(config) => self.run = Some(RunState::new(&config)),
            Command::Stop => self.run = None,
        }
    }

    /// Observes queued commands between batches. This is the engine's only
    /// suspension point. Returns false when the controller is gone.
    fn drain_commands(&mut self) -> bool {
        loop {
            match self.commands.try_recv() {
                Ok(command) => self.apply(command),
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => return false,
            }
        }
    }

    /// Generates and tests one batch of candidates.
    ///
    /// Matches are emitted eagerly; one progress event follows the batch. On
    /// source failure the run ends with a single `Failed` event and nothing
    /// further. Returns false once the event channel is closed.
    fn search_batch(&mut self) -> bool {
        let Some(run) = &self.run else {
            return true;
        };

        let mut processed = 0u64;
        let mut failure: Option<SourceError> = None;

        for _ in 0..BATCH_SIZE {
            let candidate = match self.source.candidate() {
                Ok(candidate) => candidate,
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            };
            processed += 1;

            if run.pattern.matches(&candidate.address().to_hex()) {
                let result = VanityMatch {
                    address: candidate.address().to_checksum(),
                    private_key: candidate.private_key_hex(),
                    created_at: SystemTime::now(),
                    engine_id: self.id,
                };
                if self.events.send(Event::Found(result)).is_err() {
                    return false;
                }
            }
        }

        if let Some(e) = failure {
            self.run = None;
            return self.events.send(Event::Failed(e)).is_ok();
        }

        self.events
            .send(Event::Progress {
                attempts: processed,
            })
            .is_ok()
    }
}
