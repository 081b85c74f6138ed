//! Controller-side handle for one engine thread.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::crypto::CandidateSource;
use crate::matcher::PatternConfig;

use super::search::SearchEngine;
use super::{Command, Event};

/// Spawns an engine on a named thread, wired to the given event sender.
/// The returned command sender is the only way to reach the engine; dropping
/// it ends the engine's loop at the next batch boundary.
pub(super) fn spawn_engine<S>(
    id: usize,
    source: S,
    events: Sender<Event>,
) -> (Sender<Command>, JoinHandle<()>)
where
    S: CandidateSource + 'static,
{
    let (cmd_tx, cmd_rx) = unbounded();
    let handle = thread::Builder::new()
        .name(format!("vanity-engine-{}", id))
        .spawn(move || SearchEngine::new(id, source, cmd_rx, events).run())
        .expect("Failed to spawn engine thread");
    (cmd_tx, handle)
}

/// Owns one engine thread and its command/event channels.
///
/// All interaction is message-based: the handle never reads or mutates the
/// engine's run state. Dropping the handle shuts the engine down and joins
/// the thread.
pub struct EngineHandle {
    commands: Option<Sender<Command>>,
    events: Receiver<Event>,
    thread: Option<JoinHandle<()>>,
}

impl EngineHandle {
    /// Spawns an engine over the given candidate source.
    pub fn spawn<S>(id: usize, source: S) -> Self
    where
        S: CandidateSource + 'static,
    {
        let (event_tx, event_rx) = unbounded();
        let (cmd_tx, thread) = spawn_engine(id, source, event_tx);
        Self {
            commands: Some(cmd_tx),
            events: event_rx,
            thread: Some(thread),
        }
    }

    /// Requests a run. Ignored by the engine while a run is active.
    pub fn start(&self, config: &PatternConfig) {
        self.send(Command::Start(config.clone()));
    }

    /// Requests a stop, effective at the next batch boundary.
    pub fn stop(&self) {
        self.send(Command::Stop);
    }

    fn send(&self, command: Command) {
        if let Some(commands) = &self.commands {
            let _ = commands.send(command);
        }
    }

    /// Returns the event stream.
    pub fn events(&self) -> &Receiver<Event> {
        &self.events
    }

    /// Waits for the next event with a timeout.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Event> {
        self.events.recv_timeout(timeout).ok()
    }

    /// Receives an event without blocking.
    pub fn try_recv(&self) -> Option<Event> {
        self.events.try_recv().ok()
    }

    /// Shuts the engine down and waits for the thread to exit.
    pub fn join(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Closing the command channel ends the engine loop.
        self.commands.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{addr_with_prefix, ScriptedSource};
    use super::*;

    #[test]
    fn test_target_count_run_emits_exact_matches() {
        // Exactly three matching candidates up front, then misses forever.
        let source = ScriptedSource::then_sticky(vec![
            addr_with_prefix(&[0xde, 0xad], 0x01),
            addr_with_prefix(&[0xde, 0xad], 0x02),
            addr_with_prefix(&[0xde, 0xad], 0x03),
            [0u8; 20],
        ]);
        let config = PatternConfig {
            count: 3,
            starts_with: "dead".into(),
            ..PatternConfig::default()
        };

        let handle = EngineHandle::spawn(7, source);
        handle.start(&config);

        let mut found = Vec::new();
        while found.len() < config.count {
            match handle.recv_timeout(Duration::from_secs(10)) {
                Some(Event::Found(m)) => found.push(m),
                Some(_) => {}
                None => panic!("engine produced no events"),
            }
        }
        handle.stop();

        let events = handle.events().clone();
        handle.join();

        // Only trailing progress may remain after the stop took effect.
        for event in events.try_iter() {
            assert!(matches!(event, Event::Progress { .. }));
        }
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|m| m.engine_id == 7));
        assert!(found
            .iter()
            .all(|m| m.address[2..].to_lowercase().starts_with("dead")));
    }

    #[test]
    fn test_join_while_idle() {
        let handle = EngineHandle::spawn(0, ScriptedSource::cycling(vec![[0u8; 20]]));
        handle.join();
    }
}
