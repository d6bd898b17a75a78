//! Producer/consumer handoff: the search runs on one worker thread and blocks
//! on every emission until the consumer takes the map (rendezvous channel).

use std::ops::ControlFlow;
use std::sync::mpsc::{sync_channel, Receiver};
use std::thread::{self, JoinHandle};

use crate::flag_map::FlagMap;
use crate::multiset::DegreeMultiset;

use super::dfs::try_for_each_map;
use super::types::SearchStats;

/// Stream of rooted maps produced by a background search.
///
/// Dropping the stream early closes the channel; the producer notices on its
/// next emission and unwinds its scopes normally.
pub struct MapStream {
    rx: Receiver<FlagMap>,
    worker: JoinHandle<SearchStats>,
}

impl MapStream {
    pub fn spawn(degrees: DegreeMultiset) -> Self {
        let (tx, rx) = sync_channel(0);
        let worker = thread::spawn(move || {
            try_for_each_map(&degrees, |m| match tx.send(m) {
                Ok(()) => ControlFlow::Continue(()),
                Err(_) => ControlFlow::Break(()),
            })
        });
        Self { rx, worker }
    }

    /// Close the stream and wait for the producer. Re-raises a producer panic.
    pub fn finish(self) -> SearchStats {
        let Self { rx, worker } = self;
        drop(rx);
        match worker.join() {
            Ok(stats) => stats,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}

impl Iterator for MapStream {
    type Item = FlagMap;

    fn next(&mut self) -> Option<FlagMap> {
        self.rx.recv().ok()
    }
}
