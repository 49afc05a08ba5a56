//! Interactive Browser
//!
//! The list/detail interaction loop: prefetch all three collections, then
//! take selections from stdin. Each selection spawns a detail fetch; the
//! outcome comes back over a channel and triggers a full re-render whether
//! it succeeded or not.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::api::{ApiClient, ClientError, Event};
use crate::state::AppState;
use crate::view;

/// The interactive list/detail application
pub struct App {
    state: AppState,
    client: Arc<ApiClient>,
}

impl App {
    pub fn new(client: ApiClient, state: AppState) -> Self {
        Self {
            state,
            client: Arc::new(client),
        }
    }

    /// Run until the user quits or stdin closes
    pub async fn run(mut self) -> std::io::Result<()> {
        self.prefetch().await;
        self.render();

        let (tx, mut rx) = mpsc::unbounded_channel::<(u64, Result<Event, ClientError>)>();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.prompt();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            if !self.handle_input(line.trim(), &tx) {
                                break;
                            }
                        }
                        None => break,
                    }
                }
                Some((token, outcome)) = rx.recv() => {
                    // Re-render regardless of outcome; stale tokens are
                    // discarded inside apply_detail
                    self.state.apply_detail(token, outcome);
                    self.render();
                    self.prompt();
                }
            }
        }

        Ok(())
    }

    /// One-time concurrent prefetch of all three collections
    ///
    /// Rendering proceeds once all three have settled; partial data is
    /// acceptable.
    async fn prefetch(&mut self) {
        tracing::info!("Loading events, guests, and RSVPs");

        let (events, guests, rsvps) = tokio::join!(
            self.client.fetch_events(),
            self.client.fetch_guests(),
            self.client.fetch_rsvps(),
        );

        self.state.apply_events(events);
        self.state.apply_guests(guests);
        self.state.apply_rsvps(rsvps);
    }

    /// Handle a line of input; returns false when the user quits
    fn handle_input(
        &mut self,
        input: &str,
        tx: &mpsc::UnboundedSender<(u64, Result<Event, ClientError>)>,
    ) -> bool {
        match input {
            "" => {
                self.prompt();
            }
            "q" | "quit" => return false,
            _ => match input.parse::<usize>() {
                Ok(n) if (1..=self.state.events.len()).contains(&n) => {
                    self.select(self.state.events[n - 1].id, tx);
                }
                _ => {
                    println!("Enter an event number from the lineup, or q to quit.");
                    self.prompt();
                }
            },
        }
        true
    }

    /// Spawn a detail fetch for the given event
    ///
    /// Selections are not debounced; a second selection before the first
    /// resolves simply issues a newer token and the earlier response is
    /// discarded on arrival.
    fn select(&mut self, id: i64, tx: &mpsc::UnboundedSender<(u64, Result<Event, ClientError>)>) {
        let token = self.state.begin_detail_fetch();
        let client = Arc::clone(&self.client);
        let tx = tx.clone();

        tokio::spawn(async move {
            let outcome = client.fetch_event(id).await;
            let _ = tx.send((token, outcome));
        });
    }

    /// Rebuild and print the whole page from current state
    fn render(&self) {
        print!("{}", view::render(&view::page(&self.state)));
    }

    fn prompt(&self) {
        println!("Select an event number, or q to quit:");
    }
}
