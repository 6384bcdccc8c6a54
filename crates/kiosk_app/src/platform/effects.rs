use std::sync::Arc;
use std::time::Duration;

use kiosk_core::{pattern, Effect, Msg, RankingRow};
use kiosk_engine::{
    Clock, HttpTransport, JokeFetcher, RankedEntry, RankingFetcher, RatingLogger, RetryPolicy,
    Transport, TransportSettings,
};
use kiosk_logging::{kiosk_error, kiosk_info};

use super::config::KioskConfig;
use super::tone::ToneSink;

/// Executes effects synchronously: the control loop hands one effect
/// over and does nothing else until it finishes, which is how the
/// single-threaded appliance behaves during a fetch or retry storm.
pub struct EffectRunner {
    jokes: JokeFetcher,
    logger: RatingLogger,
    ranking: RankingFetcher,
    tones: Box<dyn ToneSink>,
}

impl EffectRunner {
    pub fn new(config: &KioskConfig, tones: Box<dyn ToneSink>) -> Self {
        let settings = TransportSettings {
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            accept_invalid_certs: config.accept_invalid_certs,
            ..TransportSettings::default()
        };
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(settings));
        let policy = RetryPolicy {
            delay: Duration::from_millis(config.retry_delay_ms),
            max_attempts: None,
        };
        let format = config.time_format.clone();
        let clock: Clock = Arc::new(move || chrono::Local::now().format(&format).to_string());

        Self {
            jokes: JokeFetcher::new(transport.clone(), &config.joke_url, policy).with_clock(clock),
            logger: RatingLogger::new(transport.clone(), &config.log_url, policy),
            ranking: RankingFetcher::new(transport, &config.ranking_url),
            tones,
        }
    }

    /// Runs one effect to completion and returns its completion message,
    /// if the effect produces one.
    pub fn run(&self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::FetchJoke { category } => {
                match self.jokes.fetch_joke(category.as_str()) {
                    Ok(fetched) => {
                        // The translation segment is informational only
                        // and goes to the log, not the panel.
                        kiosk_info!("[Translation] {}", fetched.content.secondary);
                        Some(Msg::JokeReady {
                            primary: fetched.content.primary,
                            fetched_at: fetched.fetched_at,
                        })
                    }
                    // Only reachable with a misconfigured endpoint URL;
                    // the unbounded policy never gives up on the network.
                    Err(err) => {
                        kiosk_error!("joke fetch aborted: {}", err);
                        Some(Msg::OperationAborted)
                    }
                }
            }
            Effect::PlayFeedback { rating } => {
                for tone in pattern(rating) {
                    self.tones.play(&tone);
                }
                None
            }
            Effect::LogRating {
                category,
                joke,
                rating,
            } => match self.logger.log_rating(category.as_str(), &joke, rating) {
                Ok(()) => Some(Msg::RatingSaved),
                Err(err) => {
                    kiosk_error!("rating log aborted: {}", err);
                    Some(Msg::OperationAborted)
                }
            },
            Effect::FetchRanking => {
                let entries = self.ranking.fetch_top();
                Some(Msg::RankingReady {
                    entries: entries.into_iter().map(map_entry).collect(),
                })
            }
        }
    }
}

fn map_entry(entry: RankedEntry) -> RankingRow {
    RankingRow {
        rank: entry.rank,
        joke: entry.joke,
        rating: entry.rating,
    }
}
