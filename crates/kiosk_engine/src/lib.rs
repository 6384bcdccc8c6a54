//! Kiosk engine: blocking network IO behind the transport seam.
mod joke;
mod ranking;
mod record;
mod retry;
mod transport;
mod types;

pub use joke::{parse_joke_body, FetchedJoke, JokeContent, JokeFetcher, TRANSLATION_MISSING};
pub use ranking::{RankedEntry, RankingFetcher};
pub use record::RatingLogger;
pub use retry::{Exhausted, RetryPolicy};
pub use transport::{AlwaysUp, HttpTransport, LinkMonitor, Transport, TransportSettings};
pub use types::{Clock, FetchJokeError, LogRatingError, Method, TransportError, TransportRequest};
