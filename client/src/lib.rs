//! Game sessions for treatmon.
//!
//! A [`GameSession`] holds one player's game: the starter choice, the
//! roster, the area being explored and the battle in progress. Commands
//! from [`treatmon_protocol`] go in, [`GameEvent`]s come out, and every
//! rule is delegated to [`treatmon_battle`].
//!
//! [`spawn_session`] moves a session onto a tokio task and returns a
//! [`SessionHandle`]; the task applies one command at a time.
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use treatmon_client::{GameConfig, GameSession, spawn_session};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let session = GameSession::new(GameConfig::default(), StdRng::from_entropy());
//! let (handle, _task) = spawn_session(session);
//!
//! handle.send_line("starter Strawander").await?;
//! handle.send_line("explore 1").await?;
//! for event in handle.send_line("move right").await? {
//!     println!("{}", event);
//! }
//! # Ok(())
//! # }
//! ```

mod area;
pub mod config;
mod handle;
mod session;

pub use area::Area;
pub use config::{AreaConfig, GameConfig};
pub use handle::{SessionHandle, spawn_session};
pub use session::{GameSession, SessionError};

pub use treatmon_protocol::{Direction, GameEvent, ParseError, PlayerCommand, parse_command};
