use anyhow::{Result, anyhow};
use rand::Rng;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use treatmon_protocol::{Direction, GameEvent, PlayerCommand, parse_command};

use crate::session::{GameSession, SessionError};

struct Request {
    command: PlayerCommand,
    reply: oneshot::Sender<Result<Vec<GameEvent>, SessionError>>,
}

/// Cloneable handle to a session running on its own task
///
/// The task applies one command at a time in arrival order, so clones may
/// be used from several tasks at once.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<Request>,
}

/// Move `session` onto a tokio task
///
/// The task ends once every handle is dropped and gives the session back.
pub fn spawn_session<R>(mut session: GameSession<R>) -> (SessionHandle, JoinHandle<GameSession<R>>)
where
    R: Rng + Send + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<Request>();

    let task = tokio::spawn(async move {
        while let Some(Request { command, reply }) = rx.recv().await {
            let result = session.apply(command);
            if let Err(e) = &result {
                tracing::debug!(error = %e, "Command failed");
            }
            if reply.send(result).is_err() {
                tracing::warn!("Caller went away before the reply");
            }
        }
        tracing::debug!("Session task finished");
        session
    });

    (SessionHandle { tx }, task)
}

impl SessionHandle {
    pub async fn send(&self, command: PlayerCommand) -> Result<Vec<GameEvent>> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Request { command, reply })
            .map_err(|_| anyhow!("Session closed"))?;

        let result = rx.await.map_err(|_| anyhow!("Session closed"))?;
        Ok(result?)
    }

    /// Parse one command line and send it
    pub async fn send_line(&self, line: &str) -> Result<Vec<GameEvent>> {
        let command = parse_command(line)?;
        self.send(command).await
    }

    pub async fn choose_starter(&self, name: &str) -> Result<Vec<GameEvent>> {
        self.send(PlayerCommand::ChooseStarter {
            name: name.to_string(),
        })
        .await
    }

    pub async fn explore(&self, tier: u8) -> Result<Vec<GameEvent>> {
        self.send(PlayerCommand::Explore { tier }).await
    }

    pub async fn step(&self, direction: Direction) -> Result<Vec<GameEvent>> {
        self.send(PlayerCommand::Move { direction }).await
    }

    pub async fn leave(&self) -> Result<Vec<GameEvent>> {
        self.send(PlayerCommand::Leave).await
    }

    pub async fn attack(&self) -> Result<Vec<GameEvent>> {
        self.send(PlayerCommand::Attack).await
    }

    pub async fn catch(&self) -> Result<Vec<GameEvent>> {
        self.send(PlayerCommand::Catch).await
    }

    /// Swap to a 1-based roster slot, or the default target when None
    pub async fn swap(&self, slot: Option<usize>) -> Result<Vec<GameEvent>> {
        self.send(PlayerCommand::Swap { slot }).await
    }

    pub async fn flee(&self) -> Result<Vec<GameEvent>> {
        self.send(PlayerCommand::Flee).await
    }

    pub async fn inventory(&self) -> Result<Vec<GameEvent>> {
        self.send(PlayerCommand::Inventory).await
    }

    pub async fn set_active(&self, slot: usize) -> Result<Vec<GameEvent>> {
        self.send(PlayerCommand::SetActive { slot }).await
    }

    pub async fn evolvable(&self) -> Result<Vec<GameEvent>> {
        self.send(PlayerCommand::Evolvable).await
    }

    pub async fn evolve(&self, first: usize, second: usize) -> Result<Vec<GameEvent>> {
        self.send(PlayerCommand::Evolve { first, second }).await
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use treatmon_protocol::ParseError;

    use super::*;
    use crate::config::GameConfig;

    fn spawn(chance: u32) -> (SessionHandle, JoinHandle<GameSession>) {
        let config = GameConfig {
            encounter_chance_percent: chance,
            ..GameConfig::default()
        };
        spawn_session(GameSession::new(config, StdRng::seed_from_u64(42)))
    }

    #[tokio::test]
    async fn test_round_trip() {
        let (handle, task) = spawn(0);

        let events = handle.choose_starter("Frubat").await.unwrap();
        assert_eq!(
            events,
            vec![GameEvent::StarterChosen {
                name: "Frubat".to_string(),
                element: "NATURE".to_string(),
            }]
        );

        handle.explore(2).await.unwrap();
        let events = handle.step(Direction::Down).await.unwrap();
        assert_eq!(events, vec![GameEvent::Moved { x: 0, y: 1 }]);

        drop(handle);
        let session = task.await.unwrap();
        assert_eq!(session.roster().len(), 1);
        assert_eq!(session.area().map(|a| a.position()), Some((0, 1)));
    }

    #[tokio::test]
    async fn test_session_errors_come_back() {
        let (handle, _task) = spawn(0);

        let err = handle.attack().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SessionError>(),
            Some(SessionError::NoBattle)
        ));

        let err = handle.explore(1).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SessionError>(),
            Some(SessionError::NoStarter)
        ));
    }

    #[tokio::test]
    async fn test_send_line() {
        let (handle, _task) = spawn(100);

        handle.send_line("starter Oshacone").await.unwrap();
        handle.send_line("explore 1").await.unwrap();
        let events = handle.send_line("right").await.unwrap();
        assert!(matches!(events[1], GameEvent::Encounter { .. }));

        let events = handle.send_line("flee").await.unwrap();
        assert!(events.iter().any(GameEvent::ends_battle));

        let err = handle.send_line("dance").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::UnknownCommand(_))
        ));
    }

    #[tokio::test]
    async fn test_clones_share_one_session() {
        let (handle, task) = spawn(0);
        handle.choose_starter("Malts").await.unwrap();
        handle.explore(3).await.unwrap();

        let mut joins = Vec::new();
        for direction in [Direction::Right, Direction::Down] {
            let h = handle.clone();
            joins.push(tokio::spawn(async move { h.step(direction).await }));
        }
        for join in joins {
            join.await.unwrap().unwrap();
        }

        drop(handle);
        let session = task.await.unwrap();
        assert_eq!(session.area().map(|a| a.position()), Some((1, 1)));
    }

    #[tokio::test]
    async fn test_closed_session() {
        let (handle, task) = spawn(0);
        task.abort();
        let _ = task.await;

        let err = handle.inventory().await.unwrap_err();
        assert_eq!(err.to_string(), "Session closed");
    }
}
